use square_models::{
    ApiResponse, Error, HttpContext, ListLocationsResponse, ListRefundsResponse, Paginated,
    ResponseEnvelope,
};
use std::sync::Arc;

#[test]
fn envelopes_compare_context_by_identity() {
    let context = Arc::new(HttpContext::new(200, "{}"));
    let a = ResponseEnvelope::new(ListRefundsResponse::default(), Arc::clone(&context));
    let b = ResponseEnvelope::new(ListRefundsResponse::default(), context);
    let twin = ResponseEnvelope::new(ListRefundsResponse::default(), Arc::new(HttpContext::new(200, "{}")));

    assert_eq!(a, b);
    assert_ne!(a, twin);
    assert_eq!(a.body(), twin.body());
}

#[test]
fn envelope_derefs_to_body() {
    let body = ListRefundsResponse { cursor: Some("next".into()), ..Default::default() };
    let envelope = ResponseEnvelope::new(body, Arc::new(HttpContext::new(200, "")));

    assert_eq!(envelope.cursor(), Some("next"));
    assert!(envelope.has_more());
    assert_eq!(envelope.into_body().cursor.as_deref(), Some("next"));
}

#[test]
fn map_keeps_the_same_context() {
    let envelope = ResponseEnvelope::new(ListLocationsResponse::default(), Arc::new(HttpContext::new(200, "{}")));
    let context = envelope.shared_context();
    let mapped = envelope.map(|body| body.locations.unwrap_or_default().len());

    assert_eq!(*mapped, 0);
    assert!(Arc::ptr_eq(&mapped.shared_context(), &context));
}

#[test]
fn errors_decide_success() {
    let ok = ListLocationsResponse::default();
    let failed = ListLocationsResponse {
        errors: Some(vec![Error::new("AUTHENTICATION_ERROR", "UNAUTHORIZED")]),
        ..Default::default()
    };

    assert!(ok.is_success());
    assert!(ok.errors().is_empty());
    assert!(!failed.is_success());
    assert_eq!(failed.errors()[0].code, "UNAUTHORIZED");
}

#[test]
fn empty_cursor_means_last_page() {
    let last = ListRefundsResponse { cursor: Some(String::new()), ..Default::default() };
    assert!(!last.has_more());
    assert!(!ListRefundsResponse::default().has_more());
}

#[test]
fn headers_are_case_insensitive() {
    let context = HttpContext::new(429, "").with_header("Retry-After", "3");
    assert_eq!(context.header("retry-after"), Some("3"));
    assert!(!context.is_success());
}
