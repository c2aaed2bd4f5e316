use serde_json::json;
use square_kernel::codec::{decode, decode_response, encode, encode_value};
use square_kernel::models::{
    ApiResponse, CreatePaymentRequest, HttpContext, ListRefundsResponse, Money, Paginated,
    SearchOrdersResponse,
};
use square_kernel::CodecError;

#[test]
fn encode_and_decode_round_trip() {
    let request = CreatePaymentRequest::new("cnon:abc", "idem-1", Money::of(100, "USD"));
    let json = encode(&request).unwrap();
    assert_eq!(decode::<CreatePaymentRequest>(&json).unwrap(), request);
}

#[test]
fn encode_value_omits_absent_fields() {
    let request = CreatePaymentRequest::new("cnon:abc", "idem-1", Money::of(100, "USD"));
    assert_eq!(
        encode_value(&request).unwrap(),
        json!({
            "source_id": "cnon:abc",
            "idempotency_key": "idem-1",
            "amount_money": { "amount": 100, "currency": "USD" }
        })
    );
}

#[test]
fn decode_errors_name_the_target_type() {
    let err = decode::<CreatePaymentRequest>(r#"{"source_id": 5}"#).unwrap_err();
    match &err {
        CodecError::Json { context: Some(context), .. } => {
            assert!(context.contains("CreatePaymentRequest"), "unexpected context: {context}");
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("JSON error (Failed to decode "));
}

#[test]
fn decode_response_attaches_context() {
    let context = HttpContext::new(200, r#"{"refunds":[{"id":"R1","location_id":"L1","tender_id":"T1","reason":"damaged","amount_money":{"amount":50,"currency":"USD"},"status":"PENDING"}],"cursor":"c2"}"#)
        .with_header("Square-Version", "2020-11-18");
    let response = decode_response::<ListRefundsResponse>(context).unwrap();

    assert!(response.is_success());
    assert_eq!(response.cursor(), Some("c2"));
    assert_eq!(response.context().header("square-version"), Some("2020-11-18"));
    assert_eq!(response.refunds.as_ref().unwrap()[0].amount_money, Money::of(50, "USD"));
}

#[test]
fn decode_response_keeps_api_errors() {
    let context = HttpContext::new(
        401,
        r#"{"errors":[{"category":"AUTHENTICATION_ERROR","code":"UNAUTHORIZED","detail":"bad token"}]}"#,
    );
    let response = decode_response::<SearchOrdersResponse>(context).unwrap();

    assert!(!response.is_success());
    assert_eq!(response.errors()[0].detail.as_deref(), Some("bad token"));
    assert_eq!(response.context().status_code, 401);
}

#[test]
fn empty_successful_body_decodes_as_empty_object() {
    let response = decode_response::<SearchOrdersResponse>(HttpContext::new(200, "  ")).unwrap();
    assert_eq!(*response.body(), SearchOrdersResponse::default());
}

#[test]
fn empty_failed_body_is_an_internal_error() {
    let err = decode_response::<SearchOrdersResponse>(HttpContext::new(503, "")).unwrap_err();
    assert!(matches!(err, CodecError::Internal { .. }));
    assert!(err.to_string().contains("HTTP 503 with an empty body"));
}
