//! Transport metadata attached to decoded response bodies.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Raw HTTP metadata of a response, as captured by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpContext {
    pub status_code: u16,
    /// Header names are stored lowercase.
    pub headers: BTreeMap<String, String>,
    /// The undecoded response body.
    pub body: String,
}

impl HttpContext {
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self { status_code, headers: BTreeMap::new(), body: body.into() }
    }

    /// Adds a header, lowercasing its name.
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Looks a header up by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// A decoded response body together with the HTTP context it arrived in.
///
/// The body stays a plain value record. The context is shared and compared by identity:
/// two envelopes are equal when their bodies are structurally equal and they point at the
/// same context.
///
/// ```rust
/// use std::sync::Arc;
/// use square_models::{HttpContext, ListLocationsResponse, ResponseEnvelope};
///
/// let context = Arc::new(HttpContext::new(200, "{}"));
/// let a = ResponseEnvelope::new(ListLocationsResponse::default(), Arc::clone(&context));
/// let b = ResponseEnvelope::new(ListLocationsResponse::default(), context);
/// let c = ResponseEnvelope::new(ListLocationsResponse::default(), Arc::new(HttpContext::new(200, "{}")));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert!(a.locations.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ResponseEnvelope<T> {
    body: T,
    context: Arc<HttpContext>,
}

impl<T> ResponseEnvelope<T> {
    #[must_use]
    pub const fn new(body: T, context: Arc<HttpContext>) -> Self {
        Self { body, context }
    }

    #[must_use]
    pub const fn body(&self) -> &T {
        &self.body
    }

    #[must_use]
    pub fn context(&self) -> &HttpContext {
        &self.context
    }

    /// Shares the context, e.g. to attach it to a derived envelope.
    #[must_use]
    pub fn shared_context(&self) -> Arc<HttpContext> {
        Arc::clone(&self.context)
    }

    #[must_use]
    pub fn into_body(self) -> T {
        self.body
    }

    #[must_use]
    pub fn into_parts(self) -> (T, Arc<HttpContext>) {
        (self.body, self.context)
    }

    /// Transforms the body while keeping the same context.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope { body: f(self.body), context: self.context }
    }
}

impl<T> Deref for ResponseEnvelope<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl<T: PartialEq> PartialEq for ResponseEnvelope<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.context, &other.context) && self.body == other.body
    }
}

impl<T: Eq> Eq for ResponseEnvelope<T> {}

impl<T: Hash> Hash for ResponseEnvelope<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body.hash(state);
        Arc::as_ptr(&self.context).hash(state);
    }
}
