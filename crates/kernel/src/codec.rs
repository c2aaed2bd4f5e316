//! JSON codec used by the transport to encode request records and decode response bodies.

use crate::error::{CodecError, CodecErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use square_models::{ApiResponse, HttpContext, ResponseEnvelope};
use std::any::type_name;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Body decoded when a successful response arrives without one.
const EMPTY_OBJECT: &str = "{}";

/// Serializes a record into its JSON wire form.
///
/// # Errors
/// Returns [`CodecError::Json`] if serialization fails.
#[instrument(level = "debug", skip_all, fields(record = type_name::<T>()))]
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).context(format!("Failed to encode {}", type_name::<T>()))
}

/// Serializes a record into a JSON value tree.
///
/// # Errors
/// Returns [`CodecError::Json`] if serialization fails.
#[instrument(level = "debug", skip_all, fields(record = type_name::<T>()))]
pub fn encode_value<T: Serialize>(value: &T) -> Result<serde_json::Value, CodecError> {
    serde_json::to_value(value).context(format!("Failed to encode {}", type_name::<T>()))
}

/// Parses a record from JSON. Unknown keys are ignored and missing optional keys stay absent.
///
/// # Errors
/// Returns [`CodecError::Json`] with the target type in its context when the input is not
/// valid JSON or does not match the record.
#[instrument(level = "debug", skip_all, fields(record = type_name::<T>(), len = json.len()))]
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, CodecError> {
    let value: T =
        serde_json::from_str(json).context(format!("Failed to decode {}", type_name::<T>()))?;
    debug!("Decoded {}", type_name::<T>());
    Ok(value)
}

/// Decodes the raw body captured in `context` and wraps the result with the context.
///
/// A successful response with an empty body decodes as `{}`.
///
/// # Errors
/// * [`CodecError::Internal`] if an unsuccessful response carries no body.
/// * [`CodecError::Json`] if the body does not decode into `T`.
#[instrument(
    level = "debug",
    skip_all,
    fields(record = type_name::<T>(), status = context.status_code, len = context.body.len())
)]
pub fn decode_response<T>(context: HttpContext) -> Result<ResponseEnvelope<T>, CodecError>
where
    T: DeserializeOwned + ApiResponse,
{
    let raw = context.body.trim();
    let raw = if raw.is_empty() {
        if !context.is_success() {
            return Err(CodecError::Internal {
                message: Cow::Owned(format!("HTTP {} with an empty body", context.status_code)),
                context: Some(Cow::Borrowed(type_name::<T>())),
            });
        }
        EMPTY_OBJECT
    } else {
        raw
    };

    let body: T = decode(raw)?;
    if body.is_success() {
        if !context.is_success() {
            warn!(status = context.status_code, "Unsuccessful response without API errors");
        }
    } else {
        warn!(
            status = context.status_code,
            errors = body.errors().len(),
            "Response {} carries API errors",
            type_name::<T>()
        );
    }

    Ok(ResponseEnvelope::new(body, Arc::new(context)))
}
