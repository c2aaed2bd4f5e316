//! # Codec Errors
//!
//! Failures raised while moving records to and from their JSON wire form.

use std::borrow::Cow;

#[square_derive::square_error]
pub enum CodecError {
    /// Malformed JSON, or JSON whose shape does not match the target record.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for responses that cannot be decoded at all.
    #[error("Internal codec error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
