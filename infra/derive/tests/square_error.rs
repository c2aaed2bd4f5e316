use square_derive::square_error;
use std::borrow::Cow;

#[square_error]
pub enum ParseError {
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(input: &str) -> Result<serde_json::Value, ParseError> {
    serde_json::from_str(input).context("parsing input")
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse("{").unwrap_err();
    assert!(matches!(&err, ParseError::Json { context: Some(c), .. } if c == "parsing input"));
    assert!(err.to_string().starts_with("JSON error (parsing input): "));
}

#[test]
fn source_errors_convert_without_context() {
    let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
    let err = ParseError::from(source);
    assert!(matches!(err, ParseError::Json { context: None, .. }));
    assert!(err.to_string().starts_with("JSON error: "));
}

#[test]
fn messages_become_internal_errors() {
    let borrowed = ParseError::from("static message");
    let owned = ParseError::from(format!("code {}", 7));
    assert_eq!(borrowed.to_string(), "Internal error: static message");
    assert_eq!(owned.to_string(), "Internal error: code 7");
}

#[test]
fn context_replaces_previous_context() {
    let result: Result<(), ParseError> = Err(ParseError::from("boom"));
    let err = result.context("first").context("second").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (second): boom");
}

#[test]
fn ok_values_pass_through() {
    let result: Result<u8, ParseError> = Ok(3);
    assert_eq!(result.context("unused").unwrap(), 3);
}
