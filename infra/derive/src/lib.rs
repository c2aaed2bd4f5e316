#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Square data-model workspace.
//!
//! * [`macro@model`] turns a plain struct into a wire record: serde policy, structural
//!   equality, a typed builder, `new`/`with` constructors and a `Display` rendering.
//! * [`macro@square_error`] wires an error enum into `thiserror` with context support.
//!
//! ## Usage
//! Record types are declared inside `square-models`, which re-exports [`macro@model`] and the
//! crates the generated code refers to (`serde`, `typed_builder`):
//! ```toml
//! [dependencies]
//! square-models = { path = "../crates/models" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro that generates a Square wire record from a struct with named fields.
///
/// A field of type `Option<T>` is optional: it is omitted from serialized output when `None`
/// and defaults to `None` when the key is missing. Every other field is required and becomes a
/// parameter of the generated `new` constructor and a mandatory builder step.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Serialize`, `Deserialize` and
///   `TypedBuilder` unless already present. `Default` when every field is optional.
/// * **Serde Policy**:
///     * `rename_all = "snake_case"` by default (can be overridden).
///     * Unknown wire keys are ignored unless `deny_unknown_fields = true`.
///     * Optional fields get `default` and `skip_serializing_if = "Option::is_none"`.
/// * **Constructors**: `new(required…)` and `with(|next| …)` for copy-and-modify.
/// * **Rendering**: `Display` as `Name : (field = value, …)` with `null` for absent fields,
///   plus a `square_models::render::Render` impl so the record can be nested.
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = true` - Rejects unknown keys on deserialization.
///
/// # Field Arguments
///
/// * `#[model(emit_null)]` - Serialize an optional field as `null` instead of omitting it.
///
/// # Example
///
/// ```rust,ignore
/// use square_models::model;
///
/// #[model]
/// pub struct CreateRefundRequest {
///     pub idempotency_key: String,
///     pub payment_id: String,
///     pub reason: Option<String>,
///     pub amount_money: Money,
/// }
///
/// let request = CreateRefundRequest::builder()
///     .idempotency_key("idem-7")
///     .payment_id("pay-1")
///     .amount_money(Money::of(100, "USD"))
///     .build();
/// ```
#[proc_macro_attribute]
pub fn model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::model::expand_model(args.into(), input).into()
}

/// Attribute macro for error enums used across the workspace.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait with `.context()` for results
///   carrying this error or one of its source errors.
/// * **Conversions**: `From<Source>` for variants with a `source` field, and `From<&'static str>`
///   / `From<String>` when an `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// Every variant uses named fields and carries `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use square_derive::square_error;
/// use std::borrow::Cow;
///
/// #[square_error]
/// pub enum CodecError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal codec error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn square_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
