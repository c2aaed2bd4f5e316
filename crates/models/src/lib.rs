//! Record types of the Square REST API.
//!
//! Every record is a plain value: `pub` fields named after their wire keys, structural
//! equality and hashing, a `Display` rendering and serde support. None of them perform I/O;
//! a transport builds them from response bodies and serializes them into request bodies.
//!
//! ## Constructing records
//!
//! Required fields are the parameters of `new`, in declaration order. Optional fields start
//! absent and can be set directly or through the copy-and-modify helper `with`:
//!
//! ```rust
//! use square_models::{CreatePaymentRequest, Money};
//!
//! let request = CreatePaymentRequest::new("cnon:abc", "idem-1", Money::of(100, "USD"));
//! let tipped = request.with(|r| r.tip_money = Some(Money::of(15, "USD")));
//!
//! assert!(request.tip_money.is_none());
//! assert_eq!(tipped.amount_money, request.amount_money);
//! ```
//!
//! Records whose fields are all optional also implement `Default`, so struct update syntax
//! works as well:
//!
//! ```rust
//! use square_models::CustomerTextFilter;
//!
//! let filter = CustomerTextFilter { exact: Some("ada@example.com".into()), ..Default::default() };
//! assert_eq!(filter.to_string(), "CustomerTextFilter : (exact = ada@example.com, fuzzy = null)");
//! ```
//!
//! ## Builders
//!
//! `Record::builder()` offers fluent construction. Optional setters take the inner value, and
//! `build()` only exists once every required field is set:
//!
//! ```rust,compile_fail
//! use square_models::CreatePaymentRequest;
//!
//! // Missing `amount_money`: `build` is not callable.
//! let request = CreatePaymentRequest::builder().source_id("cnon:abc").idempotency_key("idem-1").build();
//! ```
//!
//! ## Wire format
//!
//! Keys are snake_case. Absent optional fields are omitted from the output, missing keys
//! deserialize to `None` and unknown keys are ignored. Money amounts are 64-bit integers in
//! the smallest currency unit; percentages, rates and quantities stay decimal strings.

extern crate self as square_models;

mod bank_accounts;
mod bookings;
mod cash_drawers;
mod catalog;
mod common;
mod customers;
mod disputes;
mod envelope;
mod labor;
mod locations;
mod loyalty;
mod orders;
mod payments;
mod refunds;
pub mod render;
mod response;
mod subscriptions;
mod terminal;
mod v1;

pub use bank_accounts::*;
pub use bookings::*;
pub use cash_drawers::*;
pub use catalog::*;
pub use common::*;
pub use customers::*;
pub use disputes::*;
pub use envelope::{HttpContext, ResponseEnvelope};
pub use labor::*;
pub use locations::*;
pub use loyalty::*;
pub use orders::*;
pub use payments::*;
pub use refunds::*;
pub use response::{ApiResponse, Paginated};
pub use square_derive::model;
pub use subscriptions::*;
pub use terminal::*;
pub use v1::*;

pub use serde;
pub use typed_builder;

pub mod prelude {
    pub use crate::envelope::{HttpContext, ResponseEnvelope};
    pub use crate::render::{Render, Rendered};
    pub use crate::response::{ApiResponse, Paginated};
    pub use crate::{CatalogObject, CatalogObjectData, CatalogObjectType, Error, Money, model};
}
