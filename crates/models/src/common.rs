//! Records shared by every API area.

use crate::model;

/// Represents an amount of money.
///
/// `amount` is expressed in the smallest denomination of `currency` (cents for `USD`) and can
/// be signed where the owning field allows it.
#[model]
pub struct Money {
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

impl Money {
    /// Shorthand for a fully populated amount.
    #[must_use]
    pub fn of(amount: i64, currency: impl Into<String>) -> Self {
        Self { amount: Some(amount), currency: Some(currency.into()) }
    }
}

/// Represents a physical address.
#[model]
pub struct Address {
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub locality: Option<String>,
    pub sublocality: Option<String>,
    pub administrative_district_level_1: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
}

/// An error reported by the API in a response body.
#[model]
pub struct Error {
    pub category: String,
    pub code: String,
    pub detail: Option<String>,
    pub field: Option<String>,
}

/// A generic time range. Both bounds are RFC 3339 timestamps; either may be open.
#[model]
pub struct TimeRange {
    pub start_at: Option<String>,
    pub end_at: Option<String>,
}

/// A decimal range. Bounds are decimal strings and are never parsed as floats.
#[model]
pub struct Range {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// A filter over a set of string values.
#[model]
pub struct FilterValue {
    pub all: Option<Vec<String>>,
    pub any: Option<Vec<String>>,
    pub none: Option<Vec<String>>,
}
