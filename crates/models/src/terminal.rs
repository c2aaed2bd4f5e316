//! Terminal checkout records.

use crate::common::TimeRange;
use crate::model;

#[model]
pub struct SearchTerminalCheckoutsRequest {
    pub query: Option<TerminalCheckoutQuery>,
    pub cursor: Option<String>,
    pub limit: Option<i32>,
}

#[model]
pub struct TerminalCheckoutQuery {
    pub filter: Option<TerminalCheckoutQueryFilter>,
    pub sort: Option<TerminalCheckoutQuerySort>,
}

/// Filters checkouts. Every set field must match.
#[model]
pub struct TerminalCheckoutQueryFilter {
    pub device_id: Option<String>,
    pub created_at: Option<TimeRange>,
    /// `PENDING`, `IN_PROGRESS`, `CANCEL_REQUESTED`, `CANCELED` or `COMPLETED`.
    pub status: Option<String>,
}

#[model]
pub struct TerminalCheckoutQuerySort {
    /// `ASC` or `DESC`.
    pub sort_order: Option<String>,
}
