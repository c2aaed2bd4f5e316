//! Labor records.

use crate::model;

/// Lists the break types of a seller, optionally for a single location.
#[model]
pub struct ListBreakTypesRequest {
    pub location_id: Option<String>,
    /// Page size between 1 and 200. Defaults to 200.
    pub limit: Option<i32>,
    pub cursor: Option<String>,
}
