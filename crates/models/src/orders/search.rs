use super::{Order, OrderEntry};
use crate::common::{Error, TimeRange};
use crate::model;

/// Filters applied when searching orders. All set filters must match.
#[model]
pub struct SearchOrdersFilter {
    pub state_filter: Option<SearchOrdersStateFilter>,
    pub date_time_filter: Option<SearchOrdersDateTimeFilter>,
    pub fulfillment_filter: Option<SearchOrdersFulfillmentFilter>,
    pub source_filter: Option<SearchOrdersSourceFilter>,
    pub customer_filter: Option<SearchOrdersCustomerFilter>,
}

#[model]
pub struct SearchOrdersStateFilter {
    /// `OPEN`, `COMPLETED`, `CANCELED` or `DRAFT`.
    pub states: Vec<String>,
}

/// Time windows matched against order timestamps.
///
/// Only one of the three ranges may be set per search, and it must match the field the
/// search sorts on.
#[model]
pub struct SearchOrdersDateTimeFilter {
    pub created_at: Option<TimeRange>,
    pub updated_at: Option<TimeRange>,
    pub closed_at: Option<TimeRange>,
}

#[model]
pub struct SearchOrdersFulfillmentFilter {
    pub fulfillment_types: Option<Vec<String>>,
    pub fulfillment_states: Option<Vec<String>>,
}

#[model]
pub struct SearchOrdersSourceFilter {
    pub source_names: Option<Vec<String>>,
}

#[model]
pub struct SearchOrdersCustomerFilter {
    pub customer_ids: Option<Vec<String>>,
}

/// Result of an order search: either `order_entries` or `orders`, depending on
/// `return_entries` in the request.
#[model]
pub struct SearchOrdersResponse {
    pub order_entries: Option<Vec<OrderEntry>>,
    pub orders: Option<Vec<Order>>,
    pub cursor: Option<String>,
    pub errors: Option<Vec<Error>>,
}
