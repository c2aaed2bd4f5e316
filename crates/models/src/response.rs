//! Behavior shared by response records.

use crate::common::Error;
use crate::{
    CreateCustomerCardResponse, ListBankAccountsResponse, ListDisputesResponse,
    ListLocationsResponse, ListRefundsResponse, SearchLoyaltyEventsResponse, SearchOrdersResponse,
};

/// A response body that may report API errors.
pub trait ApiResponse {
    /// Errors reported by the API; empty when none were returned.
    fn errors(&self) -> &[Error];

    fn is_success(&self) -> bool {
        self.errors().is_empty()
    }
}

/// A response body that may continue on another page.
pub trait Paginated: ApiResponse {
    /// Cursor of the next page. `None` on the last page.
    fn cursor(&self) -> Option<&str>;

    fn has_more(&self) -> bool {
        self.cursor().is_some_and(|cursor| !cursor.is_empty())
    }
}

macro_rules! api_responses {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiResponse for $ty {
                fn errors(&self) -> &[Error] {
                    self.errors.as_deref().unwrap_or_default()
                }
            }
        )*
    };
}

macro_rules! paginated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Paginated for $ty {
                fn cursor(&self) -> Option<&str> {
                    self.cursor.as_deref()
                }
            }
        )*
    };
}

api_responses!(
    CreateCustomerCardResponse,
    ListBankAccountsResponse,
    ListDisputesResponse,
    ListLocationsResponse,
    ListRefundsResponse,
    SearchLoyaltyEventsResponse,
    SearchOrdersResponse,
);

paginated!(
    ListBankAccountsResponse,
    ListDisputesResponse,
    ListRefundsResponse,
    SearchLoyaltyEventsResponse,
    SearchOrdersResponse,
);
