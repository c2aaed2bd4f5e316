//! Customer profile records.

use crate::common::{Address, Error, FilterValue, TimeRange};
use crate::model;

/// A customer profile of a seller.
#[model]
pub struct Customer {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Cards on file. Read-only; managed through the card endpoints.
    pub cards: Option<Vec<Card>>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub nickname: Option<String>,
    pub company_name: Option<String>,
    pub email_address: Option<String>,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`, or `0000-MM-DD` when the year is unknown.
    pub birthday: Option<String>,
    pub reference_id: Option<String>,
    pub note: Option<String>,
    pub preferences: Option<CustomerPreferences>,
    pub groups: Option<Vec<CustomerGroupInfo>>,
    pub creation_source: Option<String>,
    pub group_ids: Option<Vec<String>>,
    pub segment_ids: Option<Vec<String>>,
}

/// A payment card stored on file.
#[model]
pub struct Card {
    pub id: Option<String>,
    pub card_brand: Option<String>,
    pub last_4: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub cardholder_name: Option<String>,
    pub billing_address: Option<Address>,
    pub fingerprint: Option<String>,
    pub card_type: Option<String>,
    pub prepaid_type: Option<String>,
    pub bin: Option<String>,
}

#[model]
pub struct CustomerPreferences {
    pub email_unsubscribed: Option<bool>,
}

#[model]
pub struct CustomerGroupInfo {
    pub id: String,
    pub name: String,
}

/// Criteria for searching customer profiles. Set criteria are combined with `AND`.
#[model]
pub struct CustomerFilter {
    pub creation_source: Option<CustomerCreationSourceFilter>,
    pub created_at: Option<TimeRange>,
    pub updated_at: Option<TimeRange>,
    pub email_address: Option<CustomerTextFilter>,
    pub phone_number: Option<CustomerTextFilter>,
    pub reference_id: Option<CustomerTextFilter>,
    pub group_ids: Option<FilterValue>,
}

/// Matches a text attribute either exactly or by fuzzy tokens. Only one of the two is set.
#[model]
pub struct CustomerTextFilter {
    pub exact: Option<String>,
    pub fuzzy: Option<String>,
}

#[model]
pub struct CustomerCreationSourceFilter {
    pub values: Option<Vec<String>>,
    /// `INCLUDE` or `EXCLUDE`.
    pub rule: Option<String>,
}

#[model]
pub struct CreateCustomerCardResponse {
    pub errors: Option<Vec<Error>>,
    pub card: Option<Card>,
}
