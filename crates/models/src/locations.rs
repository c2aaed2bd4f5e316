//! Location records.

use crate::common::{Address, Error};
use crate::model;

/// A physical or virtual place where a seller does business.
#[model]
pub struct Location {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub timezone: Option<String>,
    pub capabilities: Option<Vec<String>>,
    /// `ACTIVE` or `INACTIVE`.
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub merchant_id: Option<String>,
    pub country: Option<String>,
    pub language_code: Option<String>,
    pub currency: Option<String>,
    pub phone_number: Option<String>,
    pub business_name: Option<String>,
    /// `PHYSICAL` or `MOBILE`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub website_url: Option<String>,
    pub business_email: Option<String>,
    pub description: Option<String>,
    pub mcc: Option<String>,
}

#[model]
pub struct ListLocationsResponse {
    pub errors: Option<Vec<Error>>,
    pub locations: Option<Vec<Location>>,
}
