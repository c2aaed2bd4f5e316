//! Subscription records.

use crate::common::Money;
use crate::model;

/// A customer's subscription to a [`CatalogSubscriptionPlan`](crate::CatalogSubscriptionPlan).
#[model]
pub struct Subscription {
    pub id: Option<String>,
    pub location_id: Option<String>,
    pub plan_id: Option<String>,
    pub customer_id: Option<String>,
    /// `YYYY-MM-DD`.
    pub start_date: Option<String>,
    pub canceled_date: Option<String>,
    /// `PENDING`, `ACTIVE` or `CANCELED`.
    pub status: Option<String>,
    /// Decimal string without a `%` sign; `7.5` is 7.5%.
    pub tax_percentage: Option<String>,
    pub invoice_ids: Option<Vec<String>>,
    pub price_override_money: Option<Money>,
    pub version: Option<i64>,
    pub created_at: Option<String>,
    pub card_id: Option<String>,
    pub paid_until_date: Option<String>,
    /// IANA timezone used to interpret the dates of this subscription.
    pub timezone: Option<String>,
}
