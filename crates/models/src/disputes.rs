//! Dispute (chargeback) records.

use crate::common::{Error, Money};
use crate::model;

/// A cardholder's challenge of a payment.
#[model]
pub struct Dispute {
    pub dispute_id: Option<String>,
    pub amount_money: Option<Money>,
    pub reason: Option<String>,
    /// `INQUIRY_EVIDENCE_REQUIRED`, `EVIDENCE_REQUIRED`, `PROCESSING`, `WON`, `LOST` and so on.
    pub state: Option<String>,
    pub due_at: Option<String>,
    pub disputed_payment: Option<DisputedPayment>,
    pub evidence_ids: Option<Vec<String>>,
    pub card_brand: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub brand_dispute_id: Option<String>,
    pub reported_date: Option<String>,
    pub version: Option<i32>,
    pub location_id: Option<String>,
}

#[model]
pub struct DisputedPayment {
    pub payment_id: Option<String>,
}

#[model]
pub struct ListDisputesResponse {
    pub errors: Option<Vec<Error>>,
    pub disputes: Option<Vec<Dispute>>,
    pub cursor: Option<String>,
}
