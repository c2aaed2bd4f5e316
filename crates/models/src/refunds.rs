//! Refund records.

use crate::common::{Error, Money};
use crate::model;

/// Refunds all or part of a payment.
#[model]
pub struct RefundPaymentRequest {
    pub idempotency_key: String,
    /// Must not exceed the payment total minus previous refunds.
    pub amount_money: Money,
    pub app_fee_money: Option<Money>,
    pub payment_id: String,
    pub reason: Option<String>,
}

/// Refunds a tender of a legacy transaction.
#[model]
pub struct CreateRefundRequest {
    pub idempotency_key: String,
    pub payment_id: String,
    pub reason: Option<String>,
    pub amount_money: Money,
}

/// A refund of a payment.
#[model]
pub struct Refund {
    pub id: String,
    pub location_id: String,
    pub transaction_id: Option<String>,
    pub tender_id: String,
    pub created_at: Option<String>,
    pub reason: String,
    pub amount_money: Money,
    /// `PENDING`, `APPROVED`, `REJECTED` or `FAILED`.
    pub status: String,
    pub processing_fee_money: Option<Money>,
    pub additional_recipients: Option<Vec<crate::payments::AdditionalRecipient>>,
}

#[model]
pub struct ListRefundsResponse {
    pub errors: Option<Vec<Error>>,
    pub refunds: Option<Vec<Refund>>,
    pub cursor: Option<String>,
}
