//! Payment records.

use crate::common::{Address, Money};
use crate::model;

/// Charges a payment source (a card nonce or a card on file).
///
/// ```rust
/// use square_models::{CreatePaymentRequest, Money};
///
/// let request = CreatePaymentRequest::builder()
///     .source_id("cnon:abc")
///     .idempotency_key("idem-1")
///     .amount_money(Money::of(100, "USD"))
///     .note("Brief description")
///     .build();
/// assert_eq!(request.note.as_deref(), Some("Brief description"));
/// ```
#[model]
pub struct CreatePaymentRequest {
    /// A nonce generated by the payment form, or the ID of a card on file.
    pub source_id: String,
    /// Unique key of this request; a retried request with the same key is not charged twice.
    pub idempotency_key: String,
    pub amount_money: Money,
    pub tip_money: Option<Money>,
    pub app_fee_money: Option<Money>,
    /// RFC 3339 duration after which a delayed-capture payment is canceled.
    /// Defaults to `PT36H` for card-present and `P7D` for card-not-present payments.
    pub delay_duration: Option<String>,
    /// When `false`, the payment stays approved until completed or canceled. Defaults to `true`.
    pub autocomplete: Option<bool>,
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub location_id: Option<String>,
    pub reference_id: Option<String>,
    pub verification_token: Option<String>,
    pub accept_partial_authorization: Option<bool>,
    pub buyer_email_address: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub note: Option<String>,
    /// Appended to the card statement description; may be truncated.
    pub statement_description_identifier: Option<String>,
}

/// A payment processed by the API.
#[model]
pub struct Payment {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub amount_money: Option<Money>,
    pub tip_money: Option<Money>,
    pub total_money: Option<Money>,
    pub app_fee_money: Option<Money>,
    pub processing_fee: Option<Vec<ProcessingFee>>,
    pub refunded_money: Option<Money>,
    /// `APPROVED`, `PENDING`, `COMPLETED`, `CANCELED` or `FAILED`.
    pub status: Option<String>,
    pub delay_duration: Option<String>,
    pub delay_action: Option<String>,
    pub delayed_until: Option<String>,
    /// `CARD`, `BANK_ACCOUNT`, `WALLET` or `CASH`.
    pub source_type: Option<String>,
    pub card_details: Option<CardPaymentDetails>,
    pub location_id: Option<String>,
    pub order_id: Option<String>,
    pub reference_id: Option<String>,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    pub refund_ids: Option<Vec<String>>,
    pub risk_evaluation: Option<RiskEvaluation>,
    pub buyer_email_address: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub note: Option<String>,
    pub statement_description_identifier: Option<String>,
    pub receipt_number: Option<String>,
    pub receipt_url: Option<String>,
}

/// A fee charged for processing a payment. Fee amounts are signed.
#[model]
pub struct ProcessingFee {
    pub effective_at: Option<String>,
    /// `INITIAL` or `ADJUSTMENT`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount_money: Option<Money>,
}

#[model]
pub struct CardPaymentDetails {
    /// `AUTHORIZED`, `CAPTURED`, `VOIDED` or `FAILED`.
    pub status: Option<String>,
    pub card: Option<crate::customers::Card>,
    pub entry_method: Option<String>,
    pub cvv_status: Option<String>,
    pub avs_status: Option<String>,
    pub auth_result_code: Option<String>,
    pub application_identifier: Option<String>,
    pub application_name: Option<String>,
    pub statement_description: Option<String>,
}

/// Risk assessment of a payment by the payments platform.
#[model]
pub struct RiskEvaluation {
    pub created_at: Option<String>,
    pub risk_level: Option<String>,
}

/// A receiver other than the seller who gets a share of a transaction.
#[model]
pub struct AdditionalRecipient {
    pub location_id: String,
    pub description: String,
    pub amount_money: Money,
    /// Assigned by the server.
    pub receivable_id: Option<String>,
}
