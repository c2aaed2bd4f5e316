//! Records of the legacy v1 endpoints.

use crate::model;

/// Lists the deposits and withdrawals of a location's bank account.
#[model]
pub struct V1ListSettlementsRequest {
    /// `ASC` or `DESC`.
    pub order: Option<String>,
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    /// At most 200.
    pub limit: Option<i32>,
    pub status: Option<String>,
    pub batch_token: Option<String>,
}

/// A surcharge applied to a v1 payment.
#[model]
pub struct V1PaymentSurcharge {
    pub name: Option<String>,
    pub applied_money: Option<V1Money>,
    /// Decimal string; `"0.7"` is a 7% surcharge. Exclusive with `amount_money`.
    pub rate: Option<String>,
    pub amount_money: Option<V1Money>,
    /// `UNKNOWN`, `AUTO_GRATUITY` or `CUSTOM`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub taxable: Option<bool>,
    pub taxes: Option<Vec<V1PaymentTax>>,
    pub surcharge_id: Option<String>,
}

/// Money in the v1 representation, where the currency field is `currency_code`.
#[model]
pub struct V1Money {
    pub amount: Option<i64>,
    pub currency_code: Option<String>,
}

#[model]
pub struct V1PaymentTax {
    pub errors: Option<Vec<crate::common::Error>>,
    pub name: Option<String>,
    pub applied_money: Option<V1Money>,
    pub rate: Option<String>,
    pub inclusion_type: Option<String>,
    pub fee_id: Option<String>,
}
