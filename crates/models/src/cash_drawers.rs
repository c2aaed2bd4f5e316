//! Cash drawer records.

use crate::common::Money;
use crate::model;

/// An employee action on a cash drawer during a shift.
#[model]
pub struct CashDrawerShiftEvent {
    pub id: Option<String>,
    pub employee_id: Option<String>,
    /// `CASH_TENDER_PAYMENT`, `PAID_IN`, `PAID_OUT`, `NO_SALE` and so on.
    pub event_type: Option<String>,
    pub event_money: Option<Money>,
    pub created_at: Option<String>,
    pub description: Option<String>,
}
