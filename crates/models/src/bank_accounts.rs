//! Bank account records.

use crate::common::Error;
use crate::model;

/// A seller's bank account linked for payouts.
#[model]
pub struct BankAccount {
    pub id: String,
    pub account_number_suffix: String,
    pub country: String,
    pub currency: String,
    /// `CHECKING`, `SAVINGS`, `INVESTMENT`, `OTHER` or `BUSINESS_CHECKING`.
    pub account_type: String,
    pub holder_name: String,
    pub primary_bank_identification_number: String,
    pub secondary_bank_identification_number: Option<String>,
    pub debit_mandate_reference_id: Option<String>,
    pub reference_id: Option<String>,
    pub location_id: Option<String>,
    /// `VERIFICATION_IN_PROGRESS`, `VERIFIED` or `DISABLED`.
    pub status: String,
    pub creditable: bool,
    pub debitable: bool,
    pub fingerprint: Option<String>,
    pub version: Option<i32>,
    pub bank_name: Option<String>,
}

#[model]
pub struct ListBankAccountsResponse {
    pub errors: Option<Vec<Error>>,
    pub bank_accounts: Option<Vec<BankAccount>>,
    pub cursor: Option<String>,
}
