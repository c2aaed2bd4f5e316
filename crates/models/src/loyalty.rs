//! Loyalty program records.

use crate::common::{Error, Money, TimeRange};
use crate::model;

/// A seller's loyalty program.
#[model]
pub struct LoyaltyProgram {
    pub id: String,
    /// `ACTIVE` or `INACTIVE`.
    pub status: String,
    pub reward_tiers: Vec<LoyaltyProgramRewardTier>,
    pub expiration_policy: Option<LoyaltyProgramExpirationPolicy>,
    pub terminology: LoyaltyProgramTerminology,
    pub location_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub accrual_rules: Vec<LoyaltyProgramAccrualRule>,
}

#[model]
pub struct LoyaltyProgramRewardTier {
    pub id: String,
    pub points: i32,
    pub name: String,
    pub definition: LoyaltyProgramRewardDefinition,
    pub created_at: String,
}

/// What a reward tier grants.
#[model]
pub struct LoyaltyProgramRewardDefinition {
    /// `ORDER` or `ITEM_VARIATION`.
    pub scope: String,
    /// `FIXED_AMOUNT` or `FIXED_PERCENTAGE`.
    pub discount_type: String,
    pub percentage_discount: Option<String>,
    pub catalog_object_ids: Option<Vec<String>>,
    pub fixed_discount_money: Option<Money>,
    pub max_discount_money: Option<Money>,
}

#[model]
pub struct LoyaltyProgramExpirationPolicy {
    /// ISO 8601 duration, for example `P1Y`.
    pub expiration_duration: String,
}

/// How the program names its points.
#[model]
pub struct LoyaltyProgramTerminology {
    pub one: String,
    pub other: String,
}

/// How buyers earn points.
///
/// Which optional field applies depends on `accrual_type`: `visit_minimum_amount_money` for
/// `VISIT`, `spend_amount_money` for `SPEND` and `catalog_object_id` for `ITEM_VARIATION`
/// and `CATEGORY`.
#[model]
pub struct LoyaltyProgramAccrualRule {
    pub accrual_type: String,
    pub points: Option<i32>,
    pub visit_minimum_amount_money: Option<Money>,
    pub spend_amount_money: Option<Money>,
    pub catalog_object_id: Option<String>,
}

/// A reward a buyer can redeem for points.
#[model]
pub struct LoyaltyReward {
    pub id: Option<String>,
    /// `ISSUED`, `REDEEMED` or `DELETED`.
    pub status: Option<String>,
    pub loyalty_account_id: String,
    pub reward_tier_id: String,
    pub points: Option<i32>,
    pub order_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub redeemed_at: Option<String>,
}

#[model]
pub struct CreateLoyaltyRewardRequest {
    pub reward: LoyaltyReward,
    pub idempotency_key: String,
}

/// A change to the points balance of a loyalty account.
#[model]
pub struct LoyaltyEvent {
    pub id: String,
    /// `ACCUMULATE_POINTS`, `CREATE_REWARD`, `REDEEM_REWARD`, `DELETE_REWARD`, `ADJUST_POINTS`,
    /// `EXPIRE_POINTS` or `OTHER`.
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: String,
    pub accumulate_points: Option<LoyaltyEventAccumulatePoints>,
    pub redeem_reward: Option<LoyaltyEventRedeemReward>,
    pub adjust_points: Option<LoyaltyEventAdjustPoints>,
    pub loyalty_account_id: String,
    pub location_id: Option<String>,
    pub source: String,
}

#[model]
pub struct LoyaltyEventAccumulatePoints {
    pub loyalty_program_id: Option<String>,
    pub points: Option<i32>,
    pub order_id: Option<String>,
}

#[model]
pub struct LoyaltyEventAdjustPoints {
    pub loyalty_program_id: Option<String>,
    /// Signed: negative values subtract points.
    pub points: i32,
    pub reason: Option<String>,
}

#[model]
pub struct LoyaltyEventRedeemReward {
    pub loyalty_program_id: String,
    pub reward_id: Option<String>,
    pub order_id: Option<String>,
}

#[model]
pub struct LoyaltyEventDateTimeFilter {
    pub created_at: TimeRange,
}

#[model]
pub struct SearchLoyaltyEventsResponse {
    pub errors: Option<Vec<Error>>,
    pub events: Option<Vec<LoyaltyEvent>>,
    pub cursor: Option<String>,
}
