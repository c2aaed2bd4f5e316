//! Order records.

mod line_item;
mod search;

use std::collections::BTreeMap;

pub use line_item::*;
pub use search::*;

use crate::common::Money;
use crate::model;

/// A purchase by a customer, itemized into line items, taxes, discounts and service charges.
///
/// Taxes and discounts listed at the order level are referenced from line items by `uid`.
#[model]
pub struct Order {
    pub id: Option<String>,
    pub location_id: String,
    pub reference_id: Option<String>,
    pub source: Option<OrderSource>,
    pub customer_id: Option<String>,
    pub line_items: Option<Vec<OrderLineItem>>,
    pub taxes: Option<Vec<OrderLineItemTax>>,
    pub discounts: Option<Vec<OrderLineItemDiscount>>,
    pub service_charges: Option<Vec<OrderServiceCharge>>,
    pub returns: Option<Vec<OrderReturn>>,
    pub rewards: Option<Vec<OrderReward>>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub closed_at: Option<String>,
    /// `OPEN`, `COMPLETED`, `CANCELED` or `DRAFT`.
    pub state: Option<String>,
    pub version: Option<i32>,
    pub total_money: Option<Money>,
    pub total_tax_money: Option<Money>,
    pub total_discount_money: Option<Money>,
    pub total_tip_money: Option<Money>,
    pub total_service_charge_money: Option<Money>,
    pub ticket_name: Option<String>,
}

/// Where an order originated.
#[model]
pub struct OrderSource {
    pub name: Option<String>,
}

/// A service charge applied to an order.
#[model]
pub struct OrderServiceCharge {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub catalog_object_id: Option<String>,
    /// Decimal string; mutually exclusive with `amount_money`.
    pub percentage: Option<String>,
    pub amount_money: Option<Money>,
    pub applied_money: Option<Money>,
    pub total_money: Option<Money>,
    pub total_tax_money: Option<Money>,
    /// `SUBTOTAL_PHASE` or `TOTAL_PHASE`.
    pub calculation_phase: Option<String>,
    pub taxable: Option<bool>,
    pub applied_taxes: Option<Vec<OrderLineItemAppliedTax>>,
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Items and adjustments returned from an earlier order.
#[model]
pub struct OrderReturn {
    pub uid: Option<String>,
    pub source_order_id: Option<String>,
    pub return_discounts: Option<Vec<OrderReturnDiscount>>,
}

/// A discount being returned as part of an [`OrderReturn`].
#[model]
pub struct OrderReturnDiscount {
    pub uid: Option<String>,
    pub source_discount_uid: Option<String>,
    pub catalog_object_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub percentage: Option<String>,
    pub amount_money: Option<Money>,
    pub applied_money: Option<Money>,
    pub scope: Option<String>,
}

/// A loyalty reward applied to an order.
#[model]
pub struct OrderReward {
    pub id: String,
    pub reward_tier_id: String,
}

/// A lightweight description of an order, returned by searches with `return_entries`.
#[model]
pub struct OrderEntry {
    pub order_id: Option<String>,
    pub version: Option<i32>,
    pub location_id: Option<String>,
}

/// Previews the totals of an order without creating it.
#[model]
pub struct CalculateOrderRequest {
    pub order: Order,
    /// Rewards to apply to the preview. Only rewards that are not yet created may be listed.
    pub proposed_rewards: Option<Vec<OrderReward>>,
}
