use std::collections::BTreeMap;

use crate::catalog::MeasurementUnit;
use crate::common::Money;
use crate::model;

/// A line item in an order.
///
/// `quantity` is a decimal string (`"3"`, `"1.70000"`) and is never parsed as a float. Items
/// with quantity `"0"` are dropped by the server once the order completes.
#[model]
pub struct OrderLineItem {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub quantity: String,
    pub quantity_unit: Option<OrderQuantityUnit>,
    pub note: Option<String>,
    pub catalog_object_id: Option<String>,
    pub variation_name: Option<String>,
    /// Application-defined key/value pairs. Keys and values are limited to 255 characters.
    pub metadata: Option<BTreeMap<String, String>>,
    pub modifiers: Option<Vec<OrderLineItemModifier>>,
    /// Taxes applied to this item, by `tax_uid` reference into the order's `taxes`.
    pub applied_taxes: Option<Vec<OrderLineItemAppliedTax>>,
    /// Discounts applied to this item, by `discount_uid` reference into the order's `discounts`.
    pub applied_discounts: Option<Vec<OrderLineItemAppliedDiscount>>,
    pub base_price_money: Option<Money>,
    pub variation_total_price_money: Option<Money>,
    pub gross_sales_money: Option<Money>,
    pub total_tax_money: Option<Money>,
    pub total_discount_money: Option<Money>,
    pub total_money: Option<Money>,
    pub pricing_blocklists: Option<OrderLineItemPricingBlocklists>,
}

/// A modifier applied to an [`OrderLineItem`].
#[model]
pub struct OrderLineItemModifier {
    pub uid: Option<String>,
    pub catalog_object_id: Option<String>,
    pub name: Option<String>,
    pub base_price_money: Option<Money>,
    /// `base_price_money` multiplied by the line item quantity.
    pub total_price_money: Option<Money>,
}

/// The unit and precision a line item quantity is measured in.
#[model]
pub struct OrderQuantityUnit {
    pub measurement_unit: Option<MeasurementUnit>,
    pub precision: Option<i32>,
    pub catalog_object_id: Option<String>,
    pub catalog_version: Option<i64>,
}

#[model]
pub struct OrderLineItemAppliedTax {
    pub uid: Option<String>,
    pub tax_uid: String,
    pub applied_money: Option<Money>,
}

#[model]
pub struct OrderLineItemAppliedDiscount {
    pub uid: Option<String>,
    pub discount_uid: String,
    pub applied_money: Option<Money>,
}

/// Discounts and taxes that must not be applied to a line item automatically.
#[model]
pub struct OrderLineItemPricingBlocklists {
    pub blocked_discounts: Option<Vec<OrderLineItemPricingBlocklistsBlockedDiscount>>,
    pub blocked_taxes: Option<Vec<OrderLineItemPricingBlocklistsBlockedTax>>,
}

#[model]
pub struct OrderLineItemPricingBlocklistsBlockedDiscount {
    pub uid: Option<String>,
    pub discount_uid: Option<String>,
    pub discount_catalog_object_id: Option<String>,
}

#[model]
pub struct OrderLineItemPricingBlocklistsBlockedTax {
    pub uid: Option<String>,
    pub tax_uid: Option<String>,
    pub tax_catalog_object_id: Option<String>,
}

/// A tax applied at the order or line item level.
#[model]
pub struct OrderLineItemTax {
    pub uid: Option<String>,
    pub catalog_object_id: Option<String>,
    pub catalog_version: Option<i64>,
    pub name: Option<String>,
    /// `ADDITIVE` or `INCLUSIVE`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub percentage: Option<String>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub applied_money: Option<Money>,
    /// `ORDER` or `LINE_ITEM`.
    pub scope: Option<String>,
    pub auto_applied: Option<bool>,
}

/// A discount applied at the order or line item level.
#[model]
pub struct OrderLineItemDiscount {
    pub uid: Option<String>,
    pub catalog_object_id: Option<String>,
    pub catalog_version: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub percentage: Option<String>,
    pub amount_money: Option<Money>,
    pub applied_money: Option<Money>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub scope: Option<String>,
    pub reward_ids: Option<Vec<String>>,
    pub pricing_rule_id: Option<String>,
}
