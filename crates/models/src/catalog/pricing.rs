use crate::common::Money;
use crate::model;

/// A tax applicable to items.
#[model]
pub struct CatalogTax {
    pub name: Option<String>,
    /// `ADDITIVE` or `INCLUSIVE`.
    pub calculation_phase: Option<String>,
    pub inclusion_type: Option<String>,
    /// Decimal string, for example `7.25` for 7.25%.
    pub percentage: Option<String>,
    pub applies_to_custom_amounts: Option<bool>,
    pub enabled: Option<bool>,
}

/// A discount applicable to items.
#[model]
pub struct CatalogDiscount {
    pub name: Option<String>,
    /// `FIXED_PERCENTAGE`, `FIXED_AMOUNT`, `VARIABLE_PERCENTAGE` or `VARIABLE_AMOUNT`.
    pub discount_type: Option<String>,
    pub percentage: Option<String>,
    pub amount_money: Option<Money>,
    pub pin_required: Option<bool>,
    pub label_color: Option<String>,
    pub modify_tax_basis: Option<String>,
}

/// Rule applying a discount to a product set during given time periods.
#[model]
pub struct CatalogPricingRule {
    pub name: Option<String>,
    pub time_period_ids: Option<Vec<String>>,
    pub discount_id: Option<String>,
    pub match_products_id: Option<String>,
    pub apply_products_id: Option<String>,
    pub exclude_products_id: Option<String>,
    pub valid_from_date: Option<String>,
    pub valid_from_local_time: Option<String>,
    pub valid_until_date: Option<String>,
    pub valid_until_local_time: Option<String>,
    pub exclude_strategy: Option<String>,
    pub customer_group_ids_any: Option<Vec<String>>,
}

/// A set of catalog objects matched by a pricing rule.
#[model]
pub struct CatalogProductSet {
    pub name: Option<String>,
    pub product_ids_any: Option<Vec<String>>,
    pub product_ids_all: Option<Vec<String>>,
    pub quantity_exact: Option<i64>,
    pub quantity_min: Option<i64>,
    pub quantity_max: Option<i64>,
    pub all_products: Option<bool>,
}

/// A recurring period expressed as an iCalendar `VEVENT`.
#[model]
pub struct CatalogTimePeriod {
    pub event: Option<String>,
}

/// Quick amounts shown at checkout for a location.
#[model]
pub struct CatalogQuickAmountsSettings {
    /// `DISABLED`, `MANUAL` or `AUTO`.
    pub option: String,
    pub eligible_for_auto_amounts: Option<bool>,
    pub amounts: Option<Vec<CatalogQuickAmount>>,
}

/// One quick amount of [`CatalogQuickAmountsSettings`].
#[model]
pub struct CatalogQuickAmount {
    /// `QUICK_AMOUNT_TYPE_MANUAL` or `QUICK_AMOUNT_TYPE_AUTO`.
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Money,
    /// Ranking of an auto-generated amount; higher is better.
    pub score: Option<i64>,
    pub ordinal: Option<i64>,
}
