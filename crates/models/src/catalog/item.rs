use super::CatalogObject;
use crate::common::Money;
use crate::model;

/// An item (a product or a service) sold in the catalog.
#[model]
pub struct CatalogItem {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Abbreviation shown on the Point of Sale tile. Limited to 24 characters.
    pub abbreviation: Option<String>,
    /// Hex color of the item tile, for example `9da2a6`.
    pub label_color: Option<String>,
    pub available_online: Option<bool>,
    pub available_for_pickup: Option<bool>,
    pub available_electronically: Option<bool>,
    pub category_id: Option<String>,
    /// IDs of the `TAX` objects enabled on this item.
    pub tax_ids: Option<Vec<String>>,
    pub modifier_list_info: Option<Vec<CatalogItemModifierListInfo>>,
    /// `ITEM_VARIATION` objects belonging to this item.
    pub variations: Option<Vec<CatalogObject>>,
    /// `REGULAR` or `APPOINTMENTS_SERVICE` for items created through the API.
    pub product_type: Option<String>,
    /// When `true`, Point of Sale adds the item to the cart with pre-selected modifiers.
    pub skip_modifier_screen: Option<bool>,
    pub item_options: Option<Vec<CatalogItemOptionForItem>>,
}

/// Options controlling how a modifier list applies to an item.
#[model]
pub struct CatalogItemModifierListInfo {
    pub modifier_list_id: String,
    pub min_selected_modifiers: Option<i32>,
    pub max_selected_modifiers: Option<i32>,
    pub enabled: Option<bool>,
}

#[model]
pub struct CatalogItemOptionForItem {
    pub item_option_id: Option<String>,
}

/// A purchasable variation of a [`CatalogItem`], such as a size or a color.
#[model]
pub struct CatalogItemVariation {
    pub item_id: Option<String>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub upc: Option<String>,
    /// Display position among the item's variations. Not guaranteed sequential on reads.
    pub ordinal: Option<i32>,
    /// `FIXED_PRICING` or `VARIABLE_PRICING`.
    pub pricing_type: Option<String>,
    pub price_money: Option<Money>,
    pub location_overrides: Option<Vec<ItemVariationLocationOverrides>>,
    pub track_inventory: Option<bool>,
    /// `NONE` or `LOW_QUANTITY`.
    pub inventory_alert_type: Option<String>,
    pub inventory_alert_threshold: Option<i64>,
    pub user_data: Option<String>,
    /// Service duration in milliseconds for `APPOINTMENTS_SERVICE` items.
    pub service_duration: Option<i64>,
    pub available_for_booking: Option<bool>,
    pub item_option_values: Option<Vec<CatalogItemOptionValueForItemVariation>>,
    pub measurement_unit_id: Option<String>,
    pub team_member_ids: Option<Vec<String>>,
}

/// Per-location price and inventory settings of an item variation.
#[model]
pub struct ItemVariationLocationOverrides {
    pub location_id: Option<String>,
    pub price_money: Option<Money>,
    pub pricing_type: Option<String>,
    pub track_inventory: Option<bool>,
    pub inventory_alert_type: Option<String>,
    pub inventory_alert_threshold: Option<i64>,
}

#[model]
pub struct CatalogItemOptionValueForItemVariation {
    pub item_option_id: Option<String>,
    pub item_option_value_id: Option<String>,
}

/// A group of values (for example "Size") used to build item variations.
#[model]
pub struct CatalogItemOption {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub show_colors: Option<bool>,
    /// `ITEM_OPTION_VAL` objects of this option.
    pub values: Option<Vec<CatalogObject>>,
}

#[model]
pub struct CatalogItemOptionValue {
    pub item_option_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub ordinal: Option<i32>,
}

/// A list of modifiers applicable to items at the time of sale.
#[model]
pub struct CatalogModifierList {
    pub name: Option<String>,
    pub ordinal: Option<i32>,
    /// `SINGLE` or `MULTIPLE`.
    pub selection_type: Option<String>,
    /// `MODIFIER` objects of this list.
    pub modifiers: Option<Vec<CatalogObject>>,
    pub image_ids: Option<Vec<String>>,
}

#[model]
pub struct CatalogModifier {
    pub name: Option<String>,
    pub price_money: Option<Money>,
    pub ordinal: Option<i32>,
    pub modifier_list_id: Option<String>,
}

#[model]
pub struct CatalogCategory {
    pub name: Option<String>,
    pub image_ids: Option<Vec<String>>,
}

#[model]
pub struct CatalogImage {
    pub name: Option<String>,
    pub url: Option<String>,
    pub caption: Option<String>,
}
