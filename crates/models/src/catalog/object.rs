//! The catalog object envelope.
//!
//! On the wire a catalog object carries a `type` discriminant next to exactly one
//! `*_data` payload:
//!
//! ```json
//! { "type": "ITEM", "id": "#coffee", "item_data": { "name": "Coffee" } }
//! ```
//!
//! [`CatalogObjectData`] models the discriminant and its payload as one enum, flattened into
//! [`CatalogObject`], so an object can never carry zero or several payloads.

use super::{
    CatalogCategory, CatalogCustomAttributeDefinition, CatalogCustomAttributeValue,
    CatalogDiscount, CatalogImage, CatalogItem, CatalogItemOption, CatalogItemOptionValue,
    CatalogItemVariation, CatalogMeasurementUnit, CatalogModifier, CatalogModifierList,
    CatalogPricingRule, CatalogProductSet, CatalogQuickAmountsSettings, CatalogSubscriptionPlan,
    CatalogTax, CatalogTimePeriod, CatalogV1Id,
};
use crate::model;
use crate::render::Render;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The `type` discriminant of a catalog object.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogObjectType {
    Item,
    Image,
    Category,
    ItemVariation,
    Tax,
    Discount,
    ModifierList,
    Modifier,
    PricingRule,
    ProductSet,
    TimePeriod,
    MeasurementUnit,
    SubscriptionPlan,
    ItemOption,
    #[serde(rename = "ITEM_OPTION_VAL")]
    #[strum(serialize = "ITEM_OPTION_VAL")]
    ItemOptionValue,
    CustomAttributeDefinition,
    QuickAmountsSettings,
}

/// The discriminant and payload of a catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogObjectData {
    Item { item_data: CatalogItem },
    Image { image_data: CatalogImage },
    Category { category_data: CatalogCategory },
    ItemVariation { item_variation_data: CatalogItemVariation },
    Tax { tax_data: CatalogTax },
    Discount { discount_data: CatalogDiscount },
    ModifierList { modifier_list_data: CatalogModifierList },
    Modifier { modifier_data: CatalogModifier },
    PricingRule { pricing_rule_data: CatalogPricingRule },
    ProductSet { product_set_data: CatalogProductSet },
    TimePeriod { time_period_data: CatalogTimePeriod },
    MeasurementUnit { measurement_unit_data: CatalogMeasurementUnit },
    SubscriptionPlan { subscription_plan_data: CatalogSubscriptionPlan },
    ItemOption { item_option_data: CatalogItemOption },
    #[serde(rename = "ITEM_OPTION_VAL")]
    ItemOptionValue { item_option_value_data: CatalogItemOptionValue },
    CustomAttributeDefinition { custom_attribute_definition_data: CatalogCustomAttributeDefinition },
    QuickAmountsSettings { quick_amounts_settings_data: CatalogQuickAmountsSettings },
}

/// A catalog entity: an item, a tax, a discount, a modifier list and so on.
///
/// Constructed from a payload, the discriminant follows from the payload type:
///
/// ```rust
/// use square_models::{CatalogItem, CatalogObject, CatalogObjectType};
///
/// let coffee = CatalogObject::new("#coffee", CatalogItem::new().with(|i| i.name = Some("Coffee".into())));
/// assert_eq!(coffee.object_type(), CatalogObjectType::Item);
/// assert!(coffee.item_data().is_some());
/// assert!(coffee.tax_data().is_none());
/// ```
#[model]
pub struct CatalogObject {
    pub id: String,
    #[serde(flatten)]
    pub data: CatalogObjectData,
    pub updated_at: Option<String>,
    pub version: Option<i64>,
    pub is_deleted: Option<bool>,
    pub custom_attribute_values: Option<BTreeMap<String, CatalogCustomAttributeValue>>,
    pub catalog_v1_ids: Option<Vec<CatalogV1Id>>,
    pub present_at_all_locations: Option<bool>,
    pub present_at_location_ids: Option<Vec<String>>,
    pub absent_at_location_ids: Option<Vec<String>>,
    pub image_id: Option<String>,
}

impl CatalogObject {
    /// The `type` discriminant of this object.
    #[must_use]
    pub const fn object_type(&self) -> CatalogObjectType {
        self.data.object_type()
    }
}

macro_rules! catalog_payloads {
    ($($variant:ident { $field:ident: $payload:ty }),* $(,)?) => {
        impl CatalogObjectData {
            /// The `type` discriminant matching this payload.
            #[must_use]
            pub const fn object_type(&self) -> CatalogObjectType {
                match self {
                    $(Self::$variant { .. } => CatalogObjectType::$variant,)*
                }
            }
        }

        $(
            impl From<$payload> for CatalogObjectData {
                fn from($field: $payload) -> Self {
                    Self::$variant { $field }
                }
            }
        )*

        impl CatalogObject {
            $(
                #[doc = concat!("The `", stringify!($field), "` payload, if this object carries one.")]
                #[must_use]
                pub const fn $field(&self) -> Option<&$payload> {
                    match &self.data {
                        CatalogObjectData::$variant { $field } => Some($field),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            )*
        }

        impl Render for CatalogObjectData {
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.object_type().as_ref())?;
                match self {
                    $(
                        Self::$variant { $field } => {
                            f.write_str(concat!("(", stringify!($field), " = "))?;
                            $field.render(f)?;
                        },
                    )*
                }
                f.write_str(")")
            }
        }
    };
}

catalog_payloads! {
    Item { item_data: CatalogItem },
    Image { image_data: CatalogImage },
    Category { category_data: CatalogCategory },
    ItemVariation { item_variation_data: CatalogItemVariation },
    Tax { tax_data: CatalogTax },
    Discount { discount_data: CatalogDiscount },
    ModifierList { modifier_list_data: CatalogModifierList },
    Modifier { modifier_data: CatalogModifier },
    PricingRule { pricing_rule_data: CatalogPricingRule },
    ProductSet { product_set_data: CatalogProductSet },
    TimePeriod { time_period_data: CatalogTimePeriod },
    MeasurementUnit { measurement_unit_data: CatalogMeasurementUnit },
    SubscriptionPlan { subscription_plan_data: CatalogSubscriptionPlan },
    ItemOption { item_option_data: CatalogItemOption },
    ItemOptionValue { item_option_value_data: CatalogItemOptionValue },
    CustomAttributeDefinition { custom_attribute_definition_data: CatalogCustomAttributeDefinition },
    QuickAmountsSettings { quick_amounts_settings_data: CatalogQuickAmountsSettings },
}
