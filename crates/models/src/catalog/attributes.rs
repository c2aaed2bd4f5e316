use crate::common::{Money, Range};
use crate::model;

/// The value of a custom attribute set on a catalog object.
#[model]
pub struct CatalogCustomAttributeValue {
    pub name: Option<String>,
    pub string_value: Option<String>,
    pub custom_attribute_definition_id: Option<String>,
    /// `STRING`, `BOOLEAN`, `NUMBER` or `SELECTION`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Decimal string, up to five digits after the point.
    pub number_value: Option<String>,
    pub boolean_value: Option<bool>,
    pub selection_uid_values: Option<Vec<String>>,
    pub key: Option<String>,
}

/// Declares a custom attribute that catalog objects of the allowed types may carry.
#[model]
pub struct CatalogCustomAttributeDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub source_application: Option<SourceApplication>,
    /// Catalog object types allowed to carry this attribute.
    pub allowed_object_types: Vec<String>,
    pub seller_visibility: Option<String>,
    pub app_visibility: Option<String>,
    pub string_config: Option<CatalogCustomAttributeDefinitionStringConfig>,
    pub number_config: Option<CatalogCustomAttributeDefinitionNumberConfig>,
    pub selection_config: Option<CatalogCustomAttributeDefinitionSelectionConfig>,
    pub custom_attribute_usage_count: Option<i32>,
    pub key: Option<String>,
}

#[model]
pub struct SourceApplication {
    pub product: Option<String>,
    pub application_id: Option<String>,
    pub name: Option<String>,
}

#[model]
pub struct CatalogCustomAttributeDefinitionStringConfig {
    pub enforce_uniqueness: Option<bool>,
}

#[model]
pub struct CatalogCustomAttributeDefinitionNumberConfig {
    pub precision: Option<i32>,
}

#[model]
pub struct CatalogCustomAttributeDefinitionSelectionConfig {
    pub max_allowed_selections: Option<i32>,
    pub allowed_selections:
        Option<Vec<CatalogCustomAttributeDefinitionSelectionConfigCustomAttributeSelection>>,
}

#[model]
pub struct CatalogCustomAttributeDefinitionSelectionConfigCustomAttributeSelection {
    pub uid: Option<String>,
    pub name: String,
}

/// Filters catalog search results by custom attribute value.
///
/// Exactly one of the value filters is expected to be set; the server rejects the rest.
#[model]
pub struct CustomAttributeFilter {
    pub custom_attribute_definition_id: Option<String>,
    pub key: Option<String>,
    pub string_filter: Option<String>,
    pub number_filter: Option<Range>,
    pub selection_uids_filter: Option<Vec<String>>,
    pub bool_filter: Option<bool>,
}

/// Identifier of a catalog object in the legacy v1 catalog.
#[model]
pub struct CatalogV1Id {
    pub catalog_v1_id: Option<String>,
    pub location_id: Option<String>,
}

#[model]
pub struct CatalogMeasurementUnit {
    pub measurement_unit: Option<MeasurementUnit>,
    pub precision: Option<i32>,
}

/// A unit of measure. Exactly one of the unit fields is set.
#[model]
pub struct MeasurementUnit {
    pub custom_unit: Option<MeasurementUnitCustom>,
    pub area_unit: Option<String>,
    pub length_unit: Option<String>,
    pub volume_unit: Option<String>,
    pub weight_unit: Option<String>,
    pub generic_unit: Option<String>,
    pub time_unit: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[model]
pub struct MeasurementUnitCustom {
    pub name: String,
    pub abbreviation: String,
}

/// A subscription plan and its billing phases.
#[model]
pub struct CatalogSubscriptionPlan {
    pub name: String,
    pub phases: Vec<SubscriptionPhase>,
}

#[model]
pub struct SubscriptionPhase {
    pub uid: Option<String>,
    /// `DAILY`, `WEEKLY`, `MONTHLY`, `ANNUAL` and so on.
    pub cadence: String,
    /// Number of cadences the phase lasts; absent for a phase that never ends.
    pub periods: Option<i32>,
    pub recurring_price_money: Money,
    pub ordinal: Option<i64>,
}
