use super::{Name, ResolvedType, SchemaRow, TypeTable};

/// One row's contribution to one model.
///
/// Every model owns its own copy, even when several models select the same
/// row: the default hint comes from the model's own marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Field identifier derived from the xpath
    pub name: Name,

    pub ty: ResolvedType,

    pub required: bool,

    /// The model marker, unless it just repeats the field name
    pub default_value: Option<String>,

    /// The model marker exactly as written
    pub marker: String,

    pub xpath: String,

    /// Required/optional value exactly as written
    pub required_status: String,

    /// Extra columns joined into one descriptive string
    pub extras: String,

    pub description: String,
}

impl ModelField {
    pub fn from_row(row: &SchemaRow, marker: &str, types: &TypeTable) -> ModelField {
        let name = Name::from_xpath(&row.xpath);
        let marker = marker.trim();

        let default_value = if marker.is_empty() || name == marker {
            None
        } else {
            Some(marker.to_string())
        };

        ModelField {
            ty: types.resolve(&row.data_type),
            required: row.is_required(),
            default_value,
            marker: marker.to_string(),
            xpath: row.xpath.clone(),
            required_status: row.required_status.clone(),
            extras: row.extras_description(),
            description: format!("Field mapped from XPath: {}", row.xpath),
            name,
        }
    }
}
