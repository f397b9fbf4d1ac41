use super::{is_required, ModelIndex, MODEL_COUNT};

use indexmap::IndexMap;

/// One record of the schema table, as handed to the model selector.
///
/// Rows are only built for records with a non-blank xpath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRow {
    /// 1-based position of the record in the data section of the input
    pub number: usize,

    pub xpath: String,

    /// Free-text required/optional value, as written
    pub required_status: String,

    /// Free-text data type, optionally with a `[constraint]`
    pub data_type: String,

    /// Per-model marker values, indexed by model offset
    pub markers: [String; MODEL_COUNT],

    /// Every column that is not one of the recognized ones, in header order
    pub extras: IndexMap<String, String>,
}

impl SchemaRow {
    pub fn new(number: usize, xpath: impl Into<String>) -> Self {
        Self {
            number,
            xpath: xpath.into(),
            required_status: String::new(),
            data_type: String::new(),
            markers: Default::default(),
            extras: IndexMap::new(),
        }
    }

    pub fn required_status(mut self, status: impl Into<String>) -> Self {
        self.required_status = status.into();
        self
    }

    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    pub fn marker(mut self, index: ModelIndex, marker: impl Into<String>) -> Self {
        self.markers[index.offset()] = marker.into();
        self
    }

    /// Sets the same marker on every model.
    pub fn all_markers(mut self, marker: &str) -> Self {
        for slot in &mut self.markers {
            *slot = marker.to_string();
        }
        self
    }

    pub fn extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(column.into(), value.into());
        self
    }

    pub fn marker_for(&self, index: ModelIndex) -> &str {
        &self.markers[index.offset()]
    }

    pub fn is_required(&self) -> bool {
        is_required(&self.required_status)
    }

    /// Extra columns rendered as `column: value | column: value`, skipping
    /// blank values.
    pub fn extras_description(&self) -> String {
        self.extras
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(column, value)| format!("{}: {}", column, value.trim()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
