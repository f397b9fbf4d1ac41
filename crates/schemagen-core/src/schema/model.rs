use super::{select, ModelField, SchemaRow};
use crate::Tables;

use indexmap::IndexSet;

/// Number of target models. Fixed by the input format (`model1`..`model4`).
pub const MODEL_COUNT: usize = 4;

/// Package used for generated classes unless configured otherwise.
pub const DEFAULT_PACKAGE: &str = "com.example.models";

/// 1-based model index, always within `1..=MODEL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelIndex(usize);

impl ModelIndex {
    pub fn new(index: usize) -> Option<ModelIndex> {
        (1..=MODEL_COUNT).contains(&index).then_some(ModelIndex(index))
    }

    pub fn all() -> impl Iterator<Item = ModelIndex> {
        (1..=MODEL_COUNT).map(ModelIndex)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based position, for indexing per-model arrays.
    pub fn offset(self) -> usize {
        self.0 - 1
    }

    /// `Model1`, `Model2`, ...
    pub fn model_name(self) -> String {
        format!("Model{}", self.0)
    }

    /// Name of the marker column feeding this model (`model1`, ...).
    pub fn column_name(self) -> String {
        format!("model{}", self.0)
    }
}

impl core::fmt::Display for ModelIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub index: ModelIndex,

    /// Model name, also used as the generated class name
    pub name: String,

    /// Target package / namespace hint
    pub package: String,

    /// Selected fields, in source row order
    pub fields: Vec<ModelField>,
}

impl Model {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Distinct field identifiers, in first-seen order.
    pub fn identifiers(&self) -> IndexSet<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    /// Identifiers derived by more than one selected field, in first-seen
    /// order. Emitted classes would declare these twice.
    pub fn duplicate_identifiers(&self) -> IndexSet<&str> {
        let mut seen = IndexSet::new();
        let mut duplicates = IndexSet::new();

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                duplicates.insert(field.name.as_str());
            }
        }

        duplicates
    }
}

/// The four models derived from one schema table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    models: Vec<Model>,

    /// Rows that reached the selector
    total_rows: usize,

    /// How many of those rows are marked required
    required_rows: usize,
}

impl ModelSet {
    /// Runs field selection for every model index.
    ///
    /// All [`MODEL_COUNT`] models are always present, in index order, even
    /// when a model selects nothing.
    pub fn assemble(rows: &[SchemaRow], tables: &Tables, package: &str) -> ModelSet {
        let models = ModelIndex::all()
            .map(|index| {
                let fields = select::fields(rows, index, tables);
                tracing::debug!(model = %index.model_name(), fields = fields.len(), "assembled model");

                let model = Model {
                    index,
                    name: index.model_name(),
                    package: package.to_string(),
                    fields,
                };

                for name in model.duplicate_identifiers() {
                    tracing::warn!(
                        model = %model.name,
                        field = name,
                        "several rows derive the same field name"
                    );
                }

                model
            })
            .collect();

        ModelSet {
            models,
            total_rows: rows.len(),
            required_rows: rows.iter().filter(|row| row.is_required()).count(),
        }
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn get(&self, index: ModelIndex) -> &Model {
        &self.models[index.offset()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    /// Models with at least one field.
    pub fn non_empty(&self) -> impl Iterator<Item = &Model> {
        self.models.iter().filter(|model| !model.is_empty())
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn required_rows(&self) -> usize {
        self.required_rows
    }

    pub fn optional_rows(&self) -> usize {
        self.total_rows - self.required_rows
    }
}

impl<'a> IntoIterator for &'a ModelSet {
    type Item = &'a Model;
    type IntoIter = core::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_index_bounds() {
        assert!(ModelIndex::new(0).is_none());
        assert!(ModelIndex::new(5).is_none());
        assert_eq!(ModelIndex::all().count(), MODEL_COUNT);
        assert_eq!(ModelIndex::new(2).map(ModelIndex::model_name).as_deref(), Some("Model2"));
    }

    #[test]
    fn empty_input_still_yields_four_models() {
        let set = ModelSet::assemble(&[], &Tables::default(), DEFAULT_PACKAGE);

        assert_eq!(set.models().len(), MODEL_COUNT);
        assert!(set.iter().all(Model::is_empty));
        assert_eq!(set.non_empty().count(), 0);
        assert_eq!(set.total_rows(), 0);
    }

    #[test]
    fn duplicate_identifiers_within_a_model() {
        let model3 = ModelIndex::new(3).unwrap();
        let rows = [
            SchemaRow::new(1, "/a/name").data_type("string").all_markers("x"),
            SchemaRow::new(2, "/b/name").data_type("string").all_markers("x").marker(model3, "skip"),
            SchemaRow::new(3, "/b/@id").data_type("int").all_markers("x"),
        ];

        let set = ModelSet::assemble(&rows, &Tables::default(), DEFAULT_PACKAGE);

        let model1 = set.get(ModelIndex::new(1).unwrap());
        assert_eq!(model1.fields.len(), 3);
        assert_eq!(model1.duplicate_identifiers().into_iter().collect::<Vec<_>>(), ["name"]);
        assert!(set.get(model3).duplicate_identifiers().is_empty());
    }
}
