//! Per-model field selection.

use super::{ModelField, ModelIndex, SchemaRow};
use crate::Tables;

/// Selects the fields of one model from the full row set.
///
/// A row is dropped from the model when its marker for `index` is in the
/// exclusion set; it may still appear in other models. Source order is
/// preserved and the result depends on nothing but the rows and tables.
pub fn fields(rows: &[SchemaRow], index: ModelIndex, tables: &Tables) -> Vec<ModelField> {
    rows.iter()
        .filter(|row| !row.xpath.trim().is_empty())
        .filter_map(|row| {
            let marker = row.marker_for(index);

            if tables.skip_markers.is_excluded(marker) {
                tracing::trace!(row = row.number, model = %index, marker, "row excluded");
                return None;
            }

            Some(ModelField::from_row(row, marker, &tables.types))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SkipMarkers;

    fn index(n: usize) -> ModelIndex {
        ModelIndex::new(n).unwrap()
    }

    #[test]
    fn excluded_rows_leave_only_that_model() {
        let rows = vec![
            SchemaRow::new(1, "/a").all_markers("a").marker(index(2), "Skip"),
            SchemaRow::new(2, "/b").all_markers("b"),
        ];
        let tables = Tables::default();

        let names = |n| -> Vec<String> {
            fields(&rows, index(n), &tables)
                .into_iter()
                .map(|field| field.name.to_string())
                .collect()
        };

        assert_eq!(names(1), ["a", "b"]);
        assert_eq!(names(2), ["b"]);
    }

    #[test]
    fn blank_xpath_is_ignored() {
        let rows = vec![SchemaRow::new(1, "  ").all_markers("x")];
        assert!(fields(&rows, index(1), &Tables::default()).is_empty());
    }

    #[test]
    fn custom_skip_markers() {
        let rows = vec![SchemaRow::new(1, "/a").all_markers("skip")];
        let tables = Tables::default().skip_markers(SkipMarkers::new(["omit"]));

        assert_eq!(fields(&rows, index(1), &tables).len(), 1);
    }
}
