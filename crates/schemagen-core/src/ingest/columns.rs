use super::Record;
use crate::schema::{ModelIndex, SchemaRow, MODEL_COUNT};
use crate::{Error, Result};

/// Canonical name of the xpath column.
pub const XPATH: &str = "xpath";

/// Canonical name of the required/optional column.
pub const REQUIRED_STATUS: &str = "required/optional";

/// Canonical name of the data type column.
pub const DATA_TYPE: &str = "data_type";

const REQUIRED_STATUS_ALIASES: &[&str] = &["required/optional", "required", "requiredoptional"];
const DATA_TYPE_ALIASES: &[&str] = &["datatype", "type"];

/// Where each recognized column sits in a header row.
///
/// Column names are stored as they appear in the input, so records can be
/// looked up directly.
#[derive(Debug, Clone)]
pub struct Columns {
    xpath: String,
    required_status: String,
    data_type: String,
    models: [String; MODEL_COUNT],
    extras: Vec<String>,
}

impl Columns {
    /// Matches `headers` against the recognized columns.
    ///
    /// Matching ignores case, whitespace, `_` and `-`. Every header that is
    /// not recognized becomes an extra column.
    pub fn resolve(headers: &[String]) -> Result<Columns> {
        let missing = missing_columns(headers);
        if !missing.is_empty() {
            return Err(Error::missing_columns(missing, headers.to_vec()));
        }

        let xpath = find(headers, &[XPATH]);
        let required_status = find(headers, REQUIRED_STATUS_ALIASES);
        let data_type = find(headers, DATA_TYPE_ALIASES);
        let models: [String; MODEL_COUNT] = core::array::from_fn(|offset| {
            let column = ModelIndex::all()
                .nth(offset)
                .map(ModelIndex::column_name)
                .unwrap_or_default();
            find(headers, &[column.as_str()])
        });

        let recognized = |header: &String| {
            *header == xpath
                || *header == required_status
                || *header == data_type
                || models.contains(header)
        };

        let extras = headers
            .iter()
            .filter(|header| !recognized(*header))
            .cloned()
            .collect();

        Ok(Columns {
            xpath,
            required_status,
            data_type,
            models,
            extras,
        })
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// Builds the schema row for `record`, or `None` when its xpath is blank.
    pub fn row(&self, record: &Record) -> Option<SchemaRow> {
        let xpath = record.get(&self.xpath);
        if xpath.is_empty() {
            return None;
        }

        let mut row = SchemaRow::new(record.number, xpath)
            .required_status(record.get(&self.required_status))
            .data_type(record.get(&self.data_type));

        for index in ModelIndex::all() {
            row = row.marker(index, record.get(&self.models[index.offset()]));
        }

        for column in &self.extras {
            row = row.extra(column.as_str(), record.get(column));
        }

        Some(row)
    }
}

/// Canonical names of recognized columns absent from `headers`.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    let mut missing = vec![];

    if find(headers, &[XPATH]).is_empty() {
        missing.push(XPATH.to_string());
    }

    if find(headers, REQUIRED_STATUS_ALIASES).is_empty() {
        missing.push(REQUIRED_STATUS.to_string());
    }

    if find(headers, DATA_TYPE_ALIASES).is_empty() {
        missing.push(DATA_TYPE.to_string());
    }

    for index in ModelIndex::all() {
        let column = index.column_name();
        if find(headers, &[column.as_str()]).is_empty() {
            missing.push(column);
        }
    }

    missing
}

/// Headers that look like they were meant to be the xpath column.
pub fn similar_to_xpath(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|header| {
            let lower = header.to_lowercase();
            lower.contains("xpath") || lower.contains("path")
        })
        .collect()
}

/// First header matching one of `aliases`, or an empty string.
fn find(headers: &[String], aliases: &[&str]) -> String {
    headers
        .iter()
        .find(|header| aliases.contains(&normalize(header).as_str()))
        .cloned()
        .unwrap_or_default()
}

fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
