use super::Delimiter;
use crate::{Error, Result};

use indexmap::IndexMap;

/// One data record, keyed by trimmed header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based position in the data section, header excluded
    pub number: usize,

    /// Cell values in header order; missing trailing cells are empty
    pub values: IndexMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Returns `true` if every value is blank.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}

/// Header row plus records, before any column is interpreted.
#[derive(Debug)]
pub(super) struct Records {
    pub(super) headers: Vec<String>,
    pub(super) records: Vec<Record>,
    pub(super) skipped: usize,
}

pub(super) fn read(text: &str, delimiter: Delimiter) -> Result<Records> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header_row = reader
        .headers()
        .map_err(|err| Error::malformed_input(format!("cannot read header row: {err}")))?
        .clone();

    // Positions of usable header cells; blank ones are dropped everywhere
    let columns: Vec<(usize, String)> = header_row
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(position, name)| (position, name.to_string()))
        .collect();

    let mut records = vec![];
    let mut skipped = 0;

    for (offset, result) in reader.records().enumerate() {
        let number = offset + 1;

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(record = number, error = %err, "skipping malformed record");
                skipped += 1;
                continue;
            }
        };

        let mut values = IndexMap::with_capacity(columns.len());
        for (position, name) in &columns {
            let value = record.get(*position).unwrap_or("");
            values.entry(name.clone()).or_insert_with(|| value.to_string());
        }

        records.push(Record { number, values });
    }

    Ok(Records {
        headers: columns.into_iter().map(|(_, name)| name).collect(),
        records,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::DelimiterSource;

    fn comma() -> Delimiter {
        Delimiter {
            byte: b',',
            source: DelimiterSource::Default,
        }
    }

    #[test]
    fn values_are_trimmed_and_padded() {
        let records = read(" xpath , data_type ,notes\n /a , int \n", comma()).unwrap();

        assert_eq!(records.headers, ["xpath", "data_type", "notes"]);
        assert_eq!(records.records.len(), 1);

        let record = &records.records[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.get("xpath"), "/a");
        assert_eq!(record.get("data_type"), "int");
        assert_eq!(record.get("notes"), "");
        assert_eq!(record.get("missing"), "");
    }

    #[test]
    fn blank_headers_are_dropped() {
        let records = read("xpath,,notes\n/a,junk,hello\n", comma()).unwrap();

        assert_eq!(records.headers, ["xpath", "notes"]);
        assert_eq!(records.records[0].values.len(), 2);
        assert_eq!(records.records[0].get("notes"), "hello");
    }

    #[test]
    fn blank_record() {
        let records = read("xpath,notes\n , \n/a,\n", comma()).unwrap();

        assert!(records.records[0].is_blank());
        assert!(!records.records[1].is_blank());
        assert_eq!(records.records[1].number, 2);
    }

    #[test]
    fn empty_input_has_no_headers() {
        let records = read("", comma()).unwrap();
        assert!(records.headers.is_empty());
        assert!(records.records.is_empty());
    }
}
