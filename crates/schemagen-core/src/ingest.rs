//! Turning raw schema table bytes into [`SchemaRow`]s.
//!
//! The ingestor is forgiving by design of the inputs it sees in practice:
//! spreadsheet exports in legacy encodings, semicolon or tab separated
//! files, a leading byte-order mark, and stray doubled quotes. It gives up
//! only when the input cannot be decoded at all or lacks the columns every
//! schema table needs.

mod columns;
pub use columns::{missing_columns, similar_to_xpath, Columns, DATA_TYPE, REQUIRED_STATUS, XPATH};

mod decode;
pub(crate) use decode::decode_text;
pub use decode::{decode, strip_bom, Decoded, Encodings};

mod delimiter;
pub use delimiter::{Delimiter, DelimiterSource, CANDIDATES, SAMPLE_LEN};

mod quote;
pub use quote::normalize_quotes;

mod record;
pub use record::Record;

use crate::schema::SchemaRow;
use crate::{Error, Result, Tables};

use encoding_rs::Encoding;
use std::path::Path;

/// Picks the delimiter for `content` from `candidates`.
pub fn detect_delimiter(content: &str, candidates: &[u8]) -> Delimiter {
    Delimiter::detect_with(content, candidates)
}

/// Parsed records before any column is interpreted.
#[derive(Debug)]
pub struct Table {
    pub encoding: &'static Encoding,
    pub delimiter: Delimiter,

    /// Non-blank header cells, trimmed, in input order
    pub headers: Vec<String>,

    pub records: Vec<Record>,

    /// Records the CSV reader rejected
    pub skipped: usize,
}

impl Table {
    /// Parses already decoded text.
    pub fn parse(text: &str, encoding: &'static Encoding) -> Result<Table> {
        let text = normalize_quotes(strip_bom(text));
        let delimiter = Delimiter::detect(&text);

        tracing::debug!(%delimiter, source = ?delimiter.source, "detected delimiter");

        let records = record::read(&text, delimiter)?;

        if records.skipped > 0 {
            tracing::warn!(skipped = records.skipped, "skipped malformed records");
        }

        Ok(Table {
            encoding,
            delimiter,
            headers: records.headers,
            records: records.records,
            skipped: records.skipped,
        })
    }
}

/// Result of ingesting one schema table.
#[derive(Debug)]
pub struct Ingested {
    pub encoding: &'static Encoding,
    pub delimiter: Delimiter,
    pub headers: Vec<String>,

    /// Rows with a non-blank xpath, in input order
    pub rows: Vec<SchemaRow>,

    /// Records with a blank xpath that still carry other values
    pub orphans: Vec<Record>,

    /// Records the CSV reader rejected
    pub skipped: usize,
}

/// Reads schema tables using a set of lookup [`Tables`].
#[derive(Debug, Clone, Copy)]
pub struct Ingestor<'a> {
    tables: &'a Tables,
}

impl<'a> Ingestor<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Self { tables }
    }

    /// Decodes and parses `bytes` without interpreting any column.
    pub fn read_table(&self, bytes: &[u8]) -> Result<Table> {
        let decoded = decode_text(bytes, &self.tables.encodings)?;
        Table::parse(&decoded.text, decoded.encoding)
    }

    /// Reads a schema table from memory.
    pub fn ingest(&self, bytes: &[u8]) -> Result<Ingested> {
        let table = self.read_table(bytes)?;
        let columns = Columns::resolve(&table.headers)?;

        let mut rows = vec![];
        let mut orphans = vec![];

        for record in table.records {
            if let Some(row) = columns.row(&record) {
                rows.push(row);
            } else if record.is_blank() {
                tracing::trace!(record = record.number, "dropping blank record");
            } else {
                tracing::debug!(record = record.number, "record has no xpath");
                orphans.push(record);
            }
        }

        tracing::info!(
            rows = rows.len(),
            orphans = orphans.len(),
            skipped = table.skipped,
            "ingested schema table"
        );

        Ok(Ingested {
            encoding: table.encoding,
            delimiter: table.delimiter,
            headers: table.headers,
            rows,
            orphans,
            skipped: table.skipped,
        })
    }

    /// Reads a schema table from disk.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<Ingested> {
        let path = path.as_ref();
        let bytes = read_file(path)?;

        self.ingest(&bytes)
            .map_err(|err| err.context(crate::err!("reading {}", path.display())))
    }
}

/// Reads `path`, reporting a missing file distinctly from other failures.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(Error::file_not_found(path)),
        Err(err) => Err(Error::io(Some(path), err)),
    }
}
