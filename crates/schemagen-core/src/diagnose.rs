//! A readable account of how a schema table was interpreted.
//!
//! Unlike [`Ingestor::ingest`](crate::ingest::Ingestor::ingest), diagnosis does not stop at missing columns:
//! it reports what it found so the table can be fixed.

use crate::ingest::{self, decode_text, Delimiter, DelimiterSource, Record, Table};
use crate::schema::{ModelSet, Name, DEFAULT_PACKAGE};
use crate::{Result, Tables};

use encoding_rs::Encoding;
use std::fmt;

const PREVIEW_LINES: usize = 5;
const SAMPLE_ROWS: usize = 3;
const SAMPLE_FIELDS: usize = 3;

#[derive(Debug)]
pub struct Diagnosis {
    /// Leading physical lines of the decoded input
    pub preview: Vec<String>,

    pub encoding: &'static Encoding,
    pub delimiter: Delimiter,
    pub headers: Vec<String>,

    /// Recognized columns that are absent
    pub missing: Vec<String>,

    /// Headers resembling `xpath`, when there is no xpath column
    pub similar: Vec<String>,

    /// Rows with an xpath
    pub rows: usize,

    /// Records the CSV reader rejected
    pub skipped: usize,

    pub samples: Vec<Sample>,
    pub models: Vec<ModelSummary>,
    pub orphans: Vec<Record>,
}

/// One of the first rows and the identifier derived from it.
#[derive(Debug)]
pub struct Sample {
    pub number: usize,
    pub xpath: String,
    pub name: Name,
}

#[derive(Debug)]
pub struct ModelSummary {
    pub name: String,
    pub column: String,
    pub fields: usize,

    /// First few field identifiers
    pub first: Vec<String>,
}

impl Diagnosis {
    /// Fails only when the input cannot be decoded or its header row read.
    pub fn run(bytes: &[u8], tables: &Tables) -> Result<Diagnosis> {
        let decoded = decode_text(bytes, &tables.encodings)?;
        let table = Table::parse(&decoded.text, decoded.encoding)?;

        let preview = decoded
            .text
            .lines()
            .take(PREVIEW_LINES)
            .map(str::to_string)
            .collect();

        let missing = ingest::missing_columns(&table.headers);
        let similar = if missing.iter().any(|column| column == ingest::XPATH) {
            ingest::similar_to_xpath(&table.headers)
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            vec![]
        };

        let mut diagnosis = Diagnosis {
            preview,
            encoding: table.encoding,
            delimiter: table.delimiter,
            headers: table.headers.clone(),
            missing,
            similar,
            rows: 0,
            skipped: table.skipped,
            samples: vec![],
            models: vec![],
            orphans: vec![],
        };

        if !diagnosis.missing.is_empty() {
            return Ok(diagnosis);
        }

        let columns = ingest::Columns::resolve(&table.headers)?;
        let mut rows = vec![];

        for record in table.records {
            match columns.row(&record) {
                Some(row) => rows.push(row),
                None if record.is_blank() => {}
                None => diagnosis.orphans.push(record),
            }
        }

        diagnosis.rows = rows.len();
        diagnosis.samples = rows
            .iter()
            .take(SAMPLE_ROWS)
            .map(|row| Sample {
                number: row.number,
                xpath: row.xpath.clone(),
                name: Name::from_xpath(&row.xpath),
            })
            .collect();

        let models = ModelSet::assemble(&rows, tables, DEFAULT_PACKAGE);
        diagnosis.models = models
            .iter()
            .map(|model| ModelSummary {
                name: model.name.clone(),
                column: model.index.column_name(),
                fields: model.fields.len(),
                first: model
                    .fields
                    .iter()
                    .take(SAMPLE_FIELDS)
                    .map(|field| field.name.to_string())
                    .collect(),
            })
            .collect();

        Ok(diagnosis)
    }

    /// Returns `true` if anything in the report deserves attention.
    pub fn has_warnings(&self) -> bool {
        !self.missing.is_empty()
            || self.skipped > 0
            || !self.orphans.is_empty()
            || self.samples.iter().any(|sample| sample.name.is_sentinel())
            || self.models.iter().any(|model| model.fields == 0)
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "First {} lines:", PREVIEW_LINES)?;
        for (i, line) in self.preview.iter().enumerate() {
            writeln!(f, "  {}: {:?}", i + 1, line)?;
        }

        writeln!(f)?;
        writeln!(f, "Encoding: {}", self.encoding.name())?;

        let source = match self.delimiter.source {
            DelimiterSource::Sniffed => "sniffed",
            DelimiterSource::Probed => "probed",
            DelimiterSource::Default => "default",
        };
        writeln!(f, "Delimiter: {} ({})", self.delimiter, source)?;
        writeln!(f, "Headers: [{}]", self.headers.join(", "))?;

        if !self.missing.is_empty() {
            writeln!(f, "warning: missing columns: [{}]", self.missing.join(", "))?;

            if !self.similar.is_empty() {
                writeln!(f, "  similar columns: [{}]", self.similar.join(", "))?;
            }

            return Ok(());
        }

        writeln!(f)?;
        write!(f, "Parsed {} rows", self.rows)?;
        if self.skipped > 0 {
            write!(f, " ({} malformed records skipped)", self.skipped)?;
        }
        writeln!(f)?;

        for sample in &self.samples {
            write!(
                f,
                "  record {}: {:?} -> {}",
                sample.number, sample.xpath, sample.name
            )?;
            if sample.name.is_sentinel() {
                write!(f, " (warning: no identifier could be derived)")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for model in &self.models {
            if model.fields == 0 {
                writeln!(f, "{} ({}): no fields", model.name, model.column)?;
            } else {
                writeln!(
                    f,
                    "{} ({}): {} fields, first: {}",
                    model.name,
                    model.column,
                    model.fields,
                    model.first.join(", ")
                )?;
            }
        }

        if !self.orphans.is_empty() {
            writeln!(f)?;
            writeln!(f, "Records without an xpath:")?;
            for orphan in &self.orphans {
                let values = orphan
                    .values
                    .iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(column, value)| format!("{column}={value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "  record {}: {}", orphan.number, values)?;
            }
        }

        Ok(())
    }
}
