//! Interpretation of tabular XPath schema descriptions.
//!
//! The pipeline is: raw bytes → [`ingest::Ingestor`] → [`schema::SchemaRow`]s
//! → per-model selection → [`schema::ModelSet`]. Emitting source files and
//! diagrams from the assembled models lives in `schemagen-codegen`.

mod error;
pub use error::{Error, IntoError};

pub mod diagnose;
pub mod ingest;
pub mod preprocess;
pub mod schema;

mod tables;
pub use tables::Tables;

/// A Result type alias that uses schemagen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
