use anyhow::{Context as _, Result};
use schemagen_core::ingest::Encodings;
use schemagen_core::schema::{SkipMarkers, DEFAULT_PACKAGE};
use schemagen_core::{Error, Tables};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "schemagen.toml";

/// Configuration for schemagen runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Package of the generated Java classes
    pub package: String,

    /// Where `gen` writes when no output directory is given
    pub output_dir: PathBuf,

    /// File name of the diagram inside the output directory
    pub diagram_file: String,

    /// Fallback encodings, replacing the built-in list
    pub encodings: Option<Vec<String>>,

    /// Exclusion markers, replacing the built-in set
    pub skip_markers: Option<Vec<String>>,

    /// Type synonyms merged over the built-in table
    pub types: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            output_dir: PathBuf::from("output"),
            diagram_file: schemagen_codegen::plantuml::DIAGRAM_FILE.to_string(),
            encodings: None,
            skip_markers: None,
            types: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn diagram_file(mut self, name: impl Into<String>) -> Self {
        self.diagram_file = name.into();
        self
    }

    pub fn encodings<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encodings = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn skip_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    pub fn type_synonym(mut self, synonym: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.types.insert(synonym.into(), canonical.into());
        self
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;

        contents
            .parse::<Config>()
            .with_context(|| format!("in config file {}", path.display()))
    }

    /// Loads `path` when given, otherwise [`CONFIG_FILE`] when it exists,
    /// otherwise the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Config::load(path);
        }

        let default_path = Path::new(CONFIG_FILE);
        if default_path.is_file() {
            tracing::info!(path = CONFIG_FILE, "loading configuration");
            return Config::load(default_path);
        }

        Ok(Config::default())
    }

    /// Lookup tables for the core, built-in tables overlaid with this
    /// configuration.
    pub fn tables(&self) -> Result<Tables> {
        let mut tables = Tables::default();

        if let Some(labels) = &self.encodings {
            tables = tables.encodings(Encodings::from_labels(labels)?);
        }

        if let Some(markers) = &self.skip_markers {
            tables = tables.skip_markers(SkipMarkers::new(markers));
        }

        for (synonym, canonical) in &self.types {
            tables.types.insert(synonym, canonical.clone());
        }

        Ok(tables)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(|err| Error::invalid_config(err.to_string()))
    }
}
