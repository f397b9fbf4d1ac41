mod debug;
mod fix;
mod gen;
mod uml;

pub(crate) use debug::DebugCommand;
pub(crate) use fix::FixCommand;
pub(crate) use gen::GenCommand;
pub(crate) use uml::UmlCommand;

use crate::Context;
use anyhow::Result;
use clap::ValueEnum;
use console::style;
use schemagen_core::ingest::{self, Ingested, Ingestor};
use schemagen_core::preprocess::{CleanQuotes, Pipeline, RejoinLines, StripBom};
use schemagen_core::err;
use schemagen_core::schema::ModelSet;
use schemagen_core::Tables;
use std::fs;
use std::path::Path;

/// Repairs that can be applied to the input before it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Remove a leading byte-order mark
    Bom,

    /// Join rows wrapped across several lines
    Lines,

    /// Flatten stray quoting
    Clean,
}

impl FilterArg {
    pub fn pipeline(filters: &[FilterArg]) -> Pipeline {
        let mut pipeline = Pipeline::new();

        for filter in filters {
            match filter {
                FilterArg::Bom => pipeline.push(StripBom),
                FilterArg::Lines => pipeline.push(RejoinLines),
                FilterArg::Clean => pipeline.push(CleanQuotes),
            }
        }

        pipeline
    }
}

/// Reads `input`, applies `filters`, and ingests the result.
fn read_input(input: &Path, filters: &[FilterArg], tables: &Tables) -> Result<Ingested> {
    let mut bytes = ingest::read_file(input)?;

    let pipeline = FilterArg::pipeline(filters);
    if !pipeline.is_empty() {
        bytes = pipeline.apply(&bytes).bytes;
    }

    let ingested = Ingestor::new(tables)
        .ingest(&bytes)
        .map_err(|err| err.context(err!("reading {}", input.display())))?;

    Ok(ingested)
}

/// Ingests `input` and assembles the models with the configured package.
fn load_models(cx: &Context, input: &Path, filters: &[FilterArg]) -> Result<ModelSet> {
    let tables = cx.config.tables()?;
    let ingested = read_input(input, filters, &tables)?;

    if !ingested.orphans.is_empty() {
        cx.warn(format!(
            "{} records without an xpath were ignored (see `schemagen debug`)",
            ingested.orphans.len()
        ));
    }

    if ingested.skipped > 0 {
        cx.warn(format!("{} malformed records were skipped", ingested.skipped));
    }

    Ok(ModelSet::assemble(
        &ingested.rows,
        &tables,
        &cx.config.package,
    ))
}

/// Writes `contents`, creating parent directories as needed.
fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;
    Ok(())
}

impl Context {
    fn heading(&self, title: &str) {
        if self.quiet {
            return;
        }

        println!();
        println!("  {}", style(title).cyan().bold().underlined());
        println!();
    }

    fn done(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(message.as_ref()).dim()
        );
    }

    fn warn(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        println!(
            "  {} {}",
            style("!").yellow().bold(),
            style(message.as_ref()).yellow()
        );
    }

    fn finish(&self, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        println!();
        println!("  {}", style(message.as_ref()).green().bold());
        println!();
    }
}
