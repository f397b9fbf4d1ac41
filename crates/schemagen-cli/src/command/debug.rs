use crate::Context;
use anyhow::Result;
use clap::Parser;
use schemagen_core::diagnose::Diagnosis;
use schemagen_core::err;
use schemagen_core::ingest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct DebugCommand {
    /// Schema table to inspect
    input: PathBuf,
}

impl DebugCommand {
    pub(crate) fn run(self, cx: &Context) -> Result<()> {
        let tables = cx.config.tables()?;
        let bytes = ingest::read_file(&self.input)?;

        let diagnosis = Diagnosis::run(&bytes, &tables)
            .map_err(|err| err.context(err!("reading {}", self.input.display())))?;

        // The report is the output of this command, so it is printed even
        // when quiet
        print!("{diagnosis}");

        if diagnosis.has_warnings() {
            tracing::warn!("the schema table has problems; see the report above");
        }

        Ok(())
    }
}
