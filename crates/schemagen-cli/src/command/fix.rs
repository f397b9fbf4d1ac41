use super::{write_file, FilterArg};
use crate::Context;
use anyhow::Result;
use clap::Parser;
use schemagen_core::ingest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct FixCommand {
    /// Schema table to repair
    input: PathBuf,

    /// Where to write the result [default: overwrite INPUT]
    output: Option<PathBuf>,

    /// Repair to apply, in order (repeatable)
    #[arg(long = "filter", value_enum, value_name = "FILTER", required = true)]
    filters: Vec<FilterArg>,
}

impl FixCommand {
    pub(crate) fn run(self, cx: &Context) -> Result<()> {
        cx.heading("Repair Schema Table");

        let bytes = ingest::read_file(&self.input)?;
        let repaired = FilterArg::pipeline(&self.filters).apply(&bytes);

        let output = self.output.unwrap_or_else(|| self.input.clone());
        write_file(&output, &repaired.bytes)?;

        cx.done(format!("Wrote {}", output.display()));
        cx.finish(format!("Made {} edits", repaired.edits));

        Ok(())
    }
}
