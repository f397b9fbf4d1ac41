use super::{load_models, write_file};
use crate::Context;
use anyhow::Result;
use clap::Parser;
use schemagen_codegen::plantuml;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct UmlCommand {
    /// Schema table to read
    input: PathBuf,

    /// Diagram file to write [default: output/schema_uml.puml]
    output_file: Option<PathBuf>,
}

impl UmlCommand {
    pub(crate) fn run(self, cx: &Context) -> Result<()> {
        cx.heading("Generate Diagram");

        let models = load_models(cx, &self.input, &[])?;
        let output_file = self
            .output_file
            .unwrap_or_else(|| cx.config.output_dir.join(&cx.config.diagram_file));

        write_file(&output_file, plantuml::diagram(&models))?;
        cx.done(format!("Wrote {}", output_file.display()));

        let relationships = plantuml::relationships(&models);
        cx.finish(format!(
            "Diagram has {} classes and {} relationships",
            models.non_empty().count(),
            relationships.len()
        ));

        Ok(())
    }
}
