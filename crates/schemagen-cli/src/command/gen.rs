use super::{load_models, write_file, FilterArg};
use crate::Context;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenCommand {
    /// Schema table to read
    input: PathBuf,

    /// Directory for the generated files [default: output]
    output_dir: Option<PathBuf>,

    /// Do not generate the PlantUML diagram
    #[arg(long)]
    no_diagram: bool,

    /// Repair the input before reading it (repeatable)
    #[arg(long = "filter", value_enum, value_name = "FILTER")]
    filters: Vec<FilterArg>,
}

impl GenCommand {
    pub(crate) fn run(self, cx: &Context) -> Result<()> {
        cx.heading("Generate Models");

        let models = load_models(cx, &self.input, &self.filters)?;
        let output_dir = self
            .output_dir
            .unwrap_or_else(|| cx.config.output_dir.clone());

        let diagram_file = (!self.no_diagram).then_some(cx.config.diagram_file.as_str());
        let output = schemagen_codegen::generate(&models, diagram_file);

        for file in output.iter() {
            let path = output_dir.join(&file.path);
            write_file(&path, &file.contents)?;
            cx.done(format!("Wrote {}", path.display()));
        }

        cx.finish(format!(
            "Generated {} files into {}",
            output.len(),
            output_dir.display()
        ));

        Ok(())
    }
}
