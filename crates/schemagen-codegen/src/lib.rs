//! Source files and diagrams generated from an assembled [`ModelSet`].
//!
//! Everything here is plain templating: no decision about which fields a
//! model has is made at this stage. Writing the output to disk is left to
//! the caller.

pub mod java;
pub mod plantuml;

mod out;
pub use out::{GeneratedFile, Output};

use schemagen_core::schema::ModelSet;

/// Generates one Java class per model, plus the diagram under
/// `diagram_file` when one is given.
pub fn generate(models: &ModelSet, diagram_file: Option<&str>) -> Output {
    let mut output = Output::default();

    for model in models {
        output.push(GeneratedFile::new(java::file_name(model), java::class(model)));
    }

    if let Some(diagram_file) = diagram_file {
        output.push(GeneratedFile::new(diagram_file, plantuml::diagram(models)));
    }

    output
}
