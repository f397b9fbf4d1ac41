use schemagen_codegen::{generate, plantuml};
use schemagen_core::schema::{ModelSet, SchemaRow};
use schemagen_core::Tables;
use std_util::prelude::*;

fn models() -> ModelSet {
    let rows = vec![SchemaRow::new(1, "/a").all_markers("a")];
    ModelSet::assemble(&rows, &Tables::default(), "com.example.models")
}

#[test]
fn four_classes_and_a_diagram() {
    let output = generate(&models(), Some(plantuml::DIAGRAM_FILE));

    assert_eq!(output.len(), 5);
    let paths: Vec<_> = output.iter().map(|file| file.path.to_string_lossy().into_owned()).collect();
    assert_eq!(
        paths,
        ["Model1.java", "Model2.java", "Model3.java", "Model4.java", plantuml::DIAGRAM_FILE]
    );

    let diagram = assert_some!(output.get(plantuml::DIAGRAM_FILE));
    assert!(diagram.contents.starts_with("@startuml"));
}

#[test]
fn diagram_can_be_skipped() {
    let output = generate(&models(), None);

    assert_eq!(output.len(), 4);
    assert_none!(output.get(plantuml::DIAGRAM_FILE));
}
