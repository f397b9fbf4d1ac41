use pretty_assertions::assert_eq;
use schemagen_codegen::plantuml::{self, Relationship, RelationshipKind};
use schemagen_core::schema::{ModelIndex, ModelSet, SchemaRow};
use schemagen_core::Tables;
use std_util::prelude::*;

fn index(n: usize) -> ModelIndex {
    assert_some!(ModelIndex::new(n))
}

fn assemble(rows: &[SchemaRow]) -> ModelSet {
    ModelSet::assemble(rows, &Tables::default(), "com.example.models")
}

fn row(number: usize, xpath: &str, markers: [&str; 4]) -> SchemaRow {
    let mut row = SchemaRow::new(number, xpath).data_type("string");
    for (i, marker) in markers.into_iter().enumerate() {
        row = row.marker(index(i + 1), marker);
    }
    row
}

#[test]
fn full_diagram() {
    let models = assemble(&[
        SchemaRow::new(1, "/p/@id")
            .required_status("required")
            .data_type("integer")
            .all_markers("id")
            .marker(index(3), "skip")
            .marker(index(4), "skip"),
        SchemaRow::new(2, "/p/name")
            .required_status("optional")
            .data_type("string")
            .all_markers("skip")
            .marker(index(1), "name"),
    ]);

    assert_eq!(
        plantuml::diagram(&models),
        "@startuml CSV Schema Models
!theme plain
skinparam classAttributeIconSize 0
skinparam classFontStyle bold
skinparam classBackgroundColor lightblue
skinparam classHeaderBackgroundColor darkblue
skinparam classHeaderFontColor white

title CSV Schema - Java Models UML Diagram

class Model1 {
  - id: Integer {field}
  - name: String
  --
  + Model1(Integer id, String name)
  --
  + getId(): Integer
  + setId(Integer): void
  + getName(): String
  + setName(String): void
  --
  + equals(Object): boolean
  + hashCode(): int
  + toString(): String
}

class Model2 {
  - id: Integer {field}
  --
  + Model2(Integer id)
  --
  + getId(): Integer
  + setId(Integer): void
  --
  + equals(Object): boolean
  + hashCode(): int
  + toString(): String
}

Model1 ..> Model2 : references

note top : Generated from CSV Schema
note bottom : Total Fields: 2
note bottom : Required: 1, Optional: 1
@enduml
"
    );
}

#[test]
fn relationship_strength_follows_shared_identifiers() {
    let models = assemble(&[
        row(1, "/a", ["a", "a", "a", "skip"]),
        row(2, "/b", ["b", "b", "b", "skip"]),
        row(3, "/c", ["c", "c", "skip", "skip"]),
        row(4, "/d", ["d", "d", "skip", "skip"]),
        row(5, "/e", ["skip", "skip", "skip", "e"]),
    ]);

    assert_eq!(
        plantuml::relationships(&models),
        [
            Relationship {
                left: "Model1".to_string(),
                right: "Model2".to_string(),
                shared: 4,
                kind: RelationshipKind::Strong,
            },
            Relationship {
                left: "Model1".to_string(),
                right: "Model3".to_string(),
                shared: 2,
                kind: RelationshipKind::Weak,
            },
            Relationship {
                left: "Model2".to_string(),
                right: "Model3".to_string(),
                shared: 2,
                kind: RelationshipKind::Weak,
            },
        ]
    );

    let diagram = plantuml::diagram(&models);
    assert!(diagram.contains("Model1 ||--|| Model2 : shares 4 fields\n"));
    assert!(diagram.contains("Model1 ..> Model3 : references\n"));
    assert!(!diagram.contains("Model4 ..>"));
}

#[test]
fn duplicate_identifiers_count_once() {
    let models = assemble(&[
        row(1, "/a/id", ["x", "x", "skip", "skip"]),
        row(2, "/b/id", ["x", "x", "skip", "skip"]),
    ]);

    let relationships = plantuml::relationships(&models);
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[0].shared, 1);
}

#[test]
fn empty_models_are_left_out() {
    let models = assemble(&[row(1, "/a", ["a", "skip", "skip", "skip"])]);
    let diagram = plantuml::diagram(&models);

    assert!(diagram.contains("class Model1 {"));
    assert!(!diagram.contains("class Model2"));
    assert_empty!(plantuml::relationships(&models));
    assert!(diagram.ends_with(
        "note top : Generated from CSV Schema\n\
         note bottom : Total Fields: 1\n\
         note bottom : Required: 0, Optional: 1\n\
         @enduml\n"
    ));
}

#[test]
fn nothing_selected() {
    let models = assemble(&[]);
    let diagram = plantuml::diagram(&models);

    assert!(!diagram.contains("class "));
    assert!(diagram.contains("title CSV Schema - Java Models UML Diagram\n\nnote top"));
}
