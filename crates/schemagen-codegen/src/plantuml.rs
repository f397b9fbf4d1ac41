//! PlantUML class diagram emitter.

use schemagen_core::schema::{Model, ModelSet};

use std::fmt;

/// File name the diagram is written to by default.
pub const DIAGRAM_FILE: &str = "schema_uml.puml";

/// Models sharing more identifiers than this are drawn as strongly related.
pub const STRONG_THRESHOLD: usize = 3;

const HEADER: &[&str] = &[
    "@startuml CSV Schema Models",
    "!theme plain",
    "skinparam classAttributeIconSize 0",
    "skinparam classFontStyle bold",
    "skinparam classBackgroundColor lightblue",
    "skinparam classHeaderBackgroundColor darkblue",
    "skinparam classHeaderFontColor white",
    "",
    "title CSV Schema - Java Models UML Diagram",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// More than [`STRONG_THRESHOLD`] shared identifiers
    Strong,

    /// At least one shared identifier
    Weak,
}

/// Two non-empty models that share field identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub left: String,
    pub right: String,
    pub shared: usize,
    pub kind: RelationshipKind,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            RelationshipKind::Strong => write!(
                f,
                "{} ||--|| {} : shares {} fields",
                self.left, self.right, self.shared
            ),
            RelationshipKind::Weak => write!(f, "{} ..> {} : references", self.left, self.right),
        }
    }
}

/// Pairwise relationships between non-empty models, in index order.
///
/// Models are compared by the set of distinct field identifiers they hold.
pub fn relationships(models: &ModelSet) -> Vec<Relationship> {
    let models: Vec<&Model> = models.non_empty().collect();
    let mut relationships = vec![];

    for (i, left) in models.iter().enumerate() {
        let left_ids = left.identifiers();

        for right in &models[i + 1..] {
            let shared = left_ids.intersection(&right.identifiers()).count();

            let kind = match shared {
                0 => continue,
                n if n > STRONG_THRESHOLD => RelationshipKind::Strong,
                _ => RelationshipKind::Weak,
            };

            relationships.push(Relationship {
                left: left.name.clone(),
                right: right.name.clone(),
                shared,
                kind,
            });
        }
    }

    relationships
}

/// Renders the full diagram document.
pub fn diagram(models: &ModelSet) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();

    for model in models.non_empty() {
        class(&mut lines, model);
        lines.push(String::new());
    }

    let relationships = relationships(models);
    if !relationships.is_empty() {
        lines.extend(relationships.iter().map(Relationship::to_string));
        lines.push(String::new());
    }

    lines.push("note top : Generated from CSV Schema".to_string());
    lines.push(format!("note bottom : Total Fields: {}", models.total_rows()));
    lines.push(format!(
        "note bottom : Required: {}, Optional: {}",
        models.required_rows(),
        models.optional_rows()
    ));
    lines.push("@enduml".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn class(lines: &mut Vec<String>, model: &Model) {
    lines.push(format!("class {} {{", model.name));

    for field in &model.fields {
        let marker = if field.required { " {field}" } else { "" };
        lines.push(format!("  - {}: {}{}", field.name, field.ty.name(), marker));
    }

    lines.push("  --".to_string());

    let params = model
        .fields
        .iter()
        .map(|field| format!("{} {}", field.ty.name(), field.name))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("  + {}({})", model.name, params));

    lines.push("  --".to_string());

    for field in &model.fields {
        let suffix = field.name.upper_camel_case();
        let ty = field.ty.name();
        lines.push(format!("  + get{suffix}(): {ty}"));
        lines.push(format!("  + set{suffix}({ty}): void"));
    }

    lines.push("  --".to_string());
    lines.push("  + equals(Object): boolean".to_string());
    lines.push("  + hashCode(): int".to_string());
    lines.push("  + toString(): String".to_string());
    lines.push("}".to_string());
}
