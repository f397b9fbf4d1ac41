//! Java class emitter.
//!
//! Each model becomes a plain bean: documented private fields, a default
//! and a full constructor, accessors, and value-based `toString`, `equals`
//! and `hashCode`.

use schemagen_core::schema::{Model, ModelField};

use std::collections::BTreeSet;
use std::fmt::Write;

const INDENT: &str = "    ";

/// `Model1.java` for `Model1`.
pub fn file_name(model: &Model) -> String {
    format!("{}.java", model.name)
}

/// Sorted imports needed by the model's field types.
pub fn imports(model: &Model) -> BTreeSet<&'static str> {
    model
        .fields
        .iter()
        .filter_map(|field| field.ty.java_import())
        .collect()
}

/// Renders the full source of the model's class.
pub fn class(model: &Model) -> String {
    let mut out = Java::default();
    let class = model.name.as_str();

    out.line(0, format!("package {};", model.package));
    out.blank();

    let imports = imports(model);
    if !imports.is_empty() {
        for import in &imports {
            out.line(0, format!("import {import};"));
        }
        out.blank();
    }

    out.doc(
        0,
        &[
            format!("{class} - Auto-generated model class"),
            "Generated from CSV schema definition".to_string(),
        ],
    );
    out.line(0, format!("public class {class} {{"));
    out.blank();

    for field in &model.fields {
        field_declaration(&mut out, field);
    }

    out.doc(1, &["Default constructor".to_string()]);
    out.line(1, format!("public {class}() {{"));
    out.line(1, "}");
    out.blank();

    if !model.is_empty() {
        constructor(&mut out, model);
    }

    for field in &model.fields {
        accessors(&mut out, field);
    }

    to_string(&mut out, model);
    equals(&mut out, model);
    hash_code(&mut out, model);

    out.line(0, "}");
    out.finish()
}

fn field_declaration(out: &mut Java, field: &ModelField) {
    let mut doc = vec![];

    if !field.xpath.is_empty() {
        doc.push(format!("xpath: {}", field.xpath));
    }

    if !field.required_status.is_empty() {
        doc.push(format!("required/optional: {}", field.required_status));
    }

    doc.push(format!("data_type: {}", field.ty));

    if !field.marker.is_empty() {
        doc.push(format!("model_value: {}", field.marker));
    }

    if !field.extras.is_empty() {
        doc.push(format!("additional_info: {}", field.extras));
    }

    if let Some(default) = &field.default_value {
        doc.push(format!("default_value: {default}"));
    }

    out.doc(1, &doc);

    let mut declaration = format!("private {} {}", field.ty.name(), field.name);
    if let (Some(default), true) = (&field.default_value, field.ty.is_string()) {
        let _ = write!(declaration, " = \"{}\"", escape_string(default));
    }
    declaration.push(';');

    out.line(1, declaration);
    out.blank();
}

fn constructor(out: &mut Java, model: &Model) {
    let mut doc = vec!["Parameterized constructor".to_string()];
    doc.extend(
        model
            .fields
            .iter()
            .map(|field| format!("@param {} {}", field.name, field.description)),
    );
    out.doc(1, &doc);

    let params = model
        .fields
        .iter()
        .map(|field| format!("{} {}", field.ty.name(), field.name))
        .collect::<Vec<_>>()
        .join(", ");

    out.line(1, format!("public {}({params}) {{", model.name));
    for field in &model.fields {
        out.line(2, format!("this.{0} = {0};", field.name));
    }
    out.line(1, "}");
    out.blank();
}

fn accessors(out: &mut Java, field: &ModelField) {
    let name = &field.name;
    let ty = field.ty.name();
    let suffix = name.upper_camel_case();

    out.doc(1, &[format!("Get {name}"), format!("@return {ty}")]);
    out.line(1, format!("public {ty} get{suffix}() {{"));
    out.line(2, format!("return {name};"));
    out.line(1, "}");
    out.blank();

    out.doc(1, &[format!("Set {name}"), format!("@param {name} {ty}")]);
    out.line(1, format!("public void set{suffix}({ty} {name}) {{"));
    out.line(2, format!("this.{name} = {name};"));
    out.line(1, "}");
    out.blank();
}

fn to_string(out: &mut Java, model: &Model) {
    out.doc(
        1,
        &["String representation of the object".to_string(), "@return String".to_string()],
    );
    out.line(1, "@Override");
    out.line(1, "public String toString() {");

    if model.is_empty() {
        out.line(2, format!("return \"{}{{}}\";", model.name));
    } else {
        let parts = model
            .fields
            .iter()
            .map(|field| format!("\"{0}=\" + {0}", field.name))
            .collect::<Vec<_>>()
            .join(" + \", \" + ");
        out.line(2, format!("return \"{}{{\" + {parts} + \"}}\";", model.name));
    }

    out.line(1, "}");
    out.blank();
}

fn equals(out: &mut Java, model: &Model) {
    out.doc(
        1,
        &[
            "Check equality with another object".to_string(),
            "@param obj Object to compare".to_string(),
            "@return boolean".to_string(),
        ],
    );
    out.line(1, "@Override");
    out.line(1, "public boolean equals(Object obj) {");
    out.line(2, "if (this == obj) return true;");
    out.line(2, "if (obj == null || getClass() != obj.getClass()) return false;");
    out.line(2, format!("{0} that = ({0}) obj;", model.name));

    if model.is_empty() {
        out.line(2, "return true;");
    } else {
        let conditions = model
            .fields
            .iter()
            .map(|field| format!("java.util.Objects.equals({0}, that.{0})", field.name))
            .collect::<Vec<_>>()
            .join(" && ");
        out.line(2, format!("return {conditions};"));
    }

    out.line(1, "}");
    out.blank();
}

fn hash_code(out: &mut Java, model: &Model) {
    out.doc(1, &["Generate hash code".to_string(), "@return int".to_string()]);
    out.line(1, "@Override");
    out.line(1, "public int hashCode() {");

    if model.is_empty() {
        out.line(2, "return 0;");
    } else {
        let names = model
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.line(2, format!("return java.util.Objects.hash({names});"));
    }

    out.line(1, "}");
    out.blank();
}

/// Escapes text for use inside a Java string literal.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[derive(Default)]
struct Java {
    buf: String,
}

impl Java {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn doc(&mut self, depth: usize, lines: &[String]) {
        self.line(depth, "/**");
        for line in lines {
            // A stray `*/` in schema text would end the comment early
            self.line(depth, format!(" * {}", line.replace("*/", "* /")));
        }
        self.line(depth, " */");
    }

    fn finish(self) -> String {
        self.buf
    }
}
