use schemagen_cli::Cli;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std_util::prelude::*;

const SCHEMA: &str = "xpath,required/optional,data_type,model1,model2,model3,model4,notes\n\
                      /person/@id,required,integer,id,id,skip,id,primary key\n\
                      /person/name,optional,string,fullName,fullName,skip,skip,\n";

fn scratch(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("schemagen_test_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_schema(dir: &Path, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join("schema.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["schemagen", "-q"];
    argv.extend_from_slice(args);
    Cli::run_from(argv)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn gen_writes_classes_and_diagram_into_new_directory() {
    let dir = scratch("gen");
    let input = write_schema(&dir, SCHEMA);
    let out = dir.join("nested").join("out");

    assert_ok!(run(&["gen", arg(&input), arg(&out)]));

    for name in ["Model1.java", "Model2.java", "Model3.java", "Model4.java", "schema_uml.puml"] {
        assert!(out.join(name).is_file(), "missing {name}");
    }

    let model1 = fs::read_to_string(out.join("Model1.java")).unwrap();
    assert!(model1.starts_with("package com.example.models;\n"));
    assert!(model1.contains("private String name = \"fullName\";"));
    assert!(model1.contains("additional_info: notes: primary key"));

    let diagram = fs::read_to_string(out.join("schema_uml.puml")).unwrap();
    assert!(diagram.contains("Model1 ..> Model2 : references"));
    assert!(!diagram.contains("class Model3"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn gen_without_diagram() {
    let dir = scratch("gen_no_diagram");
    let input = write_schema(&dir, SCHEMA);
    let out = dir.join("out");

    assert_ok!(run(&["gen", arg(&input), arg(&out), "--no-diagram"]));

    assert!(out.join("Model4.java").is_file());
    assert!(!out.join("schema_uml.puml").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn gen_applies_filters_first() {
    let dir = scratch("gen_filters");
    let mut contents = b"\xEF\xBB\xBF".to_vec();
    contents.extend_from_slice(
        b"xpath,required/optional,data_type,model1,model2,model3,model4,notes\n\
          /a,required,string,a,a,a,a,first half\n\
          second half\n",
    );
    let input = write_schema(&dir, contents);
    let out = dir.join("out");

    assert_ok!(run(&[
        "gen",
        arg(&input),
        arg(&out),
        "--filter",
        "bom",
        "--filter",
        "lines",
    ]));

    let model1 = fs::read_to_string(out.join("Model1.java")).unwrap();
    assert!(model1.contains("notes: first half second half"), "{model1}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn config_file_sets_package_and_types() {
    let dir = scratch("config");
    let input = write_schema(
        &dir,
        "xpath,required/optional,data_type,model1,model2,model3,model4\n\
         /order/@ref,required,uuid,ref,omit,ref,ref\n",
    );
    let config = dir.join("custom.toml");
    fs::write(
        &config,
        "package = \"com.acme.orders\"\nskip_markers = [\"omit\"]\n[types]\nuuid = \"UUID\"\n",
    )
    .unwrap();
    let out = dir.join("out");

    assert_ok!(run(&["--config", arg(&config), "gen", arg(&input), arg(&out)]));

    let model1 = fs::read_to_string(out.join("Model1.java")).unwrap();
    assert!(model1.starts_with("package com.acme.orders;\n"));
    assert!(model1.contains("private UUID ref;"));

    let model2 = fs::read_to_string(out.join("Model2.java")).unwrap();
    assert!(!model2.contains("private UUID ref;"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn uml_writes_single_file() {
    let dir = scratch("uml");
    let input = write_schema(&dir, SCHEMA);
    let output = dir.join("diagrams").join("models.puml");

    assert_ok!(run(&["uml", arg(&input), arg(&output)]));

    let diagram = fs::read_to_string(&output).unwrap();
    assert!(diagram.starts_with("@startuml CSV Schema Models\n"));
    assert!(diagram.ends_with("@enduml\n"));
    assert!(!dir.join("diagrams").join("Model1.java").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fix_overwrites_input_by_default() {
    let dir = scratch("fix");
    let input = write_schema(&dir, b"\xEF\xBB\xBFxpath,notes\n/a,\"x, y\"\n");

    assert_ok!(run(&["fix", arg(&input), "--filter", "bom", "--filter", "clean"]));

    assert_eq!(fs::read_to_string(&input).unwrap(), "xpath,notes\n/a,\"x; y\"\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fix_into_separate_file() {
    let dir = scratch("fix_output");
    let input = write_schema(&dir, "xpath\n/a,first\nsecond\n");
    let output = dir.join("fixed.csv");

    assert_ok!(run(&["fix", arg(&input), arg(&output), "--filter", "lines"]));

    assert_eq!(fs::read_to_string(&output).unwrap(), "xpath\n/a,first second\n");
    assert_eq!(fs::read_to_string(&input).unwrap(), "xpath\n/a,first\nsecond\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fix_requires_a_filter() {
    let dir = scratch("fix_no_filter");
    let input = write_schema(&dir, SCHEMA);

    assert_err!(run(&["fix", arg(&input)]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn debug_accepts_broken_headers() {
    let dir = scratch("debug");
    let input = write_schema(&dir, "path,notes\n/a,x\n");

    assert_ok!(run(&["debug", arg(&input)]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_is_an_error() {
    let dir = scratch("missing");
    let err = assert_err!(run(&["gen", arg(&dir.join("nope.csv"))]));

    assert!(err.to_string().contains("input file not found"), "{err}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_columns_are_reported() {
    let dir = scratch("missing_columns");
    let input = write_schema(&dir, "xpath,data_type\n/a,int\n");
    let out = dir.join("out");

    let err = assert_err!(run(&["gen", arg(&input), arg(&out)]));
    let err = err.downcast::<schemagen_core::Error>().unwrap();

    assert!(err.is_missing_columns());
    assert!(err.to_string().contains("schema.csv"), "{err}");
    assert!(!out.exists());

    let _ = fs::remove_dir_all(&dir);
}
