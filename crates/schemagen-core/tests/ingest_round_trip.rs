use schemagen_core::ingest::Ingestor;
use schemagen_core::schema::{ModelIndex, ModelSet, DEFAULT_PACKAGE};
use schemagen_core::Tables;
use std_util::prelude::*;

const HEADER: &str = "xpath,required/optional,data_type,model1,model2,model3,model4";

fn assemble(content: &str) -> ModelSet {
    let tables = Tables::default();
    let ingested = assert_ok!(Ingestor::new(&tables).ingest(content.as_bytes()));
    ModelSet::assemble(&ingested.rows, &tables, DEFAULT_PACKAGE)
}

fn model(models: &ModelSet, index: usize) -> &schemagen_core::schema::Model {
    models.get(assert_some!(ModelIndex::new(index)))
}

#[test]
fn single_row_reaches_three_models() {
    let models = assemble(&format!("{HEADER}\n/person/@id,required,integer,id,id,skip,id\n"));

    assert_eq!(models.models().len(), 4);

    for index in [1, 2, 4] {
        let model = model(&models, index);
        assert_eq!(model.fields.len(), 1, "Model{index}");

        let field = &model.fields[0];
        assert_eq!(field.name, "id");
        assert_eq!(field.ty.to_string(), "Integer");
        assert!(field.required);
        assert_none!(field.default_value);
    }

    assert_empty!(model(&models, 3).fields);
    assert_eq!(models.non_empty().count(), 3);
}

#[test]
fn identical_markers_reach_every_model() {
    let models = assemble(&format!("{HEADER}\n/a/b,optional,string,mapped,mapped,mapped,mapped\n"));

    for model in &models {
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.fields[0].default_value.as_deref(), Some("mapped"));
        assert!(!model.fields[0].required);
    }
}

#[test]
fn blank_xpath_never_reaches_a_model() {
    let models = assemble(&format!(
        "{HEADER}\n,required,string,x,x,x,x\n  ,required,int,y,y,y,y\n/a,required,int,a,a,a,a\n"
    ));

    for model in &models {
        let xpaths: Vec<_> = model.fields.iter().map(|field| field.xpath.as_str()).collect();
        assert_eq!(xpaths, ["/a"]);
    }
    assert_eq!(models.total_rows(), 1);
}

#[test]
fn extras_become_documentation() {
    let models = assemble(&format!(
        "{HEADER},validation_rules,notes\n/order/total,required,decimal [10,2],total,,,,min:0,\n"
    ));

    let field = &model(&models, 1).fields[0];
    assert_eq!(field.ty.to_string(), "BigDecimal [10,2]");
    assert_eq!(field.extras, "validation_rules: min:0");
    assert_eq!(field.description, "Field mapped from XPath: /order/total");
}

#[test]
fn exclusion_markers_are_forgiving() {
    let models = assemble(&format!(
        "{HEADER}\n/a,required,int,Do Not Use,SKIP ,-,mapped\n"
    ));

    assert_empty!(model(&models, 1).fields);
    assert_empty!(model(&models, 2).fields);
    assert_empty!(model(&models, 3).fields);
    assert_eq!(model(&models, 4).fields.len(), 1);
}

#[test]
fn required_and_optional_counts() {
    let models = assemble(&format!(
        "{HEADER}\n/a,required,int,a,,,\n/b,Yes,int,b,,,\n/c,optional,int,c,,,\n/d,,int,d,,,\n"
    ));

    assert_eq!(models.total_rows(), 4);
    assert_eq!(models.required_rows(), 2);
    assert_eq!(models.optional_rows(), 2);
}
