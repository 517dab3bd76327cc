//! Scenario: a declaration file drives the whole build

use std::sync::Arc;

use metafacet::config::{Config, FactoriesConfig};
use metafacet::domain::facets::{NamedFacet, PostsPropertyChangedEventFacet, ValueSemanticsFacet};
use metafacet::domain::value_objects::Value;
use metafacet::presentation::factory::create_build_use_case;

use crate::common::*;

/// SCENARIO: TOML declarations build the expected facets
#[test]
fn scenario_toml_model_builds_every_feature() {
    let env = TestEnv::new();
    let path = env.write_project_file("model.toml", ORDER_MODEL);

    let model = create_build_use_case(&Config::default())
        .execute(&path)
        .unwrap();

    let order = model.class("Order").unwrap();
    assert_eq!(order.members().len(), 4);
    assert_eq!(order.actions().count(), 1);
    assert!(model.diagnostics().is_empty());

    let price = model.member("Order", "price").unwrap();
    assert_eq!(
        price.facet::<ValueSemanticsFacet>().unwrap().semantics(),
        "money"
    );
    assert!(price
        .validate(&Value::parse_literal("-1.00 USD"))
        .is_some());
    assert!(price.validate(&Value::parse_literal("3.20 EUR")).is_none());

    let sku = model.member("Order", "sku").unwrap();
    assert_eq!(sku.validate(&Value::from("ab")).unwrap().reasons().len(), 1);

    let status = model.member("Order", "status").unwrap();
    assert!(status.facet::<dyn PostsPropertyChangedEventFacet>().is_some());

    let ship = model.resolve("Order#ship(Address)").unwrap();
    assert_eq!(ship.display_name(), "Ship");
}

/// SCENARIO: YAML declarations build the same shape
#[test]
fn scenario_yaml_model_builds() {
    let env = TestEnv::new();
    let path = env.write_project_file("model.yaml", ORDER_MODEL_YAML);

    let model = create_build_use_case(&Config::default())
        .execute(&path)
        .unwrap();
    let sku = model.member("Order", "sku").unwrap();
    assert!(sku.validate(&Value::from(" ")).is_some());
}

/// SCENARIO: disabling a factory in configuration removes its facets
#[test]
fn scenario_disabled_factory_contributes_nothing() {
    let env = TestEnv::new();
    let path = env.write_project_file("model.toml", ORDER_MODEL);
    let config = Config {
        factories: FactoriesConfig {
            disabled: vec!["named-inferred".into(), "value-semantics".into()],
        },
        ..Config::default()
    };

    let model: Arc<_> = create_build_use_case(&config).execute(&path).unwrap();
    let price = model.member("Order", "price").unwrap();
    assert!(price.facet::<NamedFacet>().is_none());
    assert!(price.field_mapping().is_none());
}
