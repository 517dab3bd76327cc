//! Scenario: must-satisfy rules from several declarations
//!
//! A property may carry rules on a standalone `must-satisfy` annotation and
//! on its `property` annotation. Both feed one composite facet; a source
//! that declares nothing contributes nothing.

use metafacet::domain::entities::FeatureDescriptor;
use metafacet::domain::facets::{MustSatisfySpecificationFacet, RuleSource};
use metafacet::domain::value_objects::{Annotation, Value};

use crate::common::*;

/// SCENARIO: one source declares a rule, the other source is absent
#[test]
fn scenario_single_present_source_yields_one_rule() {
    let model = builder().build([FeatureDescriptor::property("Customer", "firstName")
        .with_annotation(Annotation::MustSatisfy {
            specifications: vec!["MinLength(2)".into()],
        })]);

    let first_name = model.member("Customer", "firstName").unwrap();
    let facet = first_name
        .facet::<MustSatisfySpecificationFacet>()
        .expect("composite facet installed");
    assert_eq!(facet.specifications().len(), 1);
    assert_eq!(facet.sources(), [RuleSource::MustSatisfyAnnotation]);

    let rejection = first_name.validate(&Value::from("J")).expect("rejected");
    assert_eq!(rejection.reasons().len(), 1);
    assert!(first_name.validate(&Value::from("Jo")).is_none());
}

/// SCENARIO: both sources declare rules; they run in chain order
#[test]
fn scenario_both_sources_merge_in_chain_order() {
    let model = builder().build([FeatureDescriptor::property("Customer", "code")
        .with_annotation(Annotation::Property {
            must_satisfy: vec!["MaxLength(4)".into()],
        })
        .with_annotation(Annotation::MustSatisfy {
            specifications: vec!["NotBlank".into()],
        })]);

    let code = model.member("Customer", "code").unwrap();
    let facet = code.facet::<MustSatisfySpecificationFacet>().unwrap();
    let rules: Vec<String> = facet.specifications().iter().map(|s| s.describe()).collect();
    assert_eq!(rules, ["NotBlank", "MaxLength(4)"]);
    assert_eq!(
        facet.sources(),
        [RuleSource::MustSatisfyAnnotation, RuleSource::PropertyAnnotation]
    );
}

/// SCENARIO: rules 1 and 3 fail, rule 2 passes; both reasons, in order
#[test]
fn scenario_every_failing_rule_is_reported() {
    let model = builder().build([FeatureDescriptor::property("Customer", "nickname")
        .with_annotation(Annotation::MustSatisfy {
            specifications: vec![
                "MinLength(5)".into(),
                "NotBlank".into(),
                "MaxLength(2)".into(),
            ],
        })]);

    let nickname = model.member("Customer", "nickname").unwrap();
    let rejection = nickname.validate(&Value::from("abc")).unwrap();
    assert_eq!(
        rejection.reasons(),
        [
            "must be at least 5 characters long (was 3)",
            "must be at most 2 characters long (was 3)",
        ]
    );
}

/// SCENARIO: every declared rule fails to instantiate; no facet at all
#[test]
fn scenario_no_resolvable_rule_means_no_constraint() {
    let model = builder().build([FeatureDescriptor::property("Customer", "email")
        .with_annotation(Annotation::MustSatisfy {
            specifications: vec!["IsEmail".into(), "MaxLength(ten)".into()],
        })]);

    let email = model.member("Customer", "email").unwrap();
    assert!(!email.holder().contains::<MustSatisfySpecificationFacet>());
    assert!(email.validate(&Value::from("")).is_none());

    let messages: Vec<&str> = model
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        [
            "rule skipped: unknown specification 'IsEmail'",
            "rule skipped: invalid arguments for 'MaxLength': expected a length, got 'ten'",
        ]
    );
}
