//! Scenario: one built metamodel read from many threads

use std::sync::Arc;
use std::thread;

use metafacet::domain::entities::{FeatureDescriptor, Metamodel};
use metafacet::domain::facets::MustSatisfySpecificationFacet;
use metafacet::domain::value_objects::{Annotation, Value};

use crate::common::*;

fn assert_send_sync<T: Send + Sync>() {}

/// SCENARIO: concurrent readers see the same facets and the same verdicts
#[test]
fn scenario_concurrent_readers_share_one_model() {
    assert_send_sync::<Metamodel>();

    let model = Arc::new(builder().build([FeatureDescriptor::property("Order", "sku")
        .with_annotation(Annotation::MustSatisfy {
            specifications: vec!["NotBlank".into(), "MaxLength(4)".into()],
        })]));
    let expected = model
        .member("Order", "sku")
        .unwrap()
        .facet::<MustSatisfySpecificationFacet>()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let model = Arc::clone(&model);
            thread::spawn(move || {
                let sku = model.member("Order", "sku").unwrap();
                let facet = sku.facet::<MustSatisfySpecificationFacet>().unwrap();
                let candidate = Value::Text("x".repeat(i));
                (facet, sku.validate(&candidate).is_none())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (facet, valid) = handle.join().unwrap();
        assert!(Arc::ptr_eq(&facet, &expected));
        assert_eq!(valid, (1..=4).contains(&i), "length {}", i);
    }
}
