//! Scenario: property changes post events
//!
//! The event factory wraps the accessor installed earlier in the chain.
//! Callers keep asking for the setter capability; they get the wrapper.

use std::sync::Arc;

use metafacet::domain::entities::{DomainObject, FeatureDescriptor};
use metafacet::domain::facets::{
    PostsPropertyChangedEventFacet, PropertyClearFacet, PropertySetterFacet,
};
use metafacet::domain::policies::WrapperPolicy;
use metafacet::domain::value_objects::{Annotation, Value};
use metafacet::infrastructure::RecordingEventBus;

use crate::common::*;

fn status(policy: Option<WrapperPolicy>) -> FeatureDescriptor {
    FeatureDescriptor::property("Order", "status").with_annotation(
        Annotation::PostsPropertyChangedEvent {
            event: "OrderStatusChanged".into(),
            policy,
        },
    )
}

/// SCENARIO: set then clear through the setter capability
#[test]
fn scenario_set_and_clear_post_old_and_new_values() {
    let bus = Arc::new(RecordingEventBus::new());
    let model = builder_with_bus(bus.clone()).build([status(None)]);
    let feature = model.member("Order", "status").unwrap();

    let setter = feature.facet::<dyn PropertySetterFacet>().unwrap();
    let clearer = feature.facet::<dyn PropertyClearFacet>().unwrap();
    let mut order = DomainObject::new("Order").with_property("status", "new");

    setter.set_property(&mut order, Value::from("paid"));
    clearer.clear_property(&mut order);

    assert!(order.get("status").is_none());
    let events = bus.take();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].kind, "OrderStatusChanged");
    assert_eq!(events[0].feature.canonical_string(), "Order#status()");
    assert_eq!(events[0].old_value, Some(Value::from("new")));
    assert_eq!(events[0].new_value, Some(Value::from("paid")));

    assert_eq!(events[1].old_value, Some(Value::from("paid")));
    assert_eq!(events[1].new_value, None);
}

/// SCENARIO: the posting facet is reachable under its own capability too
#[test]
fn scenario_wrapper_answers_every_capability() {
    let bus = Arc::new(RecordingEventBus::new());
    let model = builder_with_bus(bus).build([status(Some(WrapperPolicy::OnlyOnChange))]);
    let feature = model.member("Order", "status").unwrap();

    let posting = feature
        .facet::<dyn PostsPropertyChangedEventFacet>()
        .unwrap();
    assert_eq!(posting.event_kind(), "OrderStatusChanged");
    assert_eq!(posting.wrapper_policy(), WrapperPolicy::OnlyOnChange);

    let factories: Vec<&str> = feature
        .installations()
        .iter()
        .filter(|i| i.factory == "posts-property-changed-event")
        .map(|i| i.factory)
        .collect();
    assert_eq!(factories.len(), 4);
}

/// SCENARIO: `only-on-change` skips writes of an identical value
#[test]
fn scenario_only_on_change_skips_identical_writes() {
    let bus = Arc::new(RecordingEventBus::new());
    let model = builder_with_bus(bus.clone()).build([status(Some(WrapperPolicy::OnlyOnChange))]);
    let setter = model
        .member("Order", "status")
        .unwrap()
        .facet::<dyn PropertySetterFacet>()
        .unwrap();

    let mut order = DomainObject::new("Order");
    setter.set_property(&mut order, Value::from("paid"));
    setter.set_property(&mut order, Value::from("paid"));

    assert_eq!(bus.len(), 1);
}

/// SCENARIO: the default policy posts every write
#[test]
fn scenario_default_policy_posts_identical_writes() {
    let bus = Arc::new(RecordingEventBus::new());
    let model = builder_with_bus(bus.clone()).build([status(None)]);
    let setter = model
        .member("Order", "status")
        .unwrap()
        .facet::<dyn PropertySetterFacet>()
        .unwrap();

    let mut order = DomainObject::new("Order");
    setter.set_property(&mut order, Value::from("paid"));
    setter.set_property(&mut order, Value::from("paid"));

    assert_eq!(bus.len(), 2);
}
