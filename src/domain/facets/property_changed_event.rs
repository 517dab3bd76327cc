//! Property-changed event posting
//!
//! The wrapping facet replaces the setter and clearer installed earlier for
//! the same property. It delegates to them, then posts one event per
//! mutation according to its [`WrapperPolicy`].

use std::fmt;
use std::sync::Arc;

use super::{
    Facet, FacetType, MultiTypedFacet, PropertyClearFacet, PropertySetterFacet, SingleValueFacet,
};
use crate::domain::entities::DomainObject;
use crate::domain::policies::WrapperPolicy;
use crate::domain::ports::{EventBusService, PropertyChangedEvent};
use crate::domain::services::FacetInstaller;
use crate::domain::value_objects::{Identifier, Value};

/// Answers "which event is posted for this property, and when"
pub trait PostsPropertyChangedEventFacet:
    SingleValueFacet<String> + PropertySetterFacet + PropertyClearFacet
{
    fn event_kind(&self) -> &str {
        self.value()
    }

    fn wrapper_policy(&self) -> WrapperPolicy;
}

pub struct PostsPropertyChangedEventFacetWrapping {
    feature: Arc<Identifier>,
    event_kind: String,
    policy: WrapperPolicy,
    setter: Arc<dyn PropertySetterFacet>,
    clearer: Arc<dyn PropertyClearFacet>,
    bus: Arc<dyn EventBusService>,
}

impl PostsPropertyChangedEventFacetWrapping {
    pub fn new(
        feature: Arc<Identifier>,
        event_kind: impl Into<String>,
        policy: WrapperPolicy,
        setter: Arc<dyn PropertySetterFacet>,
        clearer: Arc<dyn PropertyClearFacet>,
        bus: Arc<dyn EventBusService>,
    ) -> Self {
        Self {
            feature,
            event_kind: event_kind.into(),
            policy,
            setter,
            clearer,
            bus,
        }
    }

    /// The setter this facet delegates to
    pub fn underlying_setter(&self) -> &Arc<dyn PropertySetterFacet> {
        &self.setter
    }

    pub fn underlying_clearer(&self) -> &Arc<dyn PropertyClearFacet> {
        &self.clearer
    }

    fn current(&self, target: &DomainObject) -> Option<Value> {
        target.get(self.feature.member_name()).cloned()
    }

    fn post_if_needed(&self, old_value: Option<Value>, new_value: Option<Value>) {
        if !self.policy.should_post(old_value.as_ref(), new_value.as_ref()) {
            return;
        }
        self.bus.post(PropertyChangedEvent {
            kind: self.event_kind.clone(),
            feature: Arc::clone(&self.feature),
            old_value,
            new_value,
        });
    }
}

impl fmt::Debug for PostsPropertyChangedEventFacetWrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostsPropertyChangedEventFacetWrapping")
            .field("feature", &self.feature)
            .field("event_kind", &self.event_kind)
            .field("policy", &self.policy)
            .field("setter", &self.setter)
            .field("clearer", &self.clearer)
            .finish_non_exhaustive()
    }
}

impl Facet for PostsPropertyChangedEventFacetWrapping {
    fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    fn describe(&self) -> String {
        format!(
            "posts {} ({}), wrapping {}",
            self.event_kind,
            self.policy.display_name(),
            self.setter.describe()
        )
    }
}

impl SingleValueFacet<String> for PostsPropertyChangedEventFacetWrapping {
    fn value(&self) -> &String {
        &self.event_kind
    }
}

impl PropertySetterFacet for PostsPropertyChangedEventFacetWrapping {
    fn set_property(&self, target: &mut DomainObject, value: Value) {
        let old_value = self.current(target);
        self.setter.set_property(target, value);
        let new_value = self.current(target);
        self.post_if_needed(old_value, new_value);
    }
}

impl PropertyClearFacet for PostsPropertyChangedEventFacetWrapping {
    fn clear_property(&self, target: &mut DomainObject) {
        let old_value = self.current(target);
        self.clearer.clear_property(target);
        let new_value = self.current(target);
        self.post_if_needed(old_value, new_value);
    }
}

impl PostsPropertyChangedEventFacet for PostsPropertyChangedEventFacetWrapping {
    fn wrapper_policy(&self) -> WrapperPolicy {
        self.policy
    }
}

impl MultiTypedFacet for PostsPropertyChangedEventFacetWrapping {
    fn facet_types(&self) -> Vec<FacetType> {
        vec![
            FacetType::of::<dyn PostsPropertyChangedEventFacet>(),
            FacetType::of::<dyn PropertySetterFacet>(),
            FacetType::of::<dyn PropertyClearFacet>(),
            FacetType::of::<dyn SingleValueFacet<String>>(),
        ]
    }

    fn install_into(self: Arc<Self>, installer: &mut FacetInstaller<'_>) {
        installer.install::<dyn PostsPropertyChangedEventFacet>(self.clone());
        installer.install::<dyn PropertySetterFacet>(self.clone());
        installer.install::<dyn PropertyClearFacet>(self.clone());
        installer.install::<dyn SingleValueFacet<String>>(self);
    }
}
