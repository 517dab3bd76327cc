//! Property setter and clear capabilities

use std::sync::Arc;

use super::{Facet, FacetType, MultiTypedFacet};
use crate::domain::entities::DomainObject;
use crate::domain::services::FacetInstaller;
use crate::domain::value_objects::{Identifier, Value};

/// Assigns a property value on a target object
pub trait PropertySetterFacet: Facet {
    fn set_property(&self, target: &mut DomainObject, value: Value);
}

/// Removes a property value from a target object
pub trait PropertyClearFacet: Facet {
    fn clear_property(&self, target: &mut DomainObject);
}

/// Direct access to the property bag entry named by the member
#[derive(Debug, Clone)]
pub struct PropertyAccessorFacet {
    feature: Arc<Identifier>,
}

impl PropertyAccessorFacet {
    pub fn new(feature: Arc<Identifier>) -> Self {
        Self { feature }
    }
}

impl Facet for PropertyAccessorFacet {
    fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    fn describe(&self) -> String {
        format!("accessor for '{}'", self.feature.member_name())
    }
}

impl PropertySetterFacet for PropertyAccessorFacet {
    fn set_property(&self, target: &mut DomainObject, value: Value) {
        target.set(self.feature.member_name(), value);
    }
}

impl PropertyClearFacet for PropertyAccessorFacet {
    fn clear_property(&self, target: &mut DomainObject) {
        target.clear(self.feature.member_name());
    }
}

impl MultiTypedFacet for PropertyAccessorFacet {
    fn facet_types(&self) -> Vec<FacetType> {
        vec![
            FacetType::of::<dyn PropertySetterFacet>(),
            FacetType::of::<dyn PropertyClearFacet>(),
        ]
    }

    fn install_into(self: Arc<Self>, installer: &mut FacetInstaller<'_>) {
        installer.install::<dyn PropertySetterFacet>(self.clone());
        installer.install::<dyn PropertyClearFacet>(self);
    }
}
