use std::sync::Arc;

use super::PROPERTIES;
use crate::domain::facets::PropertyAccessorFacet;
use crate::domain::services::{FacetFactory, FacetInstaller, ProcessRequest};
use crate::domain::value_objects::{AnnotationKind, FeatureType};

/// Default setter and clearer for every property
pub struct PropertyAccessorFactory;

impl FacetFactory for PropertyAccessorFactory {
    fn name(&self) -> &'static str {
        "property-accessor"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        PROPERTIES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        None
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        installer.install_multi(Arc::new(PropertyAccessorFacet::new(Arc::clone(request.feature))));
    }
}
