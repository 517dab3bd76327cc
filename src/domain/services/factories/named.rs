use std::sync::Arc;

use super::ALL_FEATURES;
use crate::domain::facets::{NameSource, NamedFacet};
use crate::domain::services::{FacetFactory, FacetInstaller, ProcessRequest};
use crate::domain::value_objects::{natural_name, Annotation, AnnotationKind, FeatureType};

/// Names every feature after its natural name
pub struct NamedInferredFactory;

impl FacetFactory for NamedInferredFactory {
    fn name(&self) -> &'static str {
        "named-inferred"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        ALL_FEATURES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        None
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        let feature = request.feature;
        let name = if feature.is_class() {
            let class_name = feature.class_name();
            let simple = class_name.rsplit('.').next().unwrap_or(class_name);
            natural_name(simple)
        } else {
            feature.member_natural_name()
        };
        installer.install(Arc::new(NamedFacet::new(
            Arc::clone(feature),
            name,
            NameSource::Inferred,
        )));
    }
}

/// Replaces the inferred name with a declared one
pub struct NamedAnnotationFactory;

impl FacetFactory for NamedAnnotationFactory {
    fn name(&self) -> &'static str {
        "named-annotation"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        ALL_FEATURES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        Some(AnnotationKind::Named)
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        let Some(Annotation::Named { value }) = request.annotation else {
            return;
        };
        if value.trim().is_empty() {
            installer.diagnostic("blank name ignored");
            return;
        }
        installer.install(Arc::new(NamedFacet::new(
            Arc::clone(request.feature),
            value.trim(),
            NameSource::Annotation,
        )));
    }
}
