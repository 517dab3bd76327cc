//! Must-satisfy factories
//!
//! Two declaration sources feed the same composite facet. The first one to
//! resolve any rule installs the facet; the second appends to it.

use std::sync::Arc;

use super::PROPERTIES;
use crate::domain::facets::{MustSatisfySpecificationFacet, RuleSource};
use crate::domain::ports::Specification;
use crate::domain::services::{FacetFactory, FacetInstaller, ProcessRequest};
use crate::domain::value_objects::{Annotation, AnnotationKind, FeatureType};

/// Rules from a standalone `must-satisfy` annotation
pub struct MustSatisfyAnnotationFactory;

impl FacetFactory for MustSatisfyAnnotationFactory {
    fn name(&self) -> &'static str {
        "must-satisfy-annotation"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        PROPERTIES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        Some(AnnotationKind::MustSatisfy)
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        if let Some(Annotation::MustSatisfy { specifications }) = request.annotation {
            install_rules(
                request,
                installer,
                specifications,
                RuleSource::MustSatisfyAnnotation,
            );
        }
    }
}

/// Rules from the `must_satisfy` list of a `property` annotation
pub struct PropertyMustSatisfyFactory;

impl FacetFactory for PropertyMustSatisfyFactory {
    fn name(&self) -> &'static str {
        "property-must-satisfy"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        PROPERTIES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        Some(AnnotationKind::Property)
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        if let Some(Annotation::Property { must_satisfy }) = request.annotation {
            install_rules(
                request,
                installer,
                must_satisfy,
                RuleSource::PropertyAnnotation,
            );
        }
    }
}

/// Instantiate what resolves, skip the rest, install nothing if none did
fn install_rules(
    request: &ProcessRequest<'_>,
    installer: &mut FacetInstaller<'_>,
    references: &[String],
    source: RuleSource,
) {
    let mut specifications: Vec<Arc<dyn Specification>> = Vec::new();
    for reference in references {
        match request.services.specifications.instantiate_str(reference) {
            Ok(specification) => specifications.push(specification),
            Err(e) => installer.diagnostic(format!("rule skipped: {}", e)),
        }
    }
    if specifications.is_empty() {
        return;
    }

    let facet = match installer.holder().lookup::<MustSatisfySpecificationFacet>() {
        Some(existing) => existing.merged(specifications, source),
        None => match MustSatisfySpecificationFacet::new(
            Arc::clone(request.feature),
            specifications,
            source,
        ) {
            Some(facet) => facet,
            None => return,
        },
    };
    installer.install(Arc::new(facet));
}
