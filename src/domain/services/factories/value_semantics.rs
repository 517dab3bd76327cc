use std::sync::Arc;

use tracing::debug;

use super::PROPERTIES;
use crate::domain::facets::{SemanticsSource, ValueSemanticsFacet};
use crate::domain::services::{FacetFactory, FacetInstaller, ProcessRequest};
use crate::domain::value_objects::{Annotation, AnnotationKind, FeatureType};

/// Attaches the field mapping for a property's value semantics
///
/// A `value` annotation wins over the declared value type.
pub struct ValueSemanticsFactory;

impl FacetFactory for ValueSemanticsFactory {
    fn name(&self) -> &'static str {
        "value-semantics"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        PROPERTIES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        Some(AnnotationKind::Value)
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        let (semantics, source) = match (request.annotation, &request.descriptor.value_type) {
            (Some(Annotation::Value { semantics }), _) => {
                (semantics.as_str(), SemanticsSource::Annotation)
            }
            (_, Some(value_type)) => (value_type.as_str(), SemanticsSource::ValueType),
            _ => return,
        };

        let Some(factory) = request.services.field_mappings.resolve(semantics) else {
            match source {
                SemanticsSource::Annotation => {
                    installer.diagnostic(format!("unknown value semantics '{}'", semantics))
                }
                SemanticsSource::ValueType => debug!(
                    feature = %request.feature,
                    value_type = semantics,
                    "no field mapping for value type"
                ),
            }
            return;
        };

        installer.install(Arc::new(ValueSemanticsFacet::new(
            Arc::clone(request.feature),
            semantics,
            source,
            factory,
        )));
    }
}
