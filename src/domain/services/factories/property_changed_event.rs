use std::sync::Arc;

use super::PROPERTIES;
use crate::domain::facets::{
    PostsPropertyChangedEventFacetWrapping, PropertyClearFacet, PropertySetterFacet,
};
use crate::domain::services::{FacetFactory, FacetInstaller, ProcessRequest};
use crate::domain::value_objects::{Annotation, AnnotationKind, FeatureType};

/// Wraps the current setter and clearer with event posting
pub struct PostsPropertyChangedEventFactory;

impl FacetFactory for PostsPropertyChangedEventFactory {
    fn name(&self) -> &'static str {
        "posts-property-changed-event"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        PROPERTIES
    }

    fn consumes(&self) -> Option<AnnotationKind> {
        Some(AnnotationKind::PostsPropertyChangedEvent)
    }

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>) {
        let Some(Annotation::PostsPropertyChangedEvent { event, policy }) = request.annotation
        else {
            return;
        };

        let holder = installer.holder();
        let (setter, clearer) = match (
            holder.lookup::<dyn PropertySetterFacet>(),
            holder.lookup::<dyn PropertyClearFacet>(),
        ) {
            (Some(setter), Some(clearer)) => (setter, clearer),
            _ => {
                installer.diagnostic(format!(
                    "no setter/clearer to wrap; '{}' will not be posted",
                    event
                ));
                return;
            }
        };

        let facet = PostsPropertyChangedEventFacetWrapping::new(
            Arc::clone(request.feature),
            event.as_str(),
            policy.unwrap_or(request.services.default_wrapper_policy),
            setter,
            clearer,
            Arc::clone(&request.services.event_bus),
        );
        installer.install_multi(Arc::new(facet));
    }
}
