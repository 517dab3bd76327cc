//! Built-in facet factories
//!
//! Listed in the order [`FacetFactoryChain::with_defaults`] runs them.
//!
//! [`FacetFactoryChain::with_defaults`]: super::FacetFactoryChain::with_defaults

mod must_satisfy;
mod named;
mod property_accessor;
mod property_changed_event;
mod value_semantics;

pub use must_satisfy::{MustSatisfyAnnotationFactory, PropertyMustSatisfyFactory};
pub use named::{NamedAnnotationFactory, NamedInferredFactory};
pub use property_accessor::PropertyAccessorFactory;
pub use property_changed_event::PostsPropertyChangedEventFactory;
pub use value_semantics::ValueSemanticsFactory;

use crate::domain::value_objects::FeatureType;

const ALL_FEATURES: &[FeatureType] = &FeatureType::ALL;
const PROPERTIES: &[FeatureType] = &[FeatureType::PropertyOrCollection];
