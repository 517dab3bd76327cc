//! Ordered factory pipeline
//!
//! Order is fixed at construction. Each feature's holder is threaded through
//! every applicable factory in turn; a later factory sees everything earlier
//! ones installed.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use super::factories::{
    MustSatisfyAnnotationFactory, NamedAnnotationFactory, NamedInferredFactory,
    PostsPropertyChangedEventFactory, PropertyAccessorFactory, PropertyMustSatisfyFactory,
    ValueSemanticsFactory,
};
use super::facet_factory::{FacetFactory, FacetInstaller, FactoryServices, ProcessRequest};
use crate::domain::entities::{FacetHolder, FeatureDescriptor, Installation};
use crate::domain::value_objects::{BuildDiagnostic, Identifier};

pub struct FacetFactoryChain {
    factories: Vec<Arc<dyn FacetFactory>>,
    disabled: BTreeSet<String>,
}

impl FacetFactoryChain {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            disabled: BTreeSet::new(),
        }
    }

    /// The built-in factories in their default order
    pub fn with_defaults() -> Self {
        Self::new()
            .with_factory(Arc::new(NamedInferredFactory))
            .with_factory(Arc::new(PropertyAccessorFactory))
            .with_factory(Arc::new(MustSatisfyAnnotationFactory))
            .with_factory(Arc::new(PropertyMustSatisfyFactory))
            .with_factory(Arc::new(NamedAnnotationFactory))
            .with_factory(Arc::new(PostsPropertyChangedEventFactory))
            .with_factory(Arc::new(ValueSemanticsFactory))
    }

    /// Append a factory; it runs after all registered so far
    pub fn with_factory(mut self, factory: Arc<dyn FacetFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// Skip the named factories; unknown names are ignored
    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Names of all registered factories, in run order
    pub fn factory_names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    /// Run every enabled, applicable factory against one feature
    pub fn process(
        &self,
        descriptor: &FeatureDescriptor,
        feature: &Arc<Identifier>,
        services: &FactoryServices,
        holder: &mut FacetHolder,
        audit: &mut Vec<Installation>,
        diagnostics: &mut Vec<BuildDiagnostic>,
    ) {
        for factory in &self.factories {
            if !factory.applies_to(feature.feature_type()) || !self.is_enabled(factory.name()) {
                continue;
            }
            let request = ProcessRequest {
                descriptor,
                feature,
                annotation: factory
                    .consumes()
                    .and_then(|kind| descriptor.metadata.find(kind)),
                services,
            };
            debug!(factory = factory.name(), feature = %feature, "running factory");
            let mut installer = FacetInstaller::new(factory.name(), holder, audit, diagnostics);
            factory.process(&request, &mut installer);
        }
    }
}

impl Default for FacetFactoryChain {
    fn default() -> Self {
        Self::with_defaults()
    }
}
