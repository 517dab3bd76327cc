//! Facet factory contract
//!
//! A factory inspects one feature's declared metadata and installs zero or
//! more facets through a [`FacetInstaller`]. Factories never fail a build:
//! anything they cannot honor becomes a [`BuildDiagnostic`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{FacetHolder, FeatureDescriptor, InstallOutcome, Installation};
use crate::domain::facets::{Facet, FacetType, MultiTypedFacet};
use crate::domain::policies::WrapperPolicy;
use crate::domain::ports::{
    EventBusService, FieldMappingResolver, NoopEventBus, SpecificationProvider,
};
use crate::domain::value_objects::{
    Annotation, AnnotationKind, BuildDiagnostic, FeatureType, Identifier,
};

/// Collaborators shared by every factory in a chain
#[derive(Clone)]
pub struct FactoryServices {
    pub specifications: Arc<dyn SpecificationProvider>,
    pub field_mappings: Arc<dyn FieldMappingResolver>,
    pub event_bus: Arc<dyn EventBusService>,
    /// Applied when an event annotation declares no policy
    pub default_wrapper_policy: WrapperPolicy,
}

impl FactoryServices {
    pub fn new(
        specifications: Arc<dyn SpecificationProvider>,
        field_mappings: Arc<dyn FieldMappingResolver>,
    ) -> Self {
        Self {
            specifications,
            field_mappings,
            event_bus: Arc::new(NoopEventBus),
            default_wrapper_policy: WrapperPolicy::default(),
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBusService>) -> Self {
        self.event_bus = event_bus;
        self
    }

    pub fn with_default_wrapper_policy(mut self, policy: WrapperPolicy) -> Self {
        self.default_wrapper_policy = policy;
        self
    }
}

/// What a factory gets to look at for one feature
pub struct ProcessRequest<'a> {
    pub descriptor: &'a FeatureDescriptor,
    pub feature: &'a Arc<Identifier>,
    /// The metadata of the kind the factory consumes, if declared
    pub annotation: Option<&'a Annotation>,
    pub services: &'a FactoryServices,
}

/// Produces facets for features of the types it applies to
pub trait FacetFactory: Send + Sync {
    /// Stable name used in audits, diagnostics and configuration
    fn name(&self) -> &'static str;

    fn feature_types(&self) -> &'static [FeatureType];

    /// Metadata kind this factory reads; `None` for convention factories
    fn consumes(&self) -> Option<AnnotationKind>;

    fn process(&self, request: &ProcessRequest<'_>, installer: &mut FacetInstaller<'_>);

    fn applies_to(&self, feature_type: FeatureType) -> bool {
        self.feature_types().contains(&feature_type)
    }
}

/// The only write access a factory has to a holder
///
/// Every install is recorded in the feature's audit under the factory's
/// name; problems are recorded as diagnostics.
pub struct FacetInstaller<'a> {
    factory: &'static str,
    holder: &'a mut FacetHolder,
    audit: &'a mut Vec<Installation>,
    diagnostics: &'a mut Vec<BuildDiagnostic>,
}

impl<'a> FacetInstaller<'a> {
    pub fn new(
        factory: &'static str,
        holder: &'a mut FacetHolder,
        audit: &'a mut Vec<Installation>,
        diagnostics: &'a mut Vec<BuildDiagnostic>,
    ) -> Self {
        Self {
            factory,
            holder,
            audit,
            diagnostics,
        }
    }

    pub fn factory(&self) -> &'static str {
        self.factory
    }

    /// Read what earlier factories installed
    pub fn holder(&self) -> &FacetHolder {
        &*self.holder
    }

    pub fn install<C: ?Sized + Facet>(&mut self, facet: Arc<C>) {
        let facet_type = FacetType::of::<C>();
        let outcome = if self.holder.install(facet) {
            InstallOutcome::Replaced
        } else {
            InstallOutcome::Installed
        };
        debug!(
            factory = self.factory,
            feature = %self.holder.feature(),
            facet_type = %facet_type,
            ?outcome,
            "facet installed"
        );
        self.audit.push(Installation {
            factory: self.factory,
            facet_type,
            outcome,
        });
    }

    /// Install a facet under each of its capabilities
    pub fn install_multi<F: MultiTypedFacet>(&mut self, facet: Arc<F>) {
        let facet_types = facet.facet_types();
        facet.install_into(self);
        debug_assert!(
            facet_types.iter().all(|t| self.holder.contains_type(*t)),
            "install_into skipped a capability listed by facet_types"
        );
    }

    pub fn diagnostic(&mut self, message: impl Into<String>) {
        let diagnostic = BuildDiagnostic {
            feature: self.holder.feature().full_identity_string().to_string(),
            factory: self.factory,
            message: message.into(),
        };
        warn!(
            feature = %diagnostic.feature,
            factory = diagnostic.factory,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facets::{NameSource, NamedFacet};

    #[test]
    fn installer_records_audit_and_outcome() {
        let feature = Arc::new(Identifier::class_identifier("Order"));
        let mut holder = FacetHolder::new(feature.clone());
        let mut audit = Vec::new();
        let mut diagnostics = Vec::new();

        let mut installer = FacetInstaller::new("test", &mut holder, &mut audit, &mut diagnostics);
        installer.install(Arc::new(NamedFacet::new(
            feature.clone(),
            "Order",
            NameSource::Inferred,
        )));
        installer.install(Arc::new(NamedFacet::new(
            feature,
            "Purchase Order",
            NameSource::Annotation,
        )));
        installer.diagnostic("nothing wrong");

        assert_eq!(audit.len(), 2);
        assert_eq!(audit[0].outcome, InstallOutcome::Installed);
        assert_eq!(audit[1].outcome, InstallOutcome::Replaced);
        assert_eq!(audit[1].facet_type.name(), "NamedFacet");
        assert_eq!(diagnostics[0].to_string(), "Order [test]: nothing wrong");
    }
}
