//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::BuildMetamodelUseCase;
use crate::config::{Config, EventBusKind};
use crate::domain::ports::{EventBusService, NoopEventBus};
use crate::domain::services::{FacetFactoryChain, FactoryServices, MetamodelBuilder};
use crate::infrastructure::{
    FieldMappingRegistry, FsDeclarationRepository, SpecificationRegistry, TracingEventBus,
};

/// Type alias for the concrete BuildMetamodelUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildMetamodelUseCase<FsDeclarationRepository>;

/// Event bus selected by configuration
pub fn create_event_bus(kind: EventBusKind) -> Arc<dyn EventBusService> {
    match kind {
        EventBusKind::None => Arc::new(NoopEventBus),
        EventBusKind::Log => Arc::new(TracingEventBus),
    }
}

/// Built-in rules, configured mappers, configured bus and default policy
pub fn create_factory_services(config: &Config) -> FactoryServices {
    FactoryServices::new(
        Arc::new(SpecificationRegistry::with_builtins()),
        Arc::new(FieldMappingRegistry::with_defaults(&config.mapping)),
    )
    .with_event_bus(create_event_bus(config.events.bus))
    .with_default_wrapper_policy(config.events.default_policy)
}

/// Default chain minus the factories disabled in configuration
pub fn create_builder(config: &Config) -> MetamodelBuilder {
    let chain = FacetFactoryChain::with_defaults()
        .with_disabled(config.factories.disabled.iter().cloned());
    MetamodelBuilder::new(chain, create_factory_services(config))
}

/// Create a build use case reading declaration files from disk
///
/// This is the main entry point for the CLI commands.
pub fn create_build_use_case(config: &Config) -> ConcreteBuildUseCase {
    BuildMetamodelUseCase::new(FsDeclarationRepository::new(), create_builder(config))
}
