//! Common test utilities for metafacet integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated directories plus a runner for the CLI binary
//! - Fixtures: Reusable model declarations
//! - Builders: A metamodel builder wired with the built-in registries

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

use std::sync::Arc;

use metafacet::config::MappingConfig;
use metafacet::domain::ports::EventBusService;
use metafacet::domain::services::{FacetFactoryChain, FactoryServices, MetamodelBuilder};
use metafacet::infrastructure::{FieldMappingRegistry, SpecificationRegistry};

/// Built-in rules and default mappers
pub fn services() -> FactoryServices {
    FactoryServices::new(
        Arc::new(SpecificationRegistry::with_builtins()),
        Arc::new(FieldMappingRegistry::with_defaults(&MappingConfig::default())),
    )
}

/// Default chain over [`services`]
pub fn builder() -> MetamodelBuilder {
    MetamodelBuilder::new(FacetFactoryChain::with_defaults(), services())
}

/// Default chain posting to `bus`
pub fn builder_with_bus(bus: Arc<dyn EventBusService>) -> MetamodelBuilder {
    MetamodelBuilder::new(
        FacetFactoryChain::with_defaults(),
        services().with_event_bus(bus),
    )
}
