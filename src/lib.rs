//! metafacet - domain-object metamodel engine
//!
//! Every class, property and action of a domain model gets a stable
//! identity and a holder of capability facets. An ordered chain of facet
//! factories reads the declared metadata once and installs the facets;
//! afterwards consumers (validation, persistence, event posting) ask a
//! feature for a capability instead of inspecting the class again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{
    ClassModel, DomainObject, FacetHolder, FeatureDescriptor, FeatureModel, Metamodel,
};
pub use domain::facets::{Facet, FacetType, MustSatisfySpecificationFacet};
pub use domain::services::{FacetFactory, FacetFactoryChain, FactoryServices, MetamodelBuilder};
pub use domain::value_objects::{Annotation, FeatureType, Identifier, Money, Value};
pub use error::{MetamodelError, MetamodelResult};
pub use infrastructure::{load_declarations, FieldMappingRegistry, SpecificationRegistry};
