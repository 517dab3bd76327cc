//! Domain Layer
//!
//! The metamodel itself: identities, facets, holders and the factory chain
//! that attaches facets to features.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Identifier, Value, Annotation)
//! - `facets/` - Capability traits and the facets implementing them
//! - `entities/` - FacetHolder, FeatureDescriptor, Metamodel
//! - `services/` - Facet factories, the chain, the builder
//! - `policies/` - WrapperPolicy, MissingValuePolicy
//! - `ports/` - Interfaces for rules, field mappings and the event bus
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Declarations are loaded by the infrastructure layer
//! 2. **Build once, read many** - A built `Metamodel` is immutable and `Send + Sync`
//! 3. **Ports & Adapters** - Rule catalogs, mappers and event buses sit behind traits

pub mod entities;
pub mod facets;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
