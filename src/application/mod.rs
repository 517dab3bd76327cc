//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildMetamodelUseCase` - Load declarations and build the metamodel
//! - `InspectReport` - Features, facets, installation audit and diagnostics
//! - `ColumnsReport` - Column layout of every mapped property
//! - `validate_candidate` - Run a feature's rules against one value

pub mod build;
pub mod columns;
pub mod inspect;
pub mod validate;

pub use build::BuildMetamodelUseCase;
pub use columns::{ColumnsReport, FeatureColumns};
pub use inspect::{FacetEntry, FeatureEntry, InspectReport};
pub use validate::{validate_candidate, ValidationReport};
