//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod annotation;
mod build_diagnostic;
mod identifier;
mod money;
mod natural_name;
mod specification_ref;
mod value;

pub use annotation::{
    Annotation, AnnotationKind, DeclaredMetadata, DEFAULT_PROPERTY_CHANGED_EVENT,
};
pub use build_diagnostic::BuildDiagnostic;
pub use identifier::{Depth, FeatureType, Identifier};
pub use money::Money;
pub use natural_name::natural_name;
pub use specification_ref::SpecificationRef;
pub use value::Value;
