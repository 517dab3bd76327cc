//! Domain Entities
//!
//! - `FeatureDescriptor` - a declared feature before facets are attached
//! - `FacetHolder` - capability registry of one feature
//! - `DomainObject` - an instance property facets act on
//! - `Metamodel` - the built model of every class

mod domain_object;
mod facet_holder;
mod feature_descriptor;
mod metamodel;

pub use domain_object::DomainObject;
pub use facet_holder::{FacetHolder, InstallOutcome, Installation};
pub use feature_descriptor::FeatureDescriptor;
pub use metamodel::{ClassModel, FeatureModel, Metamodel};
