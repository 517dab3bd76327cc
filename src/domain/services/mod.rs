//! Domain Services
//!
//! The facet factory contract, the built-in factories, the ordered chain
//! that runs them and the builder that turns declarations into a metamodel.
//! No I/O happens here.

mod chain;
mod facet_factory;
pub mod factories;
mod metamodel_builder;

pub use chain::FacetFactoryChain;
pub use facet_factory::{FacetFactory, FacetInstaller, FactoryServices, ProcessRequest};
pub use metamodel_builder::MetamodelBuilder;
