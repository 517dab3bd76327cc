//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure values consulted by facets and field mappers.

mod missing_value_policy;
mod wrapper_policy;

pub use missing_value_policy::MissingValuePolicy;
pub use wrapper_policy::WrapperPolicy;
