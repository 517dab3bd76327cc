//! Specification port - validation rules and their instantiation
//!
//! A specification accepts or rejects a candidate value with a reason.
//! Providers turn a declared reference (`MaxLength(10)`) into a rule; a
//! failure to do so is recovered by the caller, never fatal to a build.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::value_objects::{SpecificationRef, Value};

/// A must-satisfy rule
pub trait Specification: fmt::Debug + Send + Sync {
    /// `None` when the candidate is acceptable, otherwise the rejection reason
    fn satisfies(&self, candidate: &Value) -> Option<String>;

    /// Reference the rule was built from, for reports
    fn describe(&self) -> String;
}

/// Why a declared rule could not be instantiated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    #[error("malformed specification reference '{reference}'")]
    MalformedReference { reference: String },

    #[error("unknown specification '{name}'")]
    Unknown { name: String },

    #[error("invalid arguments for '{name}': {reason}")]
    InvalidArguments { name: String, reason: String },
}

/// Instantiates rules from declared references
pub trait SpecificationProvider: Send + Sync {
    fn instantiate(&self, reference: &SpecificationRef)
        -> Result<Arc<dyn Specification>, SpecificationError>;

    /// Parse then instantiate
    fn instantiate_str(&self, reference: &str) -> Result<Arc<dyn Specification>, SpecificationError> {
        let parsed = SpecificationRef::parse(reference)?;
        self.instantiate(&parsed)
    }
}
