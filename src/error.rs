//! Error types for metafacet
//!
//! Uses `thiserror` for library errors. Validation rejections are not errors;
//! they are returned as values by the must-satisfy facet.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for metafacet operations
pub type MetamodelResult<T> = Result<T, MetamodelError>;

/// Main error type for metafacet operations
#[derive(Error, Debug)]
pub enum MetamodelError {
    /// A model declaration file could not be parsed
    #[error("invalid model declaration in {file}: {message}")]
    InvalidDeclaration { file: PathBuf, message: String },

    /// A configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field mapper received a value of a type it does not persist
    #[error("invalid value type {found} for {feature}: {mapper} expects {expected}")]
    MappingTypeMismatch {
        feature: String,
        mapper: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A column index outside `0..column_count`
    #[error("column index {index} out of range for {feature} ({count} columns)")]
    ColumnIndexOutOfRange {
        feature: String,
        index: usize,
        count: usize,
    },

    /// A row did not contain a column the mapper declared
    #[error("column '{column}' missing from row while reading {feature}")]
    MissingColumn { feature: String, column: String },

    /// Some but not all columns of a multi-column value were NULL
    #[error("incomplete value for {feature}: column '{column}' is NULL")]
    IncompleteValue { feature: String, column: String },

    /// A stored column value has the wrong physical type
    #[error("column '{column}' of {feature} holds {found}, expected {expected}")]
    StorageTypeMismatch {
        feature: String,
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A stored amount is NaN, infinite, or too large for minor units
    #[error("column '{column}' of {feature} holds unrepresentable amount {amount}")]
    AmountOutOfRange {
        feature: String,
        column: String,
        amount: f64,
    },

    /// No feature with the given identity exists in the metamodel
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    /// The feature exists but has no facet for the requested capability
    #[error("feature '{feature}' has no {capability} facet")]
    MissingCapability {
        feature: String,
        capability: &'static str,
    },
}
