//! Missing Value Policy
//!
//! What a field mapper does when a row lacks one of its columns, or when only
//! some columns of a multi-column value are NULL. A value whose columns are
//! all NULL always reads back as "no value" regardless of policy, since that
//! is exactly what writing "no value" stores.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// Reconstruct "no value"
    Null,
    /// Raise a mapping error (default)
    #[default]
    Error,
}
