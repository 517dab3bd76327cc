//! Build diagnostic value object.

use std::fmt;

use serde::Serialize;

/// Non-fatal problem recorded while facets were installed.
///
/// A diagnostic never stops the build; it explains why a facet that the
/// metadata asked for is missing or reduced (e.g. a rule that could not be
/// instantiated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDiagnostic {
    /// Canonical identity of the feature being built
    pub feature: String,
    /// Name of the factory that recorded it
    pub factory: &'static str,
    pub message: String,
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.feature, self.factory, self.message)
    }
}
