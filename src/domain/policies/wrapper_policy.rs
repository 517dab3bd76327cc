//! Wrapper Policy
//!
//! Decides whether a facet that wraps a property setter/clearer posts a
//! property-changed event after delegating.

use serde::{Deserialize, Serialize};

/// Event posting policy for wrapping property facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WrapperPolicy {
    /// Post after every set or clear (default)
    #[default]
    Always,
    /// Post only when the stored value actually changed
    OnlyOnChange,
}

impl WrapperPolicy {
    /// Should an event be posted for a mutation from `old` to `new`?
    pub fn should_post<T: PartialEq>(&self, old: Option<&T>, new: Option<&T>) -> bool {
        match self {
            WrapperPolicy::Always => true,
            WrapperPolicy::OnlyOnChange => old != new,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WrapperPolicy::Always => "always",
            WrapperPolicy::OnlyOnChange => "only-on-change",
        }
    }
}
