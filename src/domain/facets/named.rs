//! Display name facet

use std::sync::Arc;

use serde::Serialize;

use super::{Facet, SingleValueFacet};
use crate::domain::value_objects::Identifier;

/// Where a display name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSource {
    /// Derived from the member or class name
    Inferred,
    /// Declared explicitly
    Annotation,
}

#[derive(Debug, Clone)]
pub struct NamedFacet {
    feature: Arc<Identifier>,
    name: String,
    source: NameSource,
}

impl NamedFacet {
    pub fn new(feature: Arc<Identifier>, name: impl Into<String>, source: NameSource) -> Self {
        Self {
            feature,
            name: name.into(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> NameSource {
        self.source
    }
}

impl Facet for NamedFacet {
    fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    fn describe(&self) -> String {
        match self.source {
            NameSource::Inferred => format!("named '{}' (inferred)", self.name),
            NameSource::Annotation => format!("named '{}'", self.name),
        }
    }
}

impl SingleValueFacet<String> for NamedFacet {
    fn value(&self) -> &String {
        &self.name
    }
}
