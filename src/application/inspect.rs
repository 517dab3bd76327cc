//! Inspect Use Case
//!
//! Flattens a built metamodel into a serializable report: every feature with
//! its renderings, installed facets, installation audit and the build
//! diagnostics.

use serde::Serialize;

use crate::domain::entities::{FeatureModel, Installation, Metamodel};
use crate::domain::value_objects::{BuildDiagnostic, Depth};

#[derive(Debug, Clone, Serialize)]
pub struct FacetEntry {
    pub facet_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureEntry {
    /// Canonical rendering, unique per feature
    pub identity: String,
    /// Kind-aware rendering
    pub full_identity: String,
    pub kind: String,
    pub display_name: String,
    pub value_type: Option<String>,
    pub facets: Vec<FacetEntry>,
    pub installations: Vec<Installation>,
}

impl FeatureEntry {
    fn from_feature(feature: &FeatureModel) -> Self {
        let identifier = feature.identifier();
        Self {
            identity: identifier.canonical_string().to_string(),
            full_identity: identifier.to_identity_string(Depth::ClassMemberNameParms),
            kind: identifier.feature_type().to_string(),
            display_name: feature.display_name(),
            value_type: feature.value_type().map(str::to_string),
            facets: feature
                .holder()
                .facets()
                .into_iter()
                .map(|(facet_type, facet)| FacetEntry {
                    facet_type: facet_type.name(),
                    description: facet.describe(),
                })
                .collect(),
            installations: feature.installations().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub classes: usize,
    pub features: Vec<FeatureEntry>,
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl InspectReport {
    pub fn from_metamodel(model: &Metamodel) -> Self {
        Self {
            classes: model.len(),
            features: model.features().map(FeatureEntry::from_feature).collect(),
            diagnostics: model.diagnostics().to_vec(),
        }
    }

    /// Only features whose canonical identity contains `filter`
    pub fn filtered(mut self, filter: Option<&str>) -> Self {
        if let Some(filter) = filter {
            self.features.retain(|f| f.identity.contains(filter));
        }
        self
    }
}
