//! Columns Use Case
//!
//! Column layout of every property that has value semantics.

use serde::Serialize;

use crate::domain::entities::Metamodel;
use crate::domain::facets::{SemanticsSource, ValueSemanticsFacet};
use crate::domain::ports::ColumnDefinition;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureColumns {
    pub feature: String,
    pub semantics: String,
    pub source: SemanticsSource,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnsReport {
    pub features: Vec<FeatureColumns>,
}

impl ColumnsReport {
    pub fn from_metamodel(model: &Metamodel) -> Self {
        let features = model
            .features()
            .filter_map(|feature| {
                let facet = feature.facet::<ValueSemanticsFacet>()?;
                Some(FeatureColumns {
                    feature: feature.identifier().full_identity_string().to_string(),
                    semantics: facet.semantics().to_string(),
                    source: facet.source(),
                    columns: facet.field_mapping().columns(),
                })
            })
            .collect();
        Self { features }
    }

    pub fn column_count(&self) -> usize {
        self.features.iter().map(|f| f.columns.len()).sum()
    }
}
