//! Value semantics facet - how a property's value is persisted

use std::sync::Arc;

use serde::Serialize;

use super::{Facet, SingleValueFacet};
use crate::domain::ports::{FieldMapping, FieldMappingFactory};
use crate::domain::value_objects::Identifier;

/// Where the semantics name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticsSource {
    /// The property's declared value type
    ValueType,
    /// A `value` annotation
    Annotation,
}

#[derive(Debug)]
pub struct ValueSemanticsFacet {
    feature: Arc<Identifier>,
    semantics: String,
    source: SemanticsSource,
    factory: Arc<dyn FieldMappingFactory>,
}

impl ValueSemanticsFacet {
    pub fn new(
        feature: Arc<Identifier>,
        semantics: impl Into<String>,
        source: SemanticsSource,
        factory: Arc<dyn FieldMappingFactory>,
    ) -> Self {
        Self {
            feature,
            semantics: semantics.into(),
            source,
            factory,
        }
    }

    pub fn semantics(&self) -> &str {
        &self.semantics
    }

    pub fn source(&self) -> SemanticsSource {
        self.source
    }

    /// A fresh mapper for this facet's feature
    pub fn field_mapping(&self) -> Box<dyn FieldMapping> {
        self.factory.create_field_mapping(Arc::clone(&self.feature))
    }
}

impl Facet for ValueSemanticsFacet {
    fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    fn describe(&self) -> String {
        format!("value semantics '{}'", self.semantics)
    }
}

impl SingleValueFacet<String> for ValueSemanticsFacet {
    fn value(&self) -> &String {
        &self.semantics
    }
}
