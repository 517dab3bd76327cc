//! FeatureDescriptor entity - a discovered feature before facets are attached

use crate::domain::value_objects::{Annotation, DeclaredMetadata, FeatureType, Identifier};

/// One declared class, property or action with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDescriptor {
    pub class_name: String,
    pub member_name: String,
    pub feature_type: FeatureType,
    /// Parameter type names, actions only
    pub parameter_types: Vec<String>,
    /// Declared value type of a property (e.g. `money`, `text`)
    pub value_type: Option<String>,
    pub metadata: DeclaredMetadata,
}

impl FeatureDescriptor {
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            member_name: String::new(),
            feature_type: FeatureType::Class,
            parameter_types: Vec::new(),
            value_type: None,
            metadata: DeclaredMetadata::default(),
        }
    }

    pub fn property(class_name: impl Into<String>, member_name: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            feature_type: FeatureType::PropertyOrCollection,
            ..Self::class(class_name)
        }
    }

    pub fn action<I, S>(
        class_name: impl Into<String>,
        member_name: impl Into<String>,
        parameter_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            member_name: member_name.into(),
            feature_type: FeatureType::Action,
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
            ..Self::class(class_name)
        }
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        let mut annotations: Vec<Annotation> = self.metadata.iter().cloned().collect();
        annotations.push(annotation);
        self.metadata = DeclaredMetadata::new(annotations);
        self
    }

    /// Identity of the described feature
    pub fn identifier(&self) -> Identifier {
        match self.feature_type {
            FeatureType::Class => Identifier::class_identifier(self.class_name.as_str()),
            FeatureType::PropertyOrCollection => Identifier::property_or_collection_identifier(
                self.class_name.as_str(),
                self.member_name.as_str(),
            ),
            FeatureType::Action => Identifier::action_identifier(
                self.class_name.as_str(),
                self.member_name.as_str(),
                self.parameter_types.iter().map(String::as_str),
            ),
        }
    }
}
