//! Declared metadata
//!
//! Annotations are a closed set of tagged variants. Factories declare which
//! kind they consume instead of inspecting metadata generically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::policies::WrapperPolicy;

/// A single piece of declared metadata on a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Annotation {
    /// Grouped property settings
    Property {
        #[serde(default)]
        must_satisfy: Vec<String>,
    },

    /// Standalone list of rules a value must satisfy
    MustSatisfy {
        #[serde(default)]
        specifications: Vec<String>,
    },

    /// Post a property-changed event when the property is set or cleared
    PostsPropertyChangedEvent {
        #[serde(default = "default_event_kind")]
        event: String,
        #[serde(default)]
        policy: Option<WrapperPolicy>,
    },

    /// Explicit display name
    Named { value: String },

    /// Value semantics used to persist the property
    Value { semantics: String },
}

fn default_event_kind() -> String {
    DEFAULT_PROPERTY_CHANGED_EVENT.to_string()
}

/// Event kind posted when none is declared
pub const DEFAULT_PROPERTY_CHANGED_EVENT: &str = "PropertyChangedEvent.Default";

impl Annotation {
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Property { .. } => AnnotationKind::Property,
            Annotation::MustSatisfy { .. } => AnnotationKind::MustSatisfy,
            Annotation::PostsPropertyChangedEvent { .. } => {
                AnnotationKind::PostsPropertyChangedEvent
            }
            Annotation::Named { .. } => AnnotationKind::Named,
            Annotation::Value { .. } => AnnotationKind::Value,
        }
    }
}

/// Discriminant of [`Annotation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Property,
    MustSatisfy,
    PostsPropertyChangedEvent,
    Named,
    Value,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnnotationKind::Property => "property",
            AnnotationKind::MustSatisfy => "must-satisfy",
            AnnotationKind::PostsPropertyChangedEvent => "posts-property-changed-event",
            AnnotationKind::Named => "named",
            AnnotationKind::Value => "value",
        };
        f.write_str(name)
    }
}

/// The metadata view of one feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclaredMetadata {
    annotations: Vec<Annotation>,
}

impl DeclaredMetadata {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }

    /// First annotation of the given kind, if declared
    pub fn find(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind() == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

impl From<Vec<Annotation>> for DeclaredMetadata {
    fn from(annotations: Vec<Annotation>) -> Self {
        Self::new(annotations)
    }
}
