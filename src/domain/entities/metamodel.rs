//! Metamodel entity - the built, read-only model of every class
//!
//! Once built, the model is immutable and shared through `Arc`; consumers
//! query holders for capabilities and never see the declarations again.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::facet_holder::{FacetHolder, Installation};
use crate::domain::facets::{
    Facet, MustSatisfySpecificationFacet, NamedFacet, Rejection, ValueSemanticsFacet,
};
use crate::domain::ports::FieldMapping;
use crate::domain::value_objects::{BuildDiagnostic, Identifier, Value};
use crate::error::{MetamodelError, MetamodelResult};

/// One feature with its installed facets and the audit of how they got there
#[derive(Debug, Clone)]
pub struct FeatureModel {
    holder: FacetHolder,
    installations: Vec<Installation>,
    value_type: Option<String>,
}

impl FeatureModel {
    pub fn new(
        holder: FacetHolder,
        installations: Vec<Installation>,
        value_type: Option<String>,
    ) -> Self {
        Self {
            holder,
            installations,
            value_type,
        }
    }

    pub fn identifier(&self) -> &Arc<Identifier> {
        self.holder.feature()
    }

    pub fn holder(&self) -> &FacetHolder {
        &self.holder
    }

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn facet<C: ?Sized + Facet>(&self) -> Option<Arc<C>> {
        self.holder.lookup::<C>()
    }

    /// Named facet if installed, natural name otherwise
    pub fn display_name(&self) -> String {
        match self.facet::<NamedFacet>() {
            Some(named) => named.name().to_string(),
            None if self.identifier().is_class() => self.identifier().class_name().to_string(),
            None => self.identifier().member_natural_name(),
        }
    }

    /// Evaluate the must-satisfy rules; a feature without rules accepts anything
    pub fn validate(&self, candidate: &Value) -> Option<Rejection> {
        self.facet::<MustSatisfySpecificationFacet>()
            .and_then(|facet| facet.validate(candidate))
    }

    pub fn field_mapping(&self) -> Option<Box<dyn FieldMapping>> {
        self.facet::<ValueSemanticsFacet>()
            .map(|facet| facet.field_mapping())
    }
}

/// A class feature and its members in declaration order
#[derive(Debug, Clone)]
pub struct ClassModel {
    feature: FeatureModel,
    members: Vec<FeatureModel>,
}

impl ClassModel {
    pub fn new(feature: FeatureModel, members: Vec<FeatureModel>) -> Self {
        Self { feature, members }
    }

    pub fn name(&self) -> &str {
        self.feature.identifier().class_name()
    }

    pub fn feature(&self) -> &FeatureModel {
        &self.feature
    }

    pub fn members(&self) -> &[FeatureModel] {
        &self.members
    }

    /// First member with this name (overloaded actions share a name)
    pub fn member(&self, member_name: &str) -> Option<&FeatureModel> {
        self.members
            .iter()
            .find(|m| m.identifier().member_name() == member_name)
    }

    pub fn properties(&self) -> impl Iterator<Item = &FeatureModel> {
        self.members
            .iter()
            .filter(|m| m.identifier().is_property_or_collection())
    }

    pub fn actions(&self) -> impl Iterator<Item = &FeatureModel> {
        self.members.iter().filter(|m| m.identifier().is_action())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Metamodel {
    classes: BTreeMap<String, ClassModel>,
    diagnostics: Vec<BuildDiagnostic>,
}

impl Metamodel {
    pub fn new(classes: Vec<ClassModel>, diagnostics: Vec<BuildDiagnostic>) -> Self {
        Self {
            classes: classes
                .into_iter()
                .map(|c| (c.name().to_string(), c))
                .collect(),
            diagnostics,
        }
    }

    pub fn class(&self, class_name: &str) -> Option<&ClassModel> {
        self.classes.get(class_name)
    }

    /// Classes sorted by name
    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    /// Every feature, class first, then its members
    pub fn features(&self) -> impl Iterator<Item = &FeatureModel> {
        self.classes
            .values()
            .flat_map(|c| std::iter::once(&c.feature).chain(c.members.iter()))
    }

    /// Member whose identifier and feature type both match
    pub fn feature(&self, identifier: &Identifier) -> Option<&FeatureModel> {
        let class = self.class(identifier.class_name())?;
        if identifier.member_name().is_empty() {
            return Some(&class.feature);
        }
        class
            .members
            .iter()
            .find(|m| {
                m.identifier().feature_type() == identifier.feature_type()
                    && m.identifier().as_ref() == identifier
            })
    }

    pub fn member(&self, class_name: &str, member_name: &str) -> Option<&FeatureModel> {
        self.class(class_name)?.member(member_name)
    }

    /// Look up `Class`, `Class#member` or `Class#member(p1,p2)`
    pub fn resolve(&self, reference: &str) -> MetamodelResult<&FeatureModel> {
        let unknown = || MetamodelError::UnknownFeature(reference.to_string());
        let (class_name, member) = match reference.split_once('#') {
            Some((class_name, member)) => (class_name, member),
            None => {
                return self.class(reference).map(|c| &c.feature).ok_or_else(unknown);
            }
        };
        let class = self.class(class_name).ok_or_else(unknown)?;
        if member.contains('(') {
            class
                .members
                .iter()
                .find(|m| m.identifier().canonical_string() == reference)
                .ok_or_else(unknown)
        } else {
            class.member(member).ok_or_else(unknown)
        }
    }

    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
