//! Composite validation facet
//!
//! Installed only when at least one declared rule resolved; a feature with
//! no rules has no facet at all.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::Facet;
use crate::domain::ports::Specification;
use crate::domain::value_objects::{Identifier, Value};

/// Declaration a rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSource {
    MustSatisfyAnnotation,
    PropertyAnnotation,
}

impl RuleSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            RuleSource::MustSatisfyAnnotation => "must-satisfy",
            RuleSource::PropertyAnnotation => "property",
        }
    }
}

/// Every reason a candidate was rejected, in rule order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    reasons: Vec<String>,
}

impl Rejection {
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reasons.join("; "))
    }
}

/// Ordered, non-empty set of must-satisfy rules for one feature
#[derive(Debug, Clone)]
pub struct MustSatisfySpecificationFacet {
    feature: Arc<Identifier>,
    specifications: Vec<Arc<dyn Specification>>,
    sources: Vec<RuleSource>,
}

impl MustSatisfySpecificationFacet {
    /// `None` when `specifications` is empty
    pub fn new(
        feature: Arc<Identifier>,
        specifications: Vec<Arc<dyn Specification>>,
        source: RuleSource,
    ) -> Option<Self> {
        if specifications.is_empty() {
            return None;
        }
        Some(Self {
            feature,
            specifications,
            sources: vec![source],
        })
    }

    /// A new facet with `more` appended after the existing rules
    pub fn merged(&self, more: Vec<Arc<dyn Specification>>, source: RuleSource) -> Self {
        let mut specifications = self.specifications.clone();
        specifications.extend(more);
        let mut sources = self.sources.clone();
        if !sources.contains(&source) {
            sources.push(source);
        }
        Self {
            feature: Arc::clone(&self.feature),
            specifications,
            sources,
        }
    }

    pub fn specifications(&self) -> &[Arc<dyn Specification>] {
        &self.specifications
    }

    pub fn sources(&self) -> &[RuleSource] {
        &self.sources
    }

    /// Run every rule; all reasons are collected, none short-circuits
    pub fn validate(&self, candidate: &Value) -> Option<Rejection> {
        let reasons: Vec<String> = self
            .specifications
            .iter()
            .filter_map(|spec| spec.satisfies(candidate))
            .collect();
        if reasons.is_empty() {
            None
        } else {
            Some(Rejection { reasons })
        }
    }

    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.validate(candidate).is_none()
    }
}

impl Facet for MustSatisfySpecificationFacet {
    fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    fn describe(&self) -> String {
        let rules: Vec<String> = self.specifications.iter().map(|s| s.describe()).collect();
        format!("must satisfy {}", rules.join(", "))
    }
}
