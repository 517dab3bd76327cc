//! Validate Use Case
//!
//! Evaluates a feature's must-satisfy rules against one candidate value.
//! A feature without rules accepts every candidate.

use serde::Serialize;

use crate::domain::entities::Metamodel;
use crate::domain::facets::MustSatisfySpecificationFacet;
use crate::domain::value_objects::Value;
use crate::error::MetamodelResult;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub feature: String,
    pub candidate: Value,
    pub rules: Vec<String>,
    pub valid: bool,
    pub reasons: Vec<String>,
}

/// `feature` is `Class`, `Class#member` or `Class#member(p1,p2)`;
/// `literal` is parsed with [`Value::parse_literal`].
pub fn validate_candidate(
    model: &Metamodel,
    feature: &str,
    literal: &str,
) -> MetamodelResult<ValidationReport> {
    let feature = model.resolve(feature)?;
    let candidate = Value::parse_literal(literal);
    let rules = feature
        .facet::<MustSatisfySpecificationFacet>()
        .map(|facet| facet.specifications().iter().map(|s| s.describe()).collect())
        .unwrap_or_default();
    let reasons = feature
        .validate(&candidate)
        .map(|rejection| rejection.into_reasons())
        .unwrap_or_default();

    Ok(ValidationReport {
        feature: feature.identifier().full_identity_string().to_string(),
        candidate,
        rules,
        valid: reasons.is_empty(),
        reasons,
    })
}
