//! Metamodel builder
//!
//! Groups descriptors by class, gives every class its class-level feature
//! and runs the factory chain once per feature.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::chain::FacetFactoryChain;
use super::facet_factory::FactoryServices;
use crate::domain::entities::{
    ClassModel, FacetHolder, FeatureDescriptor, FeatureModel, Metamodel,
};
use crate::domain::value_objects::{BuildDiagnostic, FeatureType};

const BUILDER: &str = "metamodel-builder";

#[derive(Default)]
struct ClassDraft {
    class: Option<FeatureDescriptor>,
    members: Vec<FeatureDescriptor>,
}

pub struct MetamodelBuilder {
    chain: FacetFactoryChain,
    services: FactoryServices,
}

impl MetamodelBuilder {
    pub fn new(chain: FacetFactoryChain, services: FactoryServices) -> Self {
        Self { chain, services }
    }

    pub fn chain(&self) -> &FacetFactoryChain {
        &self.chain
    }

    pub fn build<I>(&self, descriptors: I) -> Metamodel
    where
        I: IntoIterator<Item = FeatureDescriptor>,
    {
        let mut diagnostics = Vec::new();
        let drafts = group_by_class(descriptors, &mut diagnostics);

        let mut classes = Vec::with_capacity(drafts.len());
        for (class_name, draft) in drafts {
            let class_descriptor = draft
                .class
                .unwrap_or_else(|| FeatureDescriptor::class(class_name.as_str()));
            let class_feature = self.build_feature(&class_descriptor, &mut diagnostics);
            let members = draft
                .members
                .iter()
                .map(|member| self.build_feature(member, &mut diagnostics))
                .collect();
            classes.push(ClassModel::new(class_feature, members));
        }

        debug!(
            classes = classes.len(),
            diagnostics = diagnostics.len(),
            "metamodel built"
        );
        Metamodel::new(classes, diagnostics)
    }

    fn build_feature(
        &self,
        descriptor: &FeatureDescriptor,
        diagnostics: &mut Vec<BuildDiagnostic>,
    ) -> FeatureModel {
        let feature = Arc::new(descriptor.identifier());
        let mut holder = FacetHolder::new(Arc::clone(&feature));
        let mut audit = Vec::new();
        self.chain.process(
            descriptor,
            &feature,
            &self.services,
            &mut holder,
            &mut audit,
            diagnostics,
        );
        FeatureModel::new(holder, audit, descriptor.value_type.clone())
    }
}

/// Later declarations of the same feature replace earlier ones
///
/// "Same" includes the feature type: a property and a parameterless action
/// sharing a name are two features even though their identifiers are equal.
fn group_by_class<I>(
    descriptors: I,
    diagnostics: &mut Vec<BuildDiagnostic>,
) -> BTreeMap<String, ClassDraft>
where
    I: IntoIterator<Item = FeatureDescriptor>,
{
    let mut drafts: BTreeMap<String, ClassDraft> = BTreeMap::new();
    for descriptor in descriptors {
        let identifier = descriptor.identifier();
        let feature_type = descriptor.feature_type;
        let draft = drafts.entry(descriptor.class_name.clone()).or_default();
        let replaced = if feature_type == FeatureType::Class {
            draft.class.replace(descriptor).is_some()
        } else {
            match draft.members.iter_mut().find(|m| {
                m.feature_type == feature_type && m.identifier() == identifier
            }) {
                Some(existing) => {
                    *existing = descriptor;
                    true
                }
                None => {
                    draft.members.push(descriptor);
                    false
                }
            }
        };
        if replaced {
            let diagnostic = BuildDiagnostic {
                feature: identifier.full_identity_string().to_string(),
                factory: BUILDER,
                message: "declared more than once; the last declaration wins".to_string(),
            };
            warn!(feature = %diagnostic.feature, "{}", diagnostic.message);
            diagnostics.push(diagnostic);
        }
    }
    drafts
}
