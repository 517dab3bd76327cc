//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Load feature descriptors from a declaration source
//! 2. Run the factory chain over every feature
//! 3. Return the immutable metamodel

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::entities::Metamodel;
use crate::domain::ports::DeclarationRepository;
use crate::domain::services::MetamodelBuilder;
use crate::error::MetamodelResult;

pub struct BuildMetamodelUseCase<R: DeclarationRepository> {
    declarations: R,
    builder: MetamodelBuilder,
}

impl<R: DeclarationRepository> BuildMetamodelUseCase<R> {
    pub fn new(declarations: R, builder: MetamodelBuilder) -> Self {
        Self {
            declarations,
            builder,
        }
    }

    pub fn builder(&self) -> &MetamodelBuilder {
        &self.builder
    }

    /// Load `source` and build it; the result is shared read-only
    pub fn execute(&self, source: &Path) -> MetamodelResult<Arc<Metamodel>> {
        let descriptors = self.declarations.load(source)?;
        let model = self.builder.build(descriptors);
        info!(
            source = %source.display(),
            classes = model.len(),
            diagnostics = model.diagnostics().len(),
            "metamodel ready"
        );
        Ok(Arc::new(model))
    }
}
