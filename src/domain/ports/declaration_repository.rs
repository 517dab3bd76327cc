//! DeclarationRepository port - where feature descriptors come from
//!
//! The domain builds a metamodel from descriptors; reading them from a
//! file (or any other catalog) is an infrastructure concern.

use std::path::Path;

use crate::domain::entities::FeatureDescriptor;
use crate::error::MetamodelResult;

/// Abstract source of declared features
pub trait DeclarationRepository {
    /// Every declared class, property and action in `source`, in declaration order
    fn load(&self, source: &Path) -> MetamodelResult<Vec<FeatureDescriptor>>;
}
