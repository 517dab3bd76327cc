//! Model declaration files
//!
//! A declaration file lists classes with their properties and actions:
//!
//! ```toml
//! [[classes]]
//! name = "com.acme.Order"
//! annotations = [{ kind = "named", value = "Purchase Order" }]
//!
//! [[classes.properties]]
//! name = "price"
//! value_type = "money"
//! annotations = [{ kind = "must-satisfy", specifications = ["Positive"] }]
//!
//! [[classes.actions]]
//! name = "ship"
//! parameters = ["Address"]
//! ```
//!
//! The same shape is accepted as YAML when the file ends in `.yaml`/`.yml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::FeatureDescriptor;
use crate::domain::ports::DeclarationRepository;
use crate::domain::value_objects::{Annotation, DeclaredMetadata};
use crate::error::{MetamodelError, MetamodelResult};

/// Syntax of a declaration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Toml,
    Yaml,
}

impl DeclarationFormat {
    /// YAML for `.yaml`/`.yml`, TOML otherwise
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DeclarationFormat::Yaml
            }
            _ => DeclarationFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    #[serde(default)]
    classes: Vec<ClassDeclaration>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassDeclaration {
    #[serde(default)]
    name: String,
    #[serde(default)]
    annotations: Vec<Annotation>,
    #[serde(default)]
    properties: Vec<PropertyDeclaration>,
    #[serde(default)]
    actions: Vec<ActionDeclaration>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyDeclaration {
    name: String,
    #[serde(default)]
    value_type: Option<String>,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionDeclaration {
    name: String,
    #[serde(default)]
    parameters: Vec<String>,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

/// Read and parse a declaration file
pub fn load_declarations(path: &Path) -> MetamodelResult<Vec<FeatureDescriptor>> {
    let content = fs::read_to_string(path)?;
    let descriptors = parse_declarations(&content, DeclarationFormat::from_path(path), path)?;
    debug!(
        path = %path.display(),
        features = descriptors.len(),
        "declarations loaded"
    );
    Ok(descriptors)
}

/// Parse declarations; `file` is only used in error messages
pub fn parse_declarations(
    content: &str,
    format: DeclarationFormat,
    file: &Path,
) -> MetamodelResult<Vec<FeatureDescriptor>> {
    let invalid = |message: String| MetamodelError::InvalidDeclaration {
        file: file.to_path_buf(),
        message,
    };

    let model: ModelFile = match format {
        DeclarationFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        DeclarationFormat::Yaml => {
            if content.trim().is_empty() {
                ModelFile { classes: vec![] }
            } else {
                serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
            }
        }
    };

    let mut descriptors = Vec::new();
    for (index, class) in model.classes.into_iter().enumerate() {
        let class_name = class.name.trim().to_string();
        if class_name.is_empty() {
            return Err(invalid(format!("class #{} has no name", index + 1)));
        }

        let mut class_descriptor = FeatureDescriptor::class(class_name.as_str());
        class_descriptor.metadata = DeclaredMetadata::new(class.annotations);
        descriptors.push(class_descriptor);

        for property in class.properties {
            let name = member_name(&property.name, &class_name, "property").map_err(invalid)?;
            let mut descriptor = FeatureDescriptor::property(class_name.as_str(), name);
            descriptor.value_type = property.value_type;
            descriptor.metadata = DeclaredMetadata::new(property.annotations);
            descriptors.push(descriptor);
        }

        for action in class.actions {
            let name = member_name(&action.name, &class_name, "action").map_err(invalid)?;
            let mut descriptor =
                FeatureDescriptor::action(class_name.as_str(), name, action.parameters);
            descriptor.metadata = DeclaredMetadata::new(action.annotations);
            descriptors.push(descriptor);
        }
    }

    Ok(descriptors)
}

/// Declaration files on the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDeclarationRepository;

impl FsDeclarationRepository {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationRepository for FsDeclarationRepository {
    fn load(&self, source: &Path) -> MetamodelResult<Vec<FeatureDescriptor>> {
        load_declarations(source)
    }
}

fn member_name<'a>(name: &'a str, class_name: &str, kind: &str) -> Result<&'a str, String> {
    let name = name.trim();
    if name.is_empty() {
        Err(format!("{} of class '{}' has no name", kind, class_name))
    } else {
        Ok(name)
    }
}
