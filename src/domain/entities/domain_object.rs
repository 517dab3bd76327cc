//! DomainObject entity - an instance whose properties facets act on

use std::collections::BTreeMap;

use crate::domain::value_objects::Value;

/// A class instance held as a bag of named property values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainObject {
    class_name: String,
    properties: BTreeMap<String, Value>,
}

impl DomainObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Returns the previous value
    pub fn set(&mut self, property: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(property.into(), value)
    }

    /// Returns the removed value
    pub fn clear(&mut self, property: &str) -> Option<Value> {
        self.properties.remove(property)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
