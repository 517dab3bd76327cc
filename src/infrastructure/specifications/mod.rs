//! Specification Registry
//!
//! Name-keyed catalog of rule constructors implementing the
//! `SpecificationProvider` port. Built-in rules are registered by
//! [`SpecificationRegistry::with_builtins`]; applications add their own
//! with [`SpecificationRegistry::register`].

mod builtin;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::domain::ports::{Specification, SpecificationError, SpecificationProvider};
use crate::domain::value_objects::SpecificationRef;

pub use builtin::{CurrencyCode, MaxLength, MinLength, NotBlank, OneOf, Positive, Range};

/// Builds a rule from the reference's arguments
pub type SpecificationConstructor =
    Arc<dyn Fn(&[String]) -> Result<Arc<dyn Specification>, SpecificationError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct SpecificationRegistry {
    constructors: BTreeMap<String, SpecificationConstructor>,
}

impl SpecificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("NotBlank", |args| {
            builtin::no_args("NotBlank", args)?;
            Ok(Arc::new(NotBlank))
        });
        registry.register("MinLength", |args| {
            Ok(Arc::new(MinLength(builtin::single_count("MinLength", args)?)))
        });
        registry.register("MaxLength", |args| {
            Ok(Arc::new(MaxLength(builtin::single_count("MaxLength", args)?)))
        });
        registry.register("Positive", |args| {
            builtin::no_args("Positive", args)?;
            Ok(Arc::new(Positive))
        });
        registry.register("Range", |args| {
            let (min, max) = builtin::bounds("Range", args)?;
            Ok(Arc::new(Range { min, max }))
        });
        registry.register("CurrencyCode", |args| {
            builtin::no_args("CurrencyCode", args)?;
            Ok(Arc::new(CurrencyCode))
        });
        registry.register("OneOf", |args| {
            Ok(Arc::new(OneOf(builtin::alternatives("OneOf", args)?)))
        });
        registry
    }

    /// Register or replace the constructor for `name`
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&[String]) -> Result<Arc<dyn Specification>, SpecificationError>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(name.into(), Arc::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl SpecificationProvider for SpecificationRegistry {
    fn instantiate(
        &self,
        reference: &SpecificationRef,
    ) -> Result<Arc<dyn Specification>, SpecificationError> {
        let constructor =
            self.constructors
                .get(reference.name())
                .ok_or_else(|| SpecificationError::Unknown {
                    name: reference.name().to_string(),
                })?;
        let specification = constructor(reference.args())?;
        trace!(reference = %reference, "specification instantiated");
        Ok(specification)
    }
}

impl fmt::Debug for SpecificationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecificationRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
