//! Semantics name to mapping factory

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{MoneyValueMapperFactory, ScalarKind, ScalarValueMapperFactory};
use crate::config::MappingConfig;
use crate::domain::ports::{FieldMappingFactory, FieldMappingResolver};

#[derive(Clone, Default)]
pub struct FieldMappingRegistry {
    factories: BTreeMap<String, Arc<dyn FieldMappingFactory>>,
}

impl FieldMappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Money plus the four scalar kinds, column types taken from `config`
    pub fn with_defaults(config: &MappingConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MoneyValueMapperFactory::new(
            config.money_amount_type.as_str(),
            config.money_currency_type.as_str(),
            config.missing_value,
        )));
        for kind in ScalarKind::ALL {
            let column_type = match kind {
                ScalarKind::Text => &config.text_type,
                ScalarKind::Integer => &config.integer_type,
                ScalarKind::Decimal => &config.decimal_type,
                ScalarKind::Boolean => &config.boolean_type,
            };
            registry.register(Arc::new(ScalarValueMapperFactory::new(
                kind,
                column_type.as_str(),
                config.missing_value,
            )));
        }
        registry
    }

    /// Register under the factory's own semantics name, replacing any previous one
    pub fn register(&mut self, factory: Arc<dyn FieldMappingFactory>) {
        let semantics = factory.semantics().to_string();
        if self.factories.insert(semantics.clone(), factory).is_some() {
            trace!(semantics = %semantics, "field mapping factory replaced");
        }
    }

    pub fn contains(&self, semantics: &str) -> bool {
        self.factories.contains_key(semantics)
    }

    pub fn semantics(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl FieldMappingResolver for FieldMappingRegistry {
    fn resolve(&self, semantics: &str) -> Option<Arc<dyn FieldMappingFactory>> {
        self.factories.get(semantics).cloned()
    }
}

impl fmt::Debug for FieldMappingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMappingRegistry")
            .field("semantics", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
