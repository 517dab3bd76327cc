//! In-memory storage row

use std::collections::BTreeMap;

use crate::domain::ports::{StorageRow, StorageValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRow {
    columns: BTreeMap<String, StorageValue>,
}

impl MemoryRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: StorageValue) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: StorageValue) {
        self.columns.insert(column.into(), value);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl StorageRow for MemoryRow {
    fn get(&self, column: &str) -> Option<&StorageValue> {
        self.columns.get(column)
    }
}

impl FromIterator<(String, StorageValue)> for MemoryRow {
    fn from_iter<I: IntoIterator<Item = (String, StorageValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
