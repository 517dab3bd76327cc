//! Field mapping port - persisting one domain value across storage columns
//!
//! An object-store adapter implements this per value type. A mapper knows
//! how many columns it needs, names them deterministically from the
//! feature's member name, converts a value into each column and rebuilds the
//! value from a retrieved row. Mappers are type specific: a value of any
//! other runtime type is a mapping error, never silently coerced.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::value_objects::{Identifier, Value};
use crate::error::{MetamodelError, MetamodelResult};

/// Physical value of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StorageValue {
    Null,
    Integer(i64),
    Double(f64),
    Text(String),
    Boolean(bool),
}

impl StorageValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            StorageValue::Null => "NULL",
            StorageValue::Integer(_) => "INTEGER",
            StorageValue::Double(_) => "DOUBLE",
            StorageValue::Text(_) => "TEXT",
            StorageValue::Boolean(_) => "BOOLEAN",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }
}

impl fmt::Display for StorageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageValue::Null => write!(f, "NULL"),
            StorageValue::Integer(i) => write!(f, "{}", i),
            StorageValue::Double(d) => write!(f, "{}", d),
            StorageValue::Text(s) => write!(f, "'{}'", s),
            StorageValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// One retrieved row, addressed by column name
pub trait StorageRow {
    /// `None` when the row has no such column at all
    fn get(&self, column: &str) -> Option<&StorageValue>;
}

/// Name and type of one mapped column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: String,
}

/// Reads and writes one feature's value across `column_count()` columns
pub trait FieldMapping: fmt::Debug + Send + Sync {
    /// The feature being mapped
    fn feature(&self) -> &Identifier;

    fn column_count(&self) -> usize;

    fn column_name(&self, index: usize) -> Option<&str>;

    fn column_type(&self, index: usize) -> Option<&str>;

    /// Physical value for column `index`; `None` means "no value"
    fn to_storage(&self, index: usize, value: Option<&Value>) -> MetamodelResult<StorageValue>;

    /// Rebuild the domain value from all declared columns of `row`
    fn from_storage_row(&self, row: &dyn StorageRow) -> MetamodelResult<Option<Value>>;

    fn columns(&self) -> Vec<ColumnDefinition> {
        (0..self.column_count())
            .filter_map(|i| {
                Some(ColumnDefinition {
                    name: self.column_name(i)?.to_string(),
                    column_type: self.column_type(i)?.to_string(),
                })
            })
            .collect()
    }

    /// Every column of `value`, in column order
    fn to_storage_columns(
        &self,
        value: Option<&Value>,
    ) -> MetamodelResult<Vec<(String, StorageValue)>> {
        (0..self.column_count())
            .map(|i| {
                let name = self
                    .column_name(i)
                    .ok_or_else(|| out_of_range(self.feature(), i, self.column_count()))?;
                Ok((name.to_string(), self.to_storage(i, value)?))
            })
            .collect()
    }
}

/// Builds the mapper for one feature
pub trait FieldMappingFactory: fmt::Debug + Send + Sync {
    /// Value semantics name this factory serves (e.g. `money`)
    fn semantics(&self) -> &str;

    fn create_field_mapping(&self, feature: Arc<Identifier>) -> Box<dyn FieldMapping>;
}

/// Looks up the mapping factory registered for a value semantics name
pub trait FieldMappingResolver: Send + Sync {
    fn resolve(&self, semantics: &str) -> Option<Arc<dyn FieldMappingFactory>>;
}

/// Error for an index outside `0..count`
pub fn out_of_range(feature: &Identifier, index: usize, count: usize) -> MetamodelError {
    MetamodelError::ColumnIndexOutOfRange {
        feature: feature.to_string(),
        index,
        count,
    }
}
