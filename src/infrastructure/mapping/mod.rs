//! Field Mapping Implementations
//!
//! Concrete mappers behind the `FieldMapping` port:
//! - MoneyValueMapper: amount and currency in two columns
//! - ScalarValueMapper: text, integer, decimal and boolean in one column
//! - MemoryRow: in-memory `StorageRow`
//! - FieldMappingRegistry: semantics name to factory

mod memory_row;
mod money;
mod registry;
mod scalar;

pub use memory_row::MemoryRow;
pub use money::{MoneyValueMapper, MoneyValueMapperFactory};
pub use registry::FieldMappingRegistry;
pub use scalar::{ScalarKind, ScalarValueMapper, ScalarValueMapperFactory};

use crate::domain::policies::MissingValuePolicy;
use crate::domain::ports::{StorageRow, StorageValue};
use crate::domain::value_objects::Identifier;
use crate::error::{MetamodelError, MetamodelResult};

/// Column-safe form of a name: every character other than an ASCII letter,
/// digit or `_` becomes `_`. Case is preserved.
pub fn sql_field_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Read every column of one value from `row`
///
/// `Ok(None)` when the value is absent: all columns NULL, or a gap the
/// policy maps to "no value".
pub(crate) fn read_columns<'r>(
    feature: &Identifier,
    columns: &[String],
    row: &'r dyn StorageRow,
    policy: MissingValuePolicy,
) -> MetamodelResult<Option<Vec<&'r StorageValue>>> {
    let mut values = Vec::with_capacity(columns.len());
    for column in columns {
        match row.get(column) {
            Some(value) => values.push(value),
            None => {
                return match policy {
                    MissingValuePolicy::Null => Ok(None),
                    MissingValuePolicy::Error => Err(MetamodelError::MissingColumn {
                        feature: feature.to_string(),
                        column: column.clone(),
                    }),
                };
            }
        }
    }

    if values.iter().all(|v| v.is_null()) {
        return Ok(None);
    }
    if let Some(index) = values.iter().position(|v| v.is_null()) {
        return match policy {
            MissingValuePolicy::Null => Ok(None),
            MissingValuePolicy::Error => Err(MetamodelError::IncompleteValue {
                feature: feature.to_string(),
                column: columns[index].clone(),
            }),
        };
    }
    Ok(Some(values))
}

pub(crate) fn storage_mismatch(
    feature: &Identifier,
    column: &str,
    expected: &'static str,
    found: &StorageValue,
) -> MetamodelError {
    MetamodelError::StorageTypeMismatch {
        feature: feature.to_string(),
        column: column.to_string(),
        expected,
        found: found.type_name(),
    }
}
