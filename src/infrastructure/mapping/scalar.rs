//! Single-column mappers for the scalar value types

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{read_columns, sql_field_name, storage_mismatch};
use crate::domain::policies::MissingValuePolicy;
use crate::domain::ports::{
    out_of_range, FieldMapping, FieldMappingFactory, StorageRow, StorageValue,
};
use crate::domain::value_objects::{Identifier, Value};
use crate::error::{MetamodelError, MetamodelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Text,
    Integer,
    Decimal,
    Boolean,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [
        ScalarKind::Text,
        ScalarKind::Integer,
        ScalarKind::Decimal,
        ScalarKind::Boolean,
    ];

    /// Semantics name, matching `Value::type_name`
    pub fn semantics(&self) -> &'static str {
        match self {
            ScalarKind::Text => "text",
            ScalarKind::Integer => "integer",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Boolean => "boolean",
        }
    }

    fn to_storage(self, value: &Value) -> Option<StorageValue> {
        match (self, value) {
            (ScalarKind::Text, Value::Text(s)) => Some(StorageValue::Text(s.clone())),
            (ScalarKind::Integer, Value::Integer(i)) => Some(StorageValue::Integer(*i)),
            (ScalarKind::Decimal, Value::Decimal(d)) => Some(StorageValue::Double(*d)),
            (ScalarKind::Boolean, Value::Bool(b)) => Some(StorageValue::Boolean(*b)),
            _ => None,
        }
    }

    /// Lenient where storage engines differ: doubles may come back as
    /// integers and booleans as 0/1.
    fn from_storage(self, stored: &StorageValue) -> Option<Value> {
        match (self, stored) {
            (ScalarKind::Text, StorageValue::Text(s)) => Some(Value::Text(s.clone())),
            (ScalarKind::Integer, StorageValue::Integer(i)) => Some(Value::Integer(*i)),
            (ScalarKind::Decimal, StorageValue::Double(d)) => Some(Value::Decimal(*d)),
            (ScalarKind::Decimal, StorageValue::Integer(i)) => Some(Value::Decimal(*i as f64)),
            (ScalarKind::Boolean, StorageValue::Boolean(b)) => Some(Value::Bool(*b)),
            (ScalarKind::Boolean, StorageValue::Integer(0)) => Some(Value::Bool(false)),
            (ScalarKind::Boolean, StorageValue::Integer(1)) => Some(Value::Bool(true)),
            _ => None,
        }
    }

    fn storage_type_name(self) -> &'static str {
        match self {
            ScalarKind::Text => "TEXT",
            ScalarKind::Integer => "INTEGER",
            ScalarKind::Decimal => "DOUBLE",
            ScalarKind::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.semantics())
    }
}

#[derive(Debug, Clone)]
pub struct ScalarValueMapper {
    feature: Arc<Identifier>,
    kind: ScalarKind,
    column_names: [String; 1],
    column_type: String,
    policy: MissingValuePolicy,
}

impl ScalarValueMapper {
    pub fn new(
        feature: Arc<Identifier>,
        kind: ScalarKind,
        column_type: impl Into<String>,
        policy: MissingValuePolicy,
    ) -> Self {
        let column_names = [sql_field_name(feature.member_name())];
        Self {
            feature,
            kind,
            column_names,
            column_type: column_type.into(),
            policy,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }
}

impl FieldMapping for ScalarValueMapper {
    fn feature(&self) -> &Identifier {
        &self.feature
    }

    fn column_count(&self) -> usize {
        1
    }

    fn column_name(&self, index: usize) -> Option<&str> {
        self.column_names.get(index).map(String::as_str)
    }

    fn column_type(&self, index: usize) -> Option<&str> {
        (index == 0).then_some(self.column_type.as_str())
    }

    fn to_storage(&self, index: usize, value: Option<&Value>) -> MetamodelResult<StorageValue> {
        if index != 0 {
            return Err(out_of_range(&self.feature, index, 1));
        }
        let Some(value) = value else {
            return Ok(StorageValue::Null);
        };
        self.kind
            .to_storage(value)
            .ok_or_else(|| MetamodelError::MappingTypeMismatch {
                feature: self.feature.to_string(),
                mapper: "ScalarValueMapper",
                expected: self.kind.semantics(),
                found: value.type_name(),
            })
    }

    fn from_storage_row(&self, row: &dyn StorageRow) -> MetamodelResult<Option<Value>> {
        let Some(values) = read_columns(&self.feature, &self.column_names, row, self.policy)?
        else {
            return Ok(None);
        };
        let stored = values[0];
        self.kind.from_storage(stored).map(Some).ok_or_else(|| {
            storage_mismatch(
                &self.feature,
                &self.column_names[0],
                self.kind.storage_type_name(),
                stored,
            )
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScalarValueMapperFactory {
    kind: ScalarKind,
    column_type: String,
    policy: MissingValuePolicy,
}

impl ScalarValueMapperFactory {
    pub fn new(
        kind: ScalarKind,
        column_type: impl Into<String>,
        policy: MissingValuePolicy,
    ) -> Self {
        Self {
            kind,
            column_type: column_type.into(),
            policy,
        }
    }
}

impl FieldMappingFactory for ScalarValueMapperFactory {
    fn semantics(&self) -> &str {
        self.kind.semantics()
    }

    fn create_field_mapping(&self, feature: Arc<Identifier>) -> Box<dyn FieldMapping> {
        Box::new(ScalarValueMapper::new(
            feature,
            self.kind,
            self.column_type.as_str(),
            self.policy,
        ))
    }
}
