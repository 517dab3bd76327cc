//! Two-column money mapper
//!
//! Column 1 holds the amount as a double, column 2 the currency code.
//! Names are the member name suffixed with the column position.

use std::sync::Arc;

use super::{read_columns, sql_field_name, storage_mismatch};
use crate::domain::policies::MissingValuePolicy;
use crate::domain::ports::{
    out_of_range, FieldMapping, FieldMappingFactory, StorageRow, StorageValue,
};
use crate::domain::value_objects::{Identifier, Money, Value};
use crate::error::{MetamodelError, MetamodelResult};

const COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub struct MoneyValueMapper {
    feature: Arc<Identifier>,
    column_names: [String; COLUMNS],
    column_types: [String; COLUMNS],
    policy: MissingValuePolicy,
}

impl MoneyValueMapper {
    pub fn new(
        feature: Arc<Identifier>,
        amount_type: impl Into<String>,
        currency_type: impl Into<String>,
        policy: MissingValuePolicy,
    ) -> Self {
        let member = feature.member_name();
        let column_names = [
            sql_field_name(&format!("{}1", member)),
            sql_field_name(&format!("{}2", member)),
        ];
        Self {
            feature,
            column_names,
            column_types: [amount_type.into(), currency_type.into()],
            policy,
        }
    }

    pub fn missing_value_policy(&self) -> MissingValuePolicy {
        self.policy
    }
}

impl FieldMapping for MoneyValueMapper {
    fn feature(&self) -> &Identifier {
        &self.feature
    }

    fn column_count(&self) -> usize {
        COLUMNS
    }

    fn column_name(&self, index: usize) -> Option<&str> {
        self.column_names.get(index).map(String::as_str)
    }

    fn column_type(&self, index: usize) -> Option<&str> {
        self.column_types.get(index).map(String::as_str)
    }

    fn to_storage(&self, index: usize, value: Option<&Value>) -> MetamodelResult<StorageValue> {
        if index >= COLUMNS {
            return Err(out_of_range(&self.feature, index, COLUMNS));
        }
        let money = match value {
            None => return Ok(StorageValue::Null),
            Some(Value::Money(money)) => money,
            Some(other) => {
                return Err(MetamodelError::MappingTypeMismatch {
                    feature: self.feature.to_string(),
                    mapper: "MoneyValueMapper",
                    expected: "money",
                    found: other.type_name(),
                })
            }
        };
        Ok(if index == 0 {
            StorageValue::Double(money.double_value())
        } else {
            StorageValue::Text(money.currency().to_string())
        })
    }

    fn from_storage_row(&self, row: &dyn StorageRow) -> MetamodelResult<Option<Value>> {
        let Some(values) = read_columns(&self.feature, &self.column_names, row, self.policy)?
        else {
            return Ok(None);
        };
        let amount = match values[0] {
            StorageValue::Double(d) => *d,
            StorageValue::Integer(i) => *i as f64,
            other => {
                return Err(storage_mismatch(
                    &self.feature,
                    &self.column_names[0],
                    "DOUBLE",
                    other,
                ))
            }
        };
        let currency = match values[1] {
            StorageValue::Text(currency) => currency.as_str(),
            other => {
                return Err(storage_mismatch(
                    &self.feature,
                    &self.column_names[1],
                    "TEXT",
                    other,
                ))
            }
        };
        match Money::try_new(amount, currency) {
            Some(money) => Ok(Some(Value::Money(money))),
            None => Err(MetamodelError::AmountOutOfRange {
                feature: self.feature.to_string(),
                column: self.column_names[0].clone(),
                amount,
            }),
        }
    }
}

/// Carries the two column types from configuration
#[derive(Debug, Clone)]
pub struct MoneyValueMapperFactory {
    amount_type: String,
    currency_type: String,
    policy: MissingValuePolicy,
}

impl MoneyValueMapperFactory {
    pub fn new(
        amount_type: impl Into<String>,
        currency_type: impl Into<String>,
        policy: MissingValuePolicy,
    ) -> Self {
        Self {
            amount_type: amount_type.into(),
            currency_type: currency_type.into(),
            policy,
        }
    }
}

impl FieldMappingFactory for MoneyValueMapperFactory {
    fn semantics(&self) -> &str {
        "money"
    }

    fn create_field_mapping(&self, feature: Arc<Identifier>) -> Box<dyn FieldMapping> {
        Box::new(MoneyValueMapper::new(
            feature,
            self.amount_type.as_str(),
            self.currency_type.as_str(),
            self.policy,
        ))
    }
}
