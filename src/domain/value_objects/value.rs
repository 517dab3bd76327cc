//! Runtime representation of a domain value.
//!
//! Validation rules, property facets and field mappers all work on `Value`;
//! `type_name()` is the runtime type reported in mapping errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    Money(Money),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Text(_) => "text",
            Value::Money(_) => "money",
        }
    }

    /// Parse a command-line literal: integer, then decimal, then boolean,
    /// then `<amount> <CUR>` money, falling back to text.
    pub fn parse_literal(literal: &str) -> Self {
        let trimmed = literal.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(d) = trimmed.parse::<f64>() {
            if d.is_finite() {
                return Value::Decimal(d);
            }
        }
        match trimmed {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Some((amount, currency)) = trimmed.split_once(' ') {
            let currency = currency.trim();
            if let Ok(amount) = amount.parse::<f64>() {
                if !currency.is_empty() {
                    if let Some(money) = Money::try_new(amount, currency) {
                        return Value::Money(money);
                    }
                }
            }
        }
        Value::Text(literal.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Value::Money(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric view used by range-style rules
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
            Value::Money(m) => Some(m.double_value()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
            Value::Money(m) => write!(f, "{}", m),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<Money> for Value {
    fn from(m: Money) -> Self {
        Value::Money(m)
    }
}
