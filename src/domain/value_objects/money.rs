//! Money value object
//!
//! An amount held in minor units (hundredths) plus a currency code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary amount with a currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: String,
}

impl Money {
    /// Create from a decimal amount, rounded to the nearest hundredth.
    ///
    /// Saturates outside the `i64` minor-unit range; untrusted amounts go
    /// through [`Money::try_new`].
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            minor_units: (amount * 100.0).round() as i64,
            currency: currency.into(),
        }
    }

    /// Like [`Money::new`], but `None` for NaN, infinities, and amounts
    /// whose minor units do not fit an `i64`.
    pub fn try_new(amount: f64, currency: impl Into<String>) -> Option<Self> {
        // -2^63 is exact as f64; 2^63 is the first value past i64::MAX
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        let scaled = (amount * 100.0).round();
        if !scaled.is_finite() || scaled < -LIMIT || scaled >= LIMIT {
            return None;
        }
        Some(Self {
            minor_units: scaled as i64,
            currency: currency.into(),
        })
    }

    pub fn from_minor_units(minor_units: i64, currency: impl Into<String>) -> Self {
        Self {
            minor_units,
            currency: currency.into(),
        }
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn double_value(&self) -> f64 {
        self.minor_units as f64 / 100.0
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        write!(f, "{}{}.{:02} {}", sign, abs / 100, abs % 100, self.currency)
    }
}
