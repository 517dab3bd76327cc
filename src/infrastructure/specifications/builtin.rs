//! Built-in rules
//!
//! Text rules reject non-text candidates, numeric rules reject non-numeric
//! ones; a rule never coerces.

use std::collections::BTreeSet;

use crate::domain::ports::{Specification, SpecificationError};
use crate::domain::value_objects::Value;

fn expected(kind: &str, candidate: &Value) -> String {
    format!("expected {}, got {}", kind, candidate.type_name())
}

/// Text must contain a non-whitespace character
#[derive(Debug)]
pub struct NotBlank;

impl Specification for NotBlank {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        match candidate.as_text() {
            Some(text) if text.trim().is_empty() => Some("must not be blank".to_string()),
            Some(_) => None,
            None => Some(expected("text", candidate)),
        }
    }

    fn describe(&self) -> String {
        "NotBlank".to_string()
    }
}

#[derive(Debug)]
pub struct MinLength(pub usize);

impl Specification for MinLength {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        let Some(text) = candidate.as_text() else {
            return Some(expected("text", candidate));
        };
        let length = text.chars().count();
        (length < self.0).then(|| {
            format!(
                "must be at least {} characters long (was {})",
                self.0, length
            )
        })
    }

    fn describe(&self) -> String {
        format!("MinLength({})", self.0)
    }
}

#[derive(Debug)]
pub struct MaxLength(pub usize);

impl Specification for MaxLength {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        let Some(text) = candidate.as_text() else {
            return Some(expected("text", candidate));
        };
        let length = text.chars().count();
        (length > self.0).then(|| {
            format!(
                "must be at most {} characters long (was {})",
                self.0, length
            )
        })
    }

    fn describe(&self) -> String {
        format!("MaxLength({})", self.0)
    }
}

/// Strictly greater than zero; money compares its amount
#[derive(Debug)]
pub struct Positive;

impl Specification for Positive {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        match candidate.as_f64() {
            Some(n) if n > 0.0 => None,
            Some(_) => Some("must be positive".to_string()),
            None => Some(expected("a number", candidate)),
        }
    }

    fn describe(&self) -> String {
        "Positive".to_string()
    }
}

/// Inclusive numeric range
#[derive(Debug)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Specification for Range {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        match candidate.as_f64() {
            Some(n) if n >= self.min && n <= self.max => None,
            Some(_) => Some(format!(
                "must be between {} and {}",
                self.min, self.max
            )),
            None => Some(expected("a number", candidate)),
        }
    }

    fn describe(&self) -> String {
        format!("Range({},{})", self.min, self.max)
    }
}

/// Three upper-case ASCII letters; money is checked on its currency
#[derive(Debug)]
pub struct CurrencyCode;

impl CurrencyCode {
    fn is_code(code: &str) -> bool {
        code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl Specification for CurrencyCode {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        let code = match candidate {
            Value::Text(text) => text.as_str(),
            Value::Money(money) => money.currency(),
            other => return Some(expected("text or money", other)),
        };
        (!Self::is_code(code)).then(|| format!("'{}' is not a currency code", code))
    }

    fn describe(&self) -> String {
        "CurrencyCode".to_string()
    }
}

/// Text must be one of a fixed set
#[derive(Debug)]
pub struct OneOf(pub BTreeSet<String>);

impl Specification for OneOf {
    fn satisfies(&self, candidate: &Value) -> Option<String> {
        let Some(text) = candidate.as_text() else {
            return Some(expected("text", candidate));
        };
        if self.0.contains(text) {
            return None;
        }
        let allowed: Vec<&str> = self.0.iter().map(String::as_str).collect();
        Some(format!("must be one of {}", allowed.join(", ")))
    }

    fn describe(&self) -> String {
        let allowed: Vec<&str> = self.0.iter().map(String::as_str).collect();
        format!("OneOf({})", allowed.join("|"))
    }
}

pub(super) fn no_args(name: &str, args: &[String]) -> Result<(), SpecificationError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(invalid(name, format!("takes no arguments, got {}", args.len())))
    }
}

pub(super) fn single_count(name: &str, args: &[String]) -> Result<usize, SpecificationError> {
    match args {
        [arg] => arg
            .parse::<usize>()
            .map_err(|_| invalid(name, format!("expected a length, got '{}'", arg))),
        _ => Err(invalid(name, format!("expected 1 argument, got {}", args.len()))),
    }
}

pub(super) fn bounds(name: &str, args: &[String]) -> Result<(f64, f64), SpecificationError> {
    let [min, max] = args else {
        return Err(invalid(name, format!("expected 2 arguments, got {}", args.len())));
    };
    let parse = |arg: &String| {
        arg.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| invalid(name, format!("expected a number, got '{}'", arg)))
    };
    let (min, max) = (parse(min)?, parse(max)?);
    if min > max {
        return Err(invalid(name, format!("min {} exceeds max {}", min, max)));
    }
    Ok((min, max))
}

/// `OneOf(a|b|c)`; commas separate further alternatives too
pub(super) fn alternatives(
    name: &str,
    args: &[String],
) -> Result<BTreeSet<String>, SpecificationError> {
    let allowed: BTreeSet<String> = args
        .iter()
        .flat_map(|arg| arg.split('|'))
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect();
    if allowed.is_empty() {
        return Err(invalid(name, "expected at least one alternative".to_string()));
    }
    Ok(allowed)
}

fn invalid(name: &str, reason: String) -> SpecificationError {
    SpecificationError::InvalidArguments {
        name: name.to_string(),
        reason,
    }
}
