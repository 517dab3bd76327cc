//! Specification reference value object
//!
//! Rules are declared by reference: `NotBlank` or `MaxLength(10)` or
//! `Range(1, 99)`. Parsing never panics; malformed input is an error the
//! caller records and skips.

use std::fmt;

use crate::domain::ports::SpecificationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecificationRef {
    name: String,
    args: Vec<String>,
}

impl SpecificationRef {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn parse(reference: &str) -> Result<Self, SpecificationError> {
        let malformed = || SpecificationError::MalformedReference {
            reference: reference.to_string(),
        };

        let trimmed = reference.trim();
        let (name, args) = match trimmed.find('(') {
            Some(open) => {
                let inner = trimmed[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
                if inner.contains('(') || inner.contains(')') {
                    return Err(malformed());
                }
                let args = if inner.trim().is_empty() {
                    Vec::new()
                } else {
                    inner.split(',').map(|a| a.trim().to_string()).collect()
                };
                (trimmed[..open].trim(), args)
            }
            None => (trimmed, Vec::new()),
        };

        let valid_name = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if !valid_name {
            return Err(malformed());
        }

        Ok(Self::new(name, args))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SpecificationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.args.join(","))
        }
    }
}
