//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policies::{MissingValuePolicy, WrapperPolicy};
use crate::error::MetamodelResult;

use super::loader::{self, ConfigWarning};

/// Column types and read policy for the built-in field mappers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default = "default_money_amount_type")]
    pub money_amount_type: String,

    #[serde(default = "default_money_currency_type")]
    pub money_currency_type: String,

    #[serde(default = "default_text_type")]
    pub text_type: String,

    #[serde(default = "default_integer_type")]
    pub integer_type: String,

    #[serde(default = "default_decimal_type")]
    pub decimal_type: String,

    #[serde(default = "default_boolean_type")]
    pub boolean_type: String,

    /// Absent column or partially NULL multi-column value
    #[serde(default)]
    pub missing_value: MissingValuePolicy,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            money_amount_type: default_money_amount_type(),
            money_currency_type: default_money_currency_type(),
            text_type: default_text_type(),
            integer_type: default_integer_type(),
            decimal_type: default_decimal_type(),
            boolean_type: default_boolean_type(),
            missing_value: MissingValuePolicy::default(),
        }
    }
}

fn default_money_amount_type() -> String {
    "DECIMAL(21,2)".to_string()
}

fn default_money_currency_type() -> String {
    "VARCHAR(3)".to_string()
}

fn default_text_type() -> String {
    "VARCHAR(255)".to_string()
}

fn default_integer_type() -> String {
    "BIGINT".to_string()
}

fn default_decimal_type() -> String {
    "DOUBLE".to_string()
}

fn default_boolean_type() -> String {
    "BOOLEAN".to_string()
}

/// Where posted property-changed events go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusKind {
    /// Drop events
    None,
    /// Log each event through `tracing`
    #[default]
    Log,
}

/// Event posting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventsConfig {
    /// Applied when an event annotation declares no policy
    #[serde(default)]
    pub default_policy: WrapperPolicy,

    #[serde(default)]
    pub bus: EventBusKind,
}

/// Factory chain configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FactoriesConfig {
    /// Factory names to skip; the order of the rest is fixed
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub events: EventsConfig,

    #[serde(default)]
    pub factories: FactoriesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MetamodelResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MetamodelResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (METAFACET_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
