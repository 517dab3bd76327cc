//! Configuration module for metafacet
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (METAFACET_*)
//! 3. Project config (metafacet.toml in the project root)
//! 4. User config (<config dir>/metafacet/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    Config, EventBusKind, EventsConfig, FactoriesConfig, MappingConfig, OutputConfig, Verbosity,
};
