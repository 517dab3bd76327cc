//! Command handlers for the metafacet binary

pub mod columns;
pub mod inspect;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use metafacet::config::{with_env_overrides, Config, ConfigWarning};
use metafacet::domain::entities::Metamodel;
use metafacet::presentation::factory::create_build_use_case;
use metafacet::presentation::{create_renderer, OutputFormat, ReportRenderer};

/// Flags shared by every subcommand
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions<'a> {
    pub json: bool,
    pub verbose: u8,
    pub ascii: bool,
    pub config: Option<&'a Path>,
}

impl GlobalOptions<'_> {
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        create_renderer(
            OutputFormat::from_json_flag(self.json),
            !self.ascii,
            self.verbose,
        )
    }
}

/// Explicit `--config`, else `metafacet.toml` beside the model, else user config
pub fn load_config(model: &Path, options: &GlobalOptions<'_>) -> Result<Config> {
    let (config, warnings) = match options.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (
                with_env_overrides(config, |key| std::env::var(key).ok()),
                warnings,
            )
        }
        None => Config::load_or_default(model.parent()),
    };
    print_config_warnings(&warnings, options.json);
    Ok(config)
}

fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    if json {
        return;
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}

/// Load declarations from `model` and build the metamodel
pub fn build_model(model: &Path, config: &Config) -> Result<std::sync::Arc<Metamodel>> {
    create_build_use_case(config)
        .execute(model)
        .with_context(|| format!("failed to build metamodel from {}", model.display()))
}
