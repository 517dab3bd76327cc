//! Validate command handler

use std::path::Path;

use anyhow::Result;

use metafacet::application::validate_candidate;
use metafacet::config::Config;

use super::{build_model, GlobalOptions};

/// `Ok(false)` when the candidate was rejected
pub fn cmd_validate(
    model: &Path,
    feature: &str,
    value: &str,
    config: &Config,
    options: &GlobalOptions<'_>,
) -> Result<bool> {
    let metamodel = build_model(model, config)?;

    let report = validate_candidate(&metamodel, feature, value)?;
    print!("{}", options.renderer().render_validation(&report));
    if options.json {
        println!();
    }
    Ok(report.valid)
}
