//! Inspect command handler

use std::path::Path;

use anyhow::Result;

use metafacet::application::InspectReport;
use metafacet::config::Config;

use super::{build_model, GlobalOptions};

pub fn cmd_inspect(
    model: &Path,
    filter: Option<&str>,
    config: &Config,
    options: &GlobalOptions<'_>,
) -> Result<()> {
    let metamodel = build_model(model, config)?;

    let report = InspectReport::from_metamodel(&metamodel).filtered(filter);
    print!("{}", options.renderer().render_inspect(&report));
    if options.json {
        println!();
    }
    Ok(())
}
