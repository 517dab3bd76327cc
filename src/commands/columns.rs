//! Columns command handler

use std::path::Path;

use anyhow::Result;

use metafacet::application::ColumnsReport;
use metafacet::config::Config;

use super::{build_model, GlobalOptions};

pub fn cmd_columns(model: &Path, config: &Config, options: &GlobalOptions<'_>) -> Result<()> {
    let metamodel = build_model(model, config)?;

    let report = ColumnsReport::from_metamodel(&metamodel);
    print!("{}", options.renderer().render_columns(&report));
    if options.json {
        println!();
    }
    Ok(())
}
