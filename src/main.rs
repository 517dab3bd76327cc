//! metafacet CLI - build and query a domain metamodel
//!
//! Usage: metafacet <COMMAND>
//!
//! Commands:
//!   inspect   Show every feature with its facets and diagnostics
//!   columns   Show the storage columns of mapped properties
//!   validate  Check a value against a feature's rules

mod commands;

use anyhow::Result;
use clap::Parser;

use metafacet::presentation::{Cli, Commands};

use commands::GlobalOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = GlobalOptions {
        json: cli.json,
        verbose: cli.verbose,
        ascii: cli.ascii,
        config: cli.config.as_deref(),
    };

    let config = commands::load_config(cli.command.model(), &options)?;
    metafacet::logging::init(cli.verbose, config.output.verbosity);

    match &cli.command {
        Commands::Inspect { model, filter } => {
            commands::inspect::cmd_inspect(model, filter.as_deref(), &config, &options)
        }
        Commands::Columns { model } => commands::columns::cmd_columns(model, &config, &options),
        Commands::Validate {
            model,
            feature,
            value,
        } => {
            let valid =
                commands::validate::cmd_validate(model, feature, value, &config, &options)?;
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
