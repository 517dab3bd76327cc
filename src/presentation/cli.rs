//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --ascii) are inherited by all subcommands
//! - Every subcommand takes the model declaration file as its first argument

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// metafacet - domain-object metamodel inspector
#[derive(Parser, Debug)]
#[command(name = "metafacet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to metafacet.toml next to the model, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain ASCII icons instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the metamodel and show every feature with its facets
    Inspect {
        /// Model declaration file (.toml, .yaml or .yml)
        model: PathBuf,

        /// Only features whose identity contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show the storage columns of every property with value semantics
    Columns {
        /// Model declaration file (.toml, .yaml or .yml)
        model: PathBuf,
    },

    /// Check a candidate value against a feature's must-satisfy rules
    ///
    /// Exits with status 1 when the value is rejected.
    Validate {
        /// Model declaration file (.toml, .yaml or .yml)
        model: PathBuf,

        /// Feature to validate: Class#member or Class#action(Type,...)
        feature: String,

        /// Candidate value: integer, decimal, true/false, "<amount> <CUR>" or text
        value: String,
    },
}

impl Commands {
    /// Model declaration file the command reads
    pub fn model(&self) -> &Path {
        match self {
            Commands::Inspect { model, .. }
            | Commands::Columns { model }
            | Commands::Validate { model, .. } => model,
        }
    }
}
