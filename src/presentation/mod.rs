//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use metafacet::config::Config;
//! use metafacet::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&Config::default());
//! let model = use_case.execute(Path::new("model.toml"))?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_build_use_case, create_builder};
pub use output::{create_renderer, OutputFormat, ReportRenderer};
