//! Logging setup for the binary
//!
//! Library code only emits `tracing` events; the CLI installs one fmt
//! subscriber writing to stderr. `RUST_LOG` wins over both `-v` and the
//! configured verbosity.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive for a `-v` count, falling back to the configured verbosity
pub fn filter_directive(verbose: u8, configured: Verbosity) -> &'static str {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbose: u8, configured: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
