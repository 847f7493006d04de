//! Command-line front end for docrank.
//!
//! `docrank extract` turns a directory of PDFs into a corpus file,
//! `docrank rank` writes one `output_case<N>.json` per persona task, and
//! `docrank run` does both.

pub mod cli;
pub mod commands;
pub mod provider;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
