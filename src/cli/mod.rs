//! The lite-test command-line entry point.
//!
//! A host program that wants a ready-made `main` declares its tests with
//! `lite_test!` and calls [`run`]:
//!
//! ```rust,no_run
//! fn main() -> miette::Result<()> {
//!     lite_test::cli::run()
//! }
//! ```
//!
//! stdout carries only the report lines; logs and the final error go to stderr.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::LiteTestArgs;
use crate::cli::output::StdoutSink;
use crate::config::{RunConfig, LOG_ENV};
use crate::errors::HarnessError;
use crate::test::runner::run_all_with;

pub mod args;
pub mod output;

/// Parses the process arguments and runs every registered test.
///
/// Returns [`HarnessError::TestsFailed`] when any test failed, so a `main`
/// returning `miette::Result` exits with a non-zero status.
pub fn run() -> miette::Result<()> {
    run_with_args(LiteTestArgs::parse())
}

pub fn run_with_args(args: LiteTestArgs) -> miette::Result<()> {
    init_tracing();

    let mut config = RunConfig::from_env()?;
    args.apply(&mut config);
    tracing::debug!(?config, "resolved run configuration");

    let mut sink = StdoutSink::new(config.color);
    let summary = run_all_with(&config, &mut sink);

    if summary.has_failures() {
        return Err(HarnessError::TestsFailed {
            failed: summary.failed,
            total: summary.total(),
        }
        .into());
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
