//! Defines the command-line arguments for programs hosting the runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

use crate::config::{ColorMode, RunConfig};

/// Arguments accepted by [`crate::cli::run`].
#[derive(Debug, Parser)]
#[command(
    name = "lite-test",
    version,
    about = "Run every registered lite-test test and report pass/fail."
)]
pub struct LiteTestArgs {
    /// When to color the [PASS]/[FAIL] tags (overrides LITE_TEST_COLOR).
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Let a panicking test abort the whole run instead of failing just that test.
    #[arg(long)]
    pub no_catch_panics: bool,
}

impl LiteTestArgs {
    /// Applies explicitly given flags on top of `config`.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.no_catch_panics {
            config.catch_panics = false;
        }
    }
}
