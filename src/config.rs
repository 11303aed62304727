//! Run configuration.
//!
//! Precedence, lowest to highest: [`RunConfig::default`], environment
//! variables (`LITE_TEST_COLOR`, `LITE_TEST_CATCH_PANICS`), then CLI flags.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use termcolor::ColorChoice;

use crate::errors::HarnessError;

pub const COLOR_ENV: &str = "LITE_TEST_COLOR";
pub const CATCH_PANICS_ENV: &str = "LITE_TEST_CATCH_PANICS";
pub const LOG_ENV: &str = "LITE_TEST_LOG";

/// When to color the `[PASS]` / `[FAIL]` tags on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves `Auto` against the current stdout.
    pub fn color_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl FromStr for ColorMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(HarnessError::invalid_config(
                COLOR_ENV,
                s,
                "auto, always, never",
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

/// Configuration for a single runner invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub color: ColorMode,
    /// Convert a panicking test body into a failed test instead of ending the run.
    pub catch_panics: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            catch_panics: true,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(COLOR_ENV) {
            config.color = value.parse()?;
        }
        if let Some(value) = lookup(CATCH_PANICS_ENV) {
            config.catch_panics = parse_flag(CATCH_PANICS_ENV, &value)?;
        }
        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, HarnessError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HarnessError::invalid_config(
            key,
            value,
            "1, 0, true, false, yes, no, on, off",
        )),
    }
}
