//! Error types for lite-test.
//!
//! Two kinds of failure flow through the harness:
//!
//! - [`AssertionFailure`] is the structured signal a failing assertion macro
//!   returns out of a test body. It is expected, local to one test, and always
//!   reported by the runner without aborting the run.
//! - [`HarnessError`] covers problems with the harness itself: bad
//!   configuration values and the "tests failed" outcome the CLI reports.
//!
//! Both derive `thiserror::Error` and `miette::Diagnostic`, so a host program
//! can surface them through `miette::Result`.

use miette::Diagnostic;
use thiserror::Error;

/// The failure value produced by `assert_true!`, `assert_equal!` and friends.
///
/// `Display` renders `<file>:<line>: <description>`, which is exactly the text
/// the runner prints after the `[FAIL] ` tag.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{file}:{line}: {description}")]
#[diagnostic(code(lite_test::assertion))]
pub struct AssertionFailure {
    /// Source file of the failing assertion, as reported by `file!()`.
    pub file: &'static str,
    /// Source line of the failing assertion, as reported by `line!()`.
    pub line: u32,
    /// Human-readable description, e.g. `ASSERT_TRUE(1 == 2)`.
    pub description: String,
}

impl AssertionFailure {
    pub fn new(file: &'static str, line: u32, description: impl Into<String>) -> Self {
        Self {
            file,
            line,
            description: description.into(),
        }
    }
}

/// Errors raised by the harness rather than by a test body.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("invalid value {value:?} for {key}")]
    #[diagnostic(code(lite_test::config::invalid))]
    InvalidConfig {
        key: &'static str,
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} of {total} tests failed")]
    #[diagnostic(
        code(lite_test::run::failed),
        help("see the [FAIL] lines above for the failing assertions")
    )]
    TestsFailed { failed: usize, total: usize },
}

impl HarnessError {
    pub(crate) fn invalid_config(key: &'static str, value: &str, expected: &str) -> Self {
        Self::InvalidConfig {
            key,
            value: value.to_string(),
            help: Some(format!("expected one of: {expected}")),
        }
    }
}
