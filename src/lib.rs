//! # lite-test
//!
//! A minimal self-registering unit-test harness.
//!
//! - Declare tests with [`lite_test!`]; they register themselves before `main`.
//! - Check conditions with [`assert_true!`], [`assert_false!`],
//!   [`assert_equal!`], [`assert_not_equal!`] and [`assert_fail!`]. A failing
//!   assertion ends the current test body only.
//! - Run everything with [`run_all`] (or [`cli::run`] for a ready-made
//!   `main`), which prints one line per test plus a summary and returns the
//!   [`Summary`] counts.
//!
//! ```rust,no_run
//! use lite_test::{assert_equal, assert_true, lite_test};
//!
//! lite_test! {
//!     fn ok() {
//!         assert_equal!(2 + 2, 4);
//!     }
//! }
//!
//! lite_test! {
//!     fn bad() {
//!         assert_true!(1 == 2);
//!     }
//! }
//!
//! let summary = lite_test::run_all();
//! assert_eq!((summary.passed, summary.failed), (1, 1));
//! ```

pub use crate::config::{ColorMode, RunConfig};
pub use crate::declare::TestDescriptor;
pub use crate::errors::{AssertionFailure, HarnessError};
pub use crate::registry::{register, snapshot, Registry, SourceLocation, TestEntry, TestResult};
pub use crate::test::runner::{run_all, run_all_with, Runner};
pub use crate::test::{Outcome, Summary};

#[doc(hidden)]
pub use inventory;

mod assertions;
pub mod cli;
pub mod config;
pub mod declare;
pub mod errors;
pub mod registry;
