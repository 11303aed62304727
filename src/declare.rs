//! Self-registering test declarations.
//!
//! `lite_test!` defines an ordinary function returning [`TestResult`] and
//! submits a static [`TestDescriptor`] for it through `inventory`. The
//! descriptors are linked into the binary and collected before `main` runs,
//! so a declared test needs no explicit registration call anywhere.
//!
//! ```rust
//! use lite_test::{assert_equal, lite_test};
//!
//! lite_test! {
//!     fn addition() {
//!         assert_equal!(2 + 2, 4);
//!     }
//!
//!     fn subtraction() {
//!         assert_equal!(4 - 2, 2);
//!     }
//! }
//!
//! assert!(addition().is_ok());
//! assert!(subtraction().is_ok());
//! ```
//!
//! Collection order across `inventory` submissions is unspecified, so
//! [`declared`] sorts by file path, then by the line of the `lite_test!` call,
//! then by position inside that call. Tests in the same file therefore run in
//! the order they are written.
//!
//! A user macro that expands several separate `lite_test!` calls gives them
//! all the line of its own call site and position zero. Those tests fall back
//! to name order. Put them in one `lite_test!` call to keep written order.

use crate::registry::{SourceLocation, TestResult};

/// Static record of one declared test.
#[derive(Debug)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub file: &'static str,
    pub line: u32,
    /// Position of the test inside its `lite_test!` call.
    pub index: u32,
    pub func: fn() -> TestResult,
}

impl TestDescriptor {
    pub const fn new(
        name: &'static str,
        file: &'static str,
        line: u32,
        index: u32,
        func: fn() -> TestResult,
    ) -> Self {
        Self {
            name,
            file,
            line,
            index,
            func,
        }
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.file,
            line: self.line,
        }
    }

    fn order_key(&self) -> (SourceLocation, u32, &'static str) {
        (self.location(), self.index, self.name)
    }
}

inventory::collect!(TestDescriptor);

/// Every declared test, ordered by source location.
pub fn declared() -> Vec<&'static TestDescriptor> {
    let mut descriptors: Vec<_> = inventory::iter::<TestDescriptor>.into_iter().collect();
    descriptors.sort_by_key(|d| d.order_key());
    descriptors
}

/// Declares one or more tests that register themselves before `main`.
///
/// Each body is an ordinary block. Assertion macros inside it return early
/// from the generated function; reaching the end of the block means the test
/// passed. Doc comments and attributes are forwarded to the function.
///
/// Tests declared in one invocation keep their written order.
#[macro_export]
macro_rules! lite_test {
    (@declare [$index:expr]) => {};
    (
        @declare [$index:expr]
        $(#[$meta:meta])* $vis:vis fn $name:ident() $body:block
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[allow(unreachable_code)]
        $vis fn $name() -> $crate::TestResult {
            $body
            ::core::result::Result::Ok(())
        }

        $crate::inventory::submit! {
            $crate::TestDescriptor::new(
                ::core::stringify!($name),
                ::core::file!(),
                ::core::line!(),
                $index,
                $name,
            )
        }

        $crate::lite_test! { @declare [$index + 1] $($rest)* }
    };
    (@declare [$index:expr] $($unexpected:tt)+) => {
        ::core::compile_error!("lite_test! expects `fn name() { ... }` items");
    };
    ($($tests:tt)+) => {
        $crate::lite_test! { @declare [0] $($tests)+ }
    };
}
