//! Assertion macros for test bodies.
//!
//! Every macro here either does nothing or performs an early
//! `return Err(..)` carrying an [`AssertionFailure`](crate::AssertionFailure)
//! built from the call site's `file!()` / `line!()`. Nothing after a failing
//! assertion in the same function runs.
//!
//! The macros can be used in any function whose error type implements
//! `From<AssertionFailure>`: `lite_test!` bodies, helpers returning
//! [`TestResult`](crate::TestResult) (compose them with `?`), or closures
//! registered directly with a [`Registry`](crate::Registry).
//!
//! Failure is signalled by return value only. An assertion inside a spawned
//! thread or a nested closure returns from *that* closure; its result must be
//! propagated back into the test body (e.g. `handle.join().unwrap()?`) to fail
//! the test.
//!
//! | Macro                       | Description on failure        |
//! |-----------------------------|-------------------------------|
//! | `assert_true!(c)`           | `ASSERT_TRUE(c)`              |
//! | `assert_false!(c)`          | `ASSERT_TRUE(!(c))`           |
//! | `assert_equal!(a, b)`       | `ASSERT_TRUE((a) == (b))`     |
//! | `assert_not_equal!(a, b)`   | `ASSERT_TRUE((a) != (b))`     |
//! | `assert_fail!(fmt, ..)`     | the formatted message         |
//!
//! All but `assert_fail!` accept an optional trailing format message, appended
//! after `": "`.

#[doc(hidden)]
#[macro_export]
macro_rules! __lite_test_fail {
    ($description:expr) => {
        return ::core::result::Result::Err(::core::convert::From::from(
            $crate::AssertionFailure::new(::core::file!(), ::core::line!(), $description),
        ))
    };
}

/// Fails the current test unless `cond` is true.
///
/// An optional trailing format message is appended to the description.
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::__lite_test_fail!(::std::format!(
                "ASSERT_TRUE({})",
                ::core::stringify!($cond)
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__lite_test_fail!(::std::format!(
                "ASSERT_TRUE({}): {}",
                ::core::stringify!($cond),
                ::std::format_args!($($arg)+)
            ));
        }
    };
}

/// Fails the current test unless `cond` is false.
///
/// Described as the `assert_true!` it stands for: `ASSERT_TRUE(!(cond))`.
#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {
        if $cond {
            $crate::__lite_test_fail!(::std::format!(
                "ASSERT_TRUE(!({}))",
                ::core::stringify!($cond)
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::__lite_test_fail!(::std::format!(
                "ASSERT_TRUE(!({})): {}",
                ::core::stringify!($cond),
                ::std::format_args!($($arg)+)
            ));
        }
    };
}

/// Fails the current test unless `left == right`.
///
/// The description is `ASSERT_TRUE((left) == (right))`. Values only appear
/// through the optional trailing message.
#[macro_export]
macro_rules! assert_equal {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    $crate::__lite_test_fail!(::std::format!(
                        "ASSERT_TRUE(({}) == ({}))",
                        ::core::stringify!($left),
                        ::core::stringify!($right)
                    ));
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    $crate::__lite_test_fail!(::std::format!(
                        "ASSERT_TRUE(({}) == ({})): {}",
                        ::core::stringify!($left),
                        ::core::stringify!($right),
                        ::std::format_args!($($arg)+)
                    ));
                }
            }
        }
    };
}

/// Fails the current test if `left == right`.
///
/// The description is `ASSERT_TRUE((left) != (right))`.
#[macro_export]
macro_rules! assert_not_equal {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val != *right_val) {
                    $crate::__lite_test_fail!(::std::format!(
                        "ASSERT_TRUE(({}) != ({}))",
                        ::core::stringify!($left),
                        ::core::stringify!($right)
                    ));
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val != *right_val) {
                    $crate::__lite_test_fail!(::std::format!(
                        "ASSERT_TRUE(({}) != ({})): {}",
                        ::core::stringify!($left),
                        ::core::stringify!($right),
                        ::std::format_args!($($arg)+)
                    ));
                }
            }
        }
    };
}

/// Fails the current test unconditionally with a formatted message.
#[macro_export]
macro_rules! assert_fail {
    ($($arg:tt)+) => {
        $crate::__lite_test_fail!(::std::format!($($arg)+))
    };
}
