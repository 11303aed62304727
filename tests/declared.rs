// Tests declared with `lite_test!` and collected through the process-wide registry.
//
// Only one #[test] runs the global registry, so the default parallel test
// threads never interleave runs. The others read the snapshot or call the
// declared functions directly.

use std::sync::atomic::{AtomicUsize, Ordering};

use lite_test::cli::output::OutputBuffer;
use lite_test::{
    assert_equal, assert_fail, assert_false, assert_not_equal, assert_true, lite_test, ColorMode,
    RunConfig, Summary, TestResult,
};

static AFTER_FAILURE: AtomicUsize = AtomicUsize::new(0);
static EARLY_EXIT_RUNS: AtomicUsize = AtomicUsize::new(0);

fn line_of(needle: &str) -> usize {
    include_str!("declared.rs")
        .lines()
        .position(|line| line.contains(needle) && !line.contains("line_of("))
        .map(|index| index + 1)
        .unwrap()
}

lite_test! {
    fn arithmetic() {
        assert_equal!(2 + 2, 4);
        assert_not_equal!(2 + 2, 5);
    }
}

lite_test! {
    fn early_exit() {
        EARLY_EXIT_RUNS.fetch_add(1, Ordering::SeqCst);
        assert_true!(1 == 2);
        AFTER_FAILURE.fetch_add(1, Ordering::SeqCst);
    }
}

lite_test! {
    fn strings() {
        let greeting = format!("{}, {}", "hello", "world");
        assert_true!(greeting.starts_with("hello"));
        assert_false!(greeting.is_empty());
    }
}

lite_test! {
    fn uses_helpers() {
        within_range(5, 1, 10)?;
        within_range(50, 1, 10)?;
    }
}

lite_test! {
    fn unconditional() {
        assert_fail!("not implemented: {}", "parser");
    }
}

fn within_range(value: i32, low: i32, high: i32) -> TestResult {
    assert_true!(value >= low && value <= high, "{} outside {}..={}", value, low, high);
    Ok(())
}

fn plain() -> RunConfig {
    RunConfig {
        color: ColorMode::Never,
        catch_panics: true,
    }
}

#[test]
fn declared_tests_run_in_declaration_order_and_repeat_cleanly() {
    let mut first = OutputBuffer::new();
    let summary = lite_test::run_all_with(&plain(), &mut first);
    assert_eq!(summary, Summary { passed: 2, failed: 3 });

    let expected = format!(
        "[PASS] arithmetic\n\
         [FAIL] {file}:{early}: ASSERT_TRUE(1 == 2)\n\
         [FAIL] early_exit\n\
         [PASS] strings\n\
         [FAIL] {file}:{helper}: ASSERT_TRUE(value >= low && value <= high): 50 outside 1..=10\n\
         [FAIL] uses_helpers\n\
         [FAIL] {file}:{fail}: not implemented: parser\n\
         [FAIL] unconditional\n\
         Summary: 2 passed, 3 failed\n",
        file = file!(),
        early = line_of("assert_true!(1 == 2)"),
        helper = line_of("assert_true!(value >= low"),
        fail = line_of("assert_fail!(\"not implemented"),
    );
    assert_eq!(first.as_str(), expected);
    assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);

    let mut second = OutputBuffer::new();
    let again = lite_test::run_all_with(&plain(), &mut second);
    assert_eq!(again, summary);
    assert_eq!(second.as_str(), first.as_str());
    assert_eq!(EARLY_EXIT_RUNS.load(Ordering::SeqCst), 2);
    assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);
}

#[test]
fn declared_functions_can_be_called_directly() {
    assert!(arithmetic().is_ok());
    let failure = unconditional().unwrap_err();
    assert_eq!(failure.description, "not implemented: parser");
    assert_eq!(failure.file, file!());
}

#[test]
fn snapshot_lists_declared_tests_with_locations() {
    let entries = lite_test::snapshot();
    let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        ["arithmetic", "early_exit", "strings", "uses_helpers", "unconditional"]
    );
    let location = entries[0].location().unwrap();
    assert_eq!(location.file, file!());
    assert_eq!(location.line as usize, line_of("fn arithmetic()") - 1);
}
