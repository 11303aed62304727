// Runtime registration into the process-wide registry, after declared tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lite_test::cli::output::OutputBuffer;
use lite_test::{assert_equal, assert_true, lite_test, ColorMode, RunConfig, Summary};

lite_test! {
    fn declared_first() {
        assert_true!(true);
    }
}

#[test]
fn registered_tests_follow_declared_ones_and_late_registrations_wait_a_run() {
    let config = RunConfig {
        color: ColorMode::Never,
        catch_panics: true,
    };

    lite_test::register("runtime_pass", || {
        assert_equal!("a".repeat(3), "aaa");
        Ok(())
    });

    let nested = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&nested);
    lite_test::register("registers_more", move || {
        // Only the first execution registers the extra test.
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            lite_test::register("added_during_run", || Ok(()));
        }
        Ok(())
    });

    let mut first = OutputBuffer::new();
    let summary = lite_test::run_all_with(&config, &mut first);
    assert_eq!(summary, Summary { passed: 3, failed: 0 });
    assert_eq!(
        first.lines(),
        [
            "[PASS] declared_first",
            "[PASS] runtime_pass",
            "[PASS] registers_more",
            "Summary: 3 passed, 0 failed"
        ]
    );

    let mut second = OutputBuffer::new();
    let summary = lite_test::run_all_with(&config, &mut second);
    assert_eq!(summary, Summary { passed: 4, failed: 0 });
    assert_eq!(second.lines().last().copied(), Some("Summary: 4 passed, 0 failed"));
    assert_eq!(second.lines()[3], "[PASS] added_during_run");
    assert_eq!(nested.load(Ordering::SeqCst), 2);
}
