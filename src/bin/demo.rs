// lite-test demo: declares a handful of tests and runs them.
// Usage: cargo run --bin lite-test-demo -- [--color never] [--no-catch-panics]
//
// Exits non-zero because `bad` and `a` fail on purpose.

use lite_test::{assert_equal, assert_fail, assert_false, assert_true, lite_test};

lite_test! {
    fn ok() {
        assert_equal!(2 + 2, 4);
    }
}

lite_test! {
    fn bad() {
        assert_true!(1 == 2);
    }
}

lite_test! {
    /// Fails first, to show the next test is unaffected.
    fn a() {
        assert_fail!("a always fails");
    }
}

lite_test! {
    fn b() {
        let words = "lite test".split(' ').count();
        assert_false!(words == 0);
        assert_equal!(words, 2);
    }
}

fn main() -> miette::Result<()> {
    lite_test::cli::run()
}
