//! Logging bootstrap and assertion macros for tests.
//!
//! Every test starts with [`init_test_logging`] and a
//! [`test_phase!`](crate::test_phase) marker, asserts with
//! [`assert_with_log!`](crate::assert_with_log) so failures leave a
//! structured record, and ends with [`test_complete!`](crate::test_complete).

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per process.
///
/// Logs at `debug` and above through the libtest capture writer.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Marks the start of a test.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        ::tracing::info!(test = $name, "=== TEST START ===");
    };
}

/// Marks the successful end of a test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        ::tracing::info!(test = $name, "=== TEST COMPLETE ===");
    };
}

/// Asserts `cond`, logging the expected and actual values on failure.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let passed: bool = $cond;
        if !passed {
            ::tracing::error!(
                check = %$msg,
                expected = ?$expected,
                actual = ?$actual,
                "Assertion failed"
            );
        }
        assert!(
            passed,
            "{}: expected {:?}, actual {:?}",
            $msg, $expected, $actual
        );
    }};
}
