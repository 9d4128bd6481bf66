//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use outcomes::{BasicProblem, Outcome};
use proptest::test_runner::Config as ProptestConfig;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Proptest configuration with a fixed case count and no failure persistence.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

/// A failed outcome carrying a [`BasicProblem`].
pub fn fail<T>(detail: impl Into<String>) -> Outcome<T> {
    Outcome::fail(BasicProblem::new(detail.into()))
}

macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST START ===");
    };
}

macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST COMPLETE ===");
    };
}

macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let passed: bool = $cond;
        if !passed {
            tracing::error!(
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
