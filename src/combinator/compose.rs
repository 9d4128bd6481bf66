//! Core composition combinators.
//!
//! Each combinator consumes the outcome and either continues the success
//! branch or passes the problem through untouched. A problem never causes a
//! success-side closure to run.
//!
//! ```
//! use outcomes::{BasicProblem, Outcome};
//!
//! let shipped = Outcome::ok(3_u32)
//!     .ensure(|qty| *qty > 0, |_| BasicProblem::new("empty order"))
//!     .bind(|qty| if qty <= 5 { Outcome::ok(qty * 10) } else { Outcome::fail(BasicProblem::new("too many")) })
//!     .then_unit(|total| if *total < 100 { Outcome::NO_PROBLEM } else { Outcome::fail(BasicProblem::new("over limit")) })
//!     .map(|total| format!("charged {total}"));
//! assert_eq!(shipped, Outcome::ok("charged 30".to_owned()));
//! ```

use crate::types::{IntoProblem, Outcome, ProblemRef};

impl<T> Outcome<T> {
    /// Transforms the value; problems pass through unchanged.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Outcome<R> {
        self.resolve(|value| Outcome::Ok(f(value)), Outcome::Problem)
    }

    /// Continues with a step that may itself fail.
    ///
    /// The factory runs only on success and its outcome is returned as-is.
    pub fn bind<R>(self, factory: impl FnOnce(T) -> Outcome<R>) -> Outcome<R> {
        self.resolve(factory, Outcome::Problem)
    }

    /// Alias for [`bind`](Self::bind).
    pub fn and_then<R>(self, factory: impl FnOnce(T) -> Outcome<R>) -> Outcome<R> {
        self.bind(factory)
    }

    /// Runs a validation or side-effect step that reports no value.
    ///
    /// On success the factory runs against the value. If it reports a
    /// problem, that problem is returned; otherwise the original outcome is
    /// returned unchanged.
    pub fn then_unit(self, factory: impl FnOnce(&T) -> Outcome<()>) -> Self {
        self.resolve(
            |value| factory(&value).map(|()| value),
            Outcome::Problem,
        )
    }

    /// Observes the value without changing the outcome.
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        self.resolve(
            |value| {
                action(&value);
                Outcome::Ok(value)
            },
            Outcome::Problem,
        )
    }

    /// Observes the problem without changing the outcome.
    pub fn on_problem(self, action: impl FnOnce(&ProblemRef)) -> Self {
        self.resolve(Outcome::Ok, |problem| {
            action(&problem);
            Outcome::Problem(problem)
        })
    }

    /// Turns a success into a problem when `predicate` rejects the value.
    pub fn ensure<P: IntoProblem>(
        self,
        predicate: impl FnOnce(&T) -> bool,
        problem: impl FnOnce(&T) -> P,
    ) -> Self {
        self.bind(|value| {
            if predicate(&value) {
                Outcome::Ok(value)
            } else {
                Outcome::fail(problem(&value))
            }
        })
    }

    /// Recovers from a problem accepted by `predicate` with a replacement value.
    pub fn rescue(
        self,
        predicate: impl FnOnce(&ProblemRef) -> bool,
        recover: impl FnOnce(ProblemRef) -> T,
    ) -> Self {
        self.resolve(Outcome::Ok, |problem| {
            if predicate(&problem) {
                Outcome::Ok(recover(problem))
            } else {
                Outcome::Problem(problem)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BasicProblem, Outcome, Problem, ProblemRef};
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    fn problem(detail: &'static str) -> ProblemRef {
        BasicProblem::new(detail).shared()
    }

    #[test]
    fn map_transforms_value() {
        init_test("map_transforms_value");
        let out = Outcome::ok(20).map(|v| v + 1).map(|v| v * 2);
        crate::assert_with_log!(out == Outcome::ok(42), "mapped", Outcome::ok(42), out);
        crate::test_complete!("map_transforms_value");
    }

    #[test]
    fn map_passes_the_same_problem_through() {
        init_test("map_passes_the_same_problem_through");
        let original = problem("x");
        let calls = Cell::new(0);
        let mut out: Outcome<i32> = Outcome::fail(Arc::clone(&original));
        for _ in 0..10 {
            out = out.map(|v| {
                calls.set(calls.get() + 1);
                v + 1
            });
        }
        let same = out.problem().is_some_and(|p| Arc::ptr_eq(p, &original));
        crate::assert_with_log!(same, "same allocation", true, same);
        crate::assert_with_log!(calls.get() == 0, "map never ran", 0, calls.get());
        crate::assert_with_log!(
            out == Outcome::fail(problem("x")),
            "equal to fresh problem",
            true,
            out == Outcome::fail(problem("x"))
        );
        crate::test_complete!("map_passes_the_same_problem_through");
    }

    #[test]
    fn bind_short_circuits_at_failing_step() {
        init_test("bind_short_circuits_at_failing_step");
        let steps = Cell::new(0);
        let step = |fail: bool| {
            let steps = &steps;
            move |v: i32| {
                steps.set(steps.get() + 1);
                if fail {
                    Outcome::fail(BasicProblem::new("step failed"))
                } else {
                    Outcome::ok(v + 1)
                }
            }
        };
        let out = Outcome::ok(0)
            .bind(step(false))
            .bind(step(false))
            .bind(step(true))
            .bind(step(false))
            .bind(step(false));
        crate::assert_with_log!(steps.get() == 3, "steps run", 3, steps.get());
        crate::assert_with_log!(
            out == Outcome::fail(problem("step failed")),
            "failing step problem",
            "step failed",
            out
        );
        crate::test_complete!("bind_short_circuits_at_failing_step");
    }

    #[test]
    fn and_then_matches_bind() {
        init_test("and_then_matches_bind");
        let f = |v: i32| Outcome::ok(v * 3);
        let a = Outcome::ok(2).bind(f);
        let b = Outcome::ok(2).and_then(f);
        crate::assert_with_log!(a == b, "alias", a, b);
        crate::test_complete!("and_then_matches_bind");
    }

    #[test]
    fn then_unit_returns_original_on_success() {
        init_test("then_unit_returns_original_on_success");
        let seen = Cell::new(0);
        let out = Outcome::ok(9).then_unit(|v| {
            seen.set(*v);
            Outcome::NO_PROBLEM
        });
        crate::assert_with_log!(out == Outcome::ok(9), "unchanged", Outcome::ok(9), out);
        crate::assert_with_log!(seen.get() == 9, "factory saw value", 9, seen.get());
        crate::test_complete!("then_unit_returns_original_on_success");
    }

    #[test]
    fn then_unit_surfaces_factory_problem() {
        init_test("then_unit_surfaces_factory_problem");
        let out = Outcome::ok("draft").then_unit(|_| Outcome::fail(BasicProblem::new("not published")));
        crate::assert_with_log!(
            out == Outcome::fail(problem("not published")),
            "factory problem",
            "not published",
            out
        );
        let untouched: Outcome<&str> = Outcome::fail(problem("earlier"));
        let calls = Cell::new(0);
        let out = untouched.then_unit(|_| {
            calls.set(calls.get() + 1);
            Outcome::NO_PROBLEM
        });
        crate::assert_with_log!(calls.get() == 0, "factory skipped", 0, calls.get());
        crate::assert_with_log!(
            out == Outcome::fail(problem("earlier")),
            "earlier problem kept",
            "earlier",
            out
        );
        crate::test_complete!("then_unit_surfaces_factory_problem");
    }

    #[test]
    fn hooks_observe_matching_branch_only() {
        init_test("hooks_observe_matching_branch_only");
        let log = RefCell::new(Vec::new());
        let ok = Outcome::ok(1)
            .on_success(|v| log.borrow_mut().push(format!("ok {v}")))
            .on_problem(|p| log.borrow_mut().push(format!("problem {}", p.detail())));
        let failed: Outcome<i32> = Outcome::fail(problem("bad"))
            .on_success(|v| log.borrow_mut().push(format!("ok {v}")))
            .on_problem(|p| log.borrow_mut().push(format!("problem {}", p.detail())));
        crate::assert_with_log!(ok == Outcome::ok(1), "ok unchanged", Outcome::ok(1), ok);
        crate::assert_with_log!(failed.is_problem(), "problem unchanged", true, failed.is_problem());
        let log = log.into_inner();
        crate::assert_with_log!(
            log == vec!["ok 1".to_owned(), "problem bad".to_owned()],
            "hook log",
            "[ok 1, problem bad]",
            log
        );
        crate::test_complete!("hooks_observe_matching_branch_only");
    }

    #[test]
    fn ensure_rejects_and_passes() {
        init_test("ensure_rejects_and_passes");
        let even = |v: &i32| v % 2 == 0;
        let odd_problem = |v: &i32| BasicProblem::new(format!("{v} is odd"));

        let rejected = Outcome::ok(3).ensure(even, odd_problem);
        crate::assert_with_log!(
            rejected == Outcome::fail(problem("3 is odd")),
            "rejected",
            "3 is odd",
            rejected
        );
        let passed = Outcome::ok(4).ensure(even, odd_problem);
        crate::assert_with_log!(passed == Outcome::ok(4), "passed", Outcome::ok(4), passed);

        let predicate_calls = Cell::new(0);
        let failed: Outcome<i32> = Outcome::fail(problem("earlier"));
        let still_failed = failed.ensure(
            |_| {
                predicate_calls.set(predicate_calls.get() + 1);
                true
            },
            odd_problem,
        );
        crate::assert_with_log!(predicate_calls.get() == 0, "predicate skipped", 0, predicate_calls.get());
        crate::assert_with_log!(still_failed.is_problem(), "still failed", true, still_failed.is_problem());
        crate::test_complete!("ensure_rejects_and_passes");
    }

    #[test]
    fn rescue_recovers_matching_problem() {
        init_test("rescue_recovers_matching_problem");
        let recovered: Outcome<u32> = Outcome::fail(problem("cache miss"))
            .rescue(|p| p.detail() == "cache miss", |_| 0);
        crate::assert_with_log!(recovered == Outcome::ok(0), "recovered", Outcome::ok(0), recovered);

        let kept: Outcome<u32> =
            Outcome::fail(problem("db down")).rescue(|p| p.detail() == "cache miss", |_| 0);
        crate::assert_with_log!(
            kept == Outcome::fail(problem("db down")),
            "not rescued",
            "db down",
            kept
        );

        let untouched = Outcome::ok(5_u32).rescue(|_| true, |_| 0);
        crate::assert_with_log!(untouched == Outcome::ok(5), "value kept", Outcome::ok(5), untouched);
        crate::test_complete!("rescue_recovers_matching_problem");
    }

    #[test]
    #[should_panic(expected = "success hook failed")]
    fn on_success_propagates_panics() {
        init_test("on_success_propagates_panics");
        let _ = Outcome::ok(1).on_success(|_| panic!("success hook failed"));
    }

    #[test]
    #[should_panic(expected = "problem hook failed")]
    fn on_problem_propagates_panics() {
        init_test("on_problem_propagates_panics");
        let _ = Outcome::<i32>::fail(problem("x")).on_problem(|_| panic!("problem hook failed"));
    }
}
