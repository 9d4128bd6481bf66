//! Resolution with handlers chosen by the concrete problem type.
//!
//! ```
//! use outcomes::{BasicProblem, Outcome, Problem, ProblemAggregate};
//!
//! let outcome: Outcome<u32> = Outcome::fail(BasicProblem::new("timeout"));
//! let status = outcome
//!     .resolve_typed(|_| 200)
//!     .on::<ProblemAggregate>(|_| 207)
//!     .on::<BasicProblem>(|p| if p.detail() == "timeout" { 504 } else { 500 })
//!     .otherwise(|_| 500);
//! assert_eq!(status, 504);
//! ```

use super::outcome::Outcome;
use super::problem::{Problem, ProblemRef};

/// An outcome being resolved with per-type problem handlers.
///
/// Created by [`Outcome::resolve_typed`]. Handlers registered with
/// [`on`](Self::on) are tried in order; the first whose type matches the
/// problem produces the result. [`otherwise`](Self::otherwise) supplies the
/// fallback and yields the final value.
#[derive(Debug)]
#[must_use = "call `otherwise` to finish resolving"]
pub struct ProblemDispatch<R> {
    state: Dispatch<R>,
}

#[derive(Debug)]
enum Dispatch<R> {
    Resolved(R),
    Unhandled(ProblemRef),
}

impl<R> ProblemDispatch<R> {
    const fn resolved(value: R) -> Self {
        Self {
            state: Dispatch::Resolved(value),
        }
    }

    const fn unhandled(problem: ProblemRef) -> Self {
        Self {
            state: Dispatch::Unhandled(problem),
        }
    }

    /// Handles the problem if its concrete type is `P`.
    pub fn on<P: Problem>(self, handler: impl FnOnce(&P) -> R) -> Self {
        match self.state {
            Dispatch::Unhandled(problem) => match problem.downcast_ref::<P>() {
                Some(typed) => Self::resolved(handler(typed)),
                None => Self::unhandled(problem),
            },
            resolved @ Dispatch::Resolved(_) => Self { state: resolved },
        }
    }

    /// Finishes resolution, handling any problem no typed handler matched.
    pub fn otherwise(self, fallback: impl FnOnce(ProblemRef) -> R) -> R {
        match self.state {
            Dispatch::Resolved(value) => value,
            Dispatch::Unhandled(problem) => fallback(problem),
        }
    }

    /// Returns true once a value has been produced.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, Dispatch::Resolved(_))
    }
}

impl<T> Outcome<T> {
    /// Starts resolving with handlers chosen by problem type.
    pub fn resolve_typed<R>(self, on_success: impl FnOnce(T) -> R) -> ProblemDispatch<R> {
        self.resolve(
            |value| ProblemDispatch::resolved(on_success(value)),
            ProblemDispatch::unhandled,
        )
    }
}
