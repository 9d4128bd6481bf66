//! Interop error type.
//!
//! Problems are data, not errors. When an outcome has to leave the outcome
//! world, for example into a function returning `Result<_, Box<dyn Error>>`,
//! [`ProblemError`] carries the shared problem as a [`std::error::Error`].

use thiserror::Error;

use crate::types::{Problem, ProblemRef};

/// A problem surfaced as a standard error.
#[derive(Debug, Clone, Error)]
#[error("{problem}")]
pub struct ProblemError {
    problem: ProblemRef,
}

impl ProblemError {
    /// Wraps a shared problem.
    #[must_use]
    pub const fn new(problem: ProblemRef) -> Self {
        Self { problem }
    }

    /// The wrapped problem.
    #[must_use]
    pub const fn problem(&self) -> &ProblemRef {
        &self.problem
    }

    /// The detail of the wrapped problem.
    #[must_use]
    pub fn detail(&self) -> &str {
        self.problem.detail()
    }

    /// Returns true if the wrapped problem is of type `P`.
    #[must_use]
    pub fn is<P: Problem>(&self) -> bool {
        self.problem.is::<P>()
    }

    /// Unwraps the shared problem.
    #[must_use]
    pub fn into_problem(self) -> ProblemRef {
        self.problem
    }
}

impl From<ProblemRef> for ProblemError {
    fn from(problem: ProblemRef) -> Self {
        Self::new(problem)
    }
}
