//! The two-valued outcome type.
//!
//! An [`Outcome<T>`] holds either a value or a shared problem. There is no
//! third state: a problem outcome without a problem cannot be constructed.
//!
//! [`Outcome::resolve`] is the only primitive that inspects an outcome on
//! behalf of the combinators; everything in [`crate::combinator`] is written
//! in terms of it, which keeps short-circuiting uniform across the library.
//!
//! The "nothing to report" outcome is `Outcome<()>`; see
//! [`Outcome::NO_PROBLEM`].

use core::fmt;

use super::problem::{IntoProblem, ProblemRef};
use crate::error::ProblemError;

/// Either a successful value or a problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may hold a problem that should be resolved"]
pub enum Outcome<T> {
    /// The computation succeeded with a value.
    Ok(T),
    /// The computation failed with a problem.
    Problem(ProblemRef),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a problem outcome from a concrete problem or a shared one.
    pub fn fail(problem: impl IntoProblem) -> Self {
        Self::Problem(problem.into_problem())
    }

    /// Resolves the outcome by invoking exactly one of the two functions.
    pub fn resolve<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_problem: impl FnOnce(ProblemRef) -> R,
    ) -> R {
        match self {
            Self::Ok(value) => on_success(value),
            Self::Problem(problem) => on_problem(problem),
        }
    }

    /// Returns true if this outcome holds a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true if this outcome holds a problem.
    #[must_use]
    pub const fn is_problem(&self) -> bool {
        matches!(self, Self::Problem(_))
    }

    /// The value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Problem(_) => None,
        }
    }

    /// The problem, if any.
    #[must_use]
    pub const fn problem(&self) -> Option<&ProblemRef> {
        match self {
            Self::Ok(_) => None,
            Self::Problem(problem) => Some(problem),
        }
    }

    /// Borrows the value, sharing the problem handle.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Problem(problem) => Outcome::Problem(ProblemRef::clone(problem)),
        }
    }

    /// Converts into a `Result` with the shared problem as the error.
    pub fn into_result(self) -> Result<T, ProblemRef> {
        self.resolve(Ok, Err)
    }

    /// Converts into a `Result` whose error implements [`std::error::Error`].
    pub fn into_error_result(self) -> Result<T, ProblemError> {
        self.resolve(Ok, |problem| Err(ProblemError::new(problem)))
    }

    /// Builds an outcome from a `Result` whose error is already a problem.
    pub fn from_result<E: IntoProblem>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(problem) => Self::fail(problem),
        }
    }
}

impl Outcome<()> {
    /// Success with nothing to report.
    pub const NO_PROBLEM: Self = Self::Ok(());

    /// Returns [`Outcome::NO_PROBLEM`].
    pub const fn no_problem() -> Self {
        Self::NO_PROBLEM
    }
}

impl Default for Outcome<()> {
    fn default() -> Self {
        Self::NO_PROBLEM
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::Ok(value)
    }
}

impl<T> From<Outcome<T>> for Result<T, ProblemRef> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Problem(problem) => write!(f, "Problem({problem})"),
        }
    }
}
