//! A problem composed of other problems.

use core::fmt;
use std::slice;

use super::problem::{Problem, ProblemRef};

/// Detail reported by every [`ProblemAggregate`].
pub const AGGREGATE_DETAIL: &str =
    "More than one problem occurred. Please see `problems()` for individual problem details.";

/// An ordered collection of problems reported as a single problem.
///
/// Produced by collect-all aggregation. Its detail is always
/// [`AGGREGATE_DETAIL`]; equality is structural over the ordered problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemAggregate {
    problems: Vec<ProblemRef>,
}

impl ProblemAggregate {
    /// Creates an aggregate over `problems`, keeping their order.
    #[must_use]
    pub fn new(problems: Vec<ProblemRef>) -> Self {
        Self { problems }
    }

    /// The aggregated problems, in the order they were reported.
    #[must_use]
    pub fn problems(&self) -> &[ProblemRef] {
        &self.problems
    }

    /// Number of aggregated problems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Returns true if no problems were aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Iterates over the aggregated problems.
    pub fn iter(&self) -> slice::Iter<'_, ProblemRef> {
        self.problems.iter()
    }

    /// Consumes the aggregate, returning the problems.
    #[must_use]
    pub fn into_problems(self) -> Vec<ProblemRef> {
        self.problems
    }
}

impl Problem for ProblemAggregate {
    fn detail(&self) -> &str {
        AGGREGATE_DETAIL
    }

    fn same_problem(&self, other: &dyn Problem) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| self.problems == o.problems)
    }
}

impl fmt::Display for ProblemAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{AGGREGATE_DETAIL} ({} problems)", self.problems.len())
    }
}

impl<'a> IntoIterator for &'a ProblemAggregate {
    type Item = &'a ProblemRef;
    type IntoIter = slice::Iter<'a, ProblemRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}

impl FromIterator<ProblemRef> for ProblemAggregate {
    fn from_iter<I: IntoIterator<Item = ProblemRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
