//! Aggregation of many outcomes into one.
//!
//! Values are collected in input order. How problems are reported depends on
//! [`AggregateMode`]:
//!
//! | Mode | Problems seen | Result |
//! |------|---------------|--------|
//! | any | none | `Ok(values)` |
//! | `CollectAll` | one or more | `Problem(ProblemAggregate)` with every problem, in order |
//! | `BailEarly` | first one | that problem, unwrapped; the rest of the input is never pulled |
//!
//! The async counterpart over streams lives in [`crate::future::aggregate`].

use core::ops::ControlFlow;

use crate::tracing_compat::debug;
use crate::types::{Outcome, ProblemAggregate, ProblemRef};

/// How aggregation reacts to problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggregateMode {
    /// Consume every input and report all problems as a [`ProblemAggregate`].
    #[default]
    CollectAll,
    /// Stop at the first problem and report it alone.
    BailEarly,
}

impl AggregateMode {
    /// Returns true for [`AggregateMode::BailEarly`].
    #[must_use]
    pub const fn bails_early(self) -> bool {
        matches!(self, Self::BailEarly)
    }
}

/// Accumulator shared by the iterator and stream aggregations.
#[derive(Debug)]
pub(crate) struct Aggregator<T> {
    mode: AggregateMode,
    values: Vec<T>,
    problems: Vec<ProblemRef>,
}

impl<T> Aggregator<T> {
    pub(crate) const fn new(mode: AggregateMode) -> Self {
        Self {
            mode,
            values: Vec::new(),
            problems: Vec::new(),
        }
    }

    /// Records one outcome. `Break` means no further input should be pulled.
    pub(crate) fn push(&mut self, outcome: Outcome<T>) -> ControlFlow<()> {
        outcome.resolve(
            |value| self.values.push(value),
            |problem| self.problems.push(problem),
        );
        if self.mode.bails_early() && !self.problems.is_empty() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub(crate) fn finish(self) -> Outcome<Vec<T>> {
        let mut problems = self.problems;
        if problems.is_empty() {
            return Outcome::Ok(self.values);
        }
        debug!(
            mode = ?self.mode,
            problems = problems.len(),
            values = self.values.len(),
            "aggregation finished with problems"
        );
        match self.mode {
            AggregateMode::BailEarly => Outcome::Problem(problems.swap_remove(0)),
            AggregateMode::CollectAll => Outcome::fail(ProblemAggregate::new(problems)),
        }
    }
}

/// Aggregates outcomes into a single outcome of all values.
///
/// ```
/// use outcomes::{AggregateMode, BasicProblem, Outcome, ProblemAggregate, aggregate};
///
/// let all = aggregate([Outcome::ok(1), Outcome::ok(2)], AggregateMode::CollectAll);
/// assert_eq!(all, Outcome::ok(vec![1, 2]));
///
/// let mixed = aggregate(
///     [Outcome::ok(1), Outcome::fail(BasicProblem::new("x")), Outcome::fail(BasicProblem::new("y"))],
///     AggregateMode::CollectAll,
/// );
/// let count = mixed.problem().and_then(|p| p.downcast_ref::<ProblemAggregate>()).map(ProblemAggregate::len);
/// assert_eq!(count, Some(2));
/// ```
pub fn aggregate<T, I>(outcomes: I, mode: AggregateMode) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut aggregator = Aggregator::new(mode);
    for outcome in outcomes {
        if aggregator.push(outcome).is_break() {
            break;
        }
    }
    aggregator.finish()
}

/// Aggregates value-less outcomes into a single one.
pub fn aggregate_unit<I>(outcomes: I, mode: AggregateMode) -> Outcome<()>
where
    I: IntoIterator<Item = Outcome<()>>,
{
    aggregate(outcomes, mode).map(|_| ())
}

/// Aggregation as an iterator adapter.
pub trait OutcomeIteratorExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Aggregates the remaining outcomes. See [`aggregate`].
    fn aggregate_outcomes(self, mode: AggregateMode) -> Outcome<Vec<T>> {
        aggregate(self, mode)
    }
}

impl<T, I> OutcomeIteratorExt<T> for I where I: Iterator<Item = Outcome<T>> {}

/// Collects in [`AggregateMode::CollectAll`] mode.
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        aggregate(iter, AggregateMode::CollectAll)
    }
}

/// Collects in [`AggregateMode::CollectAll`] mode.
impl FromIterator<Outcome<()>> for Outcome<()> {
    fn from_iter<I: IntoIterator<Item = Outcome<()>>>(iter: I) -> Self {
        aggregate_unit(iter, AggregateMode::CollectAll)
    }
}
