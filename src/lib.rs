//! Outcomes: railway-style composition of values and problems.
//!
//! # Overview
//!
//! An [`Outcome<T>`] is either a successful value or a [`Problem`]: a
//! domain-level failure that carries a human-readable detail. Chains of
//! fallible steps are composed with combinators that short-circuit on the
//! first problem, so domain code never needs to unwind or juggle foreign
//! error types.
//!
//! # Core Guarantees
//!
//! - **Exhaustive resolution**: every outcome is resolved through
//!   [`Outcome::resolve`], which always invokes exactly one branch
//! - **Short-circuit**: once a chain holds a problem, no downstream factory,
//!   selector or hook for the success branch runs
//! - **Problem preservation**: combinators pass problems through untouched,
//!   the same shared allocation travels down the whole chain
//! - **Async parity**: [`AsyncOutcome`] lifts the same algebra across `.await`
//!   points and produces the same final outcome as the synchronous chain
//!
//! # Module Structure
//!
//! - [`types`]: `Problem`, `ProblemAggregate`, `Outcome` and typed dispatch
//! - [`combinator`]: composition, query-style selection, aggregation, laws
//! - [`adapt`]: conversion of `Result` errors into problems
//! - [`future`](mod@future): the async overlay (`AsyncOutcome`, stream aggregation)
//! - [`error`](mod@error): the interop error type
//! - `tracing_compat`: optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use outcomes::{BasicProblem, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<i32> {
//!     raw.parse::<i32>()
//!         .map_or_else(|_| Outcome::fail(BasicProblem::new("not a number")), Outcome::ok)
//! }
//!
//! let doubled = parse("21")
//!     .ensure(|v| *v >= 0, |_| BasicProblem::new("negative"))
//!     .map(|v| v * 2);
//! assert_eq!(doubled, Outcome::ok(42));
//!
//! let failed = parse("x").map(|v| v * 2);
//! assert!(failed.is_problem());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod adapt;
pub mod combinator;
pub mod error;
pub mod future;
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;
pub(crate) mod tracing_compat;
pub mod types;

pub use adapt::{
    Adapter, DefaultMapGuard, ErrorMap, adapt, adapt_async, clear_default_map, default_map,
    install_default_map, map_error, map_errors_with,
};
pub use combinator::{AggregateMode, OutcomeIteratorExt, aggregate, aggregate_unit};
pub use error::ProblemError;
pub use future::{
    AggregateStream, AsyncOutcome, OutcomeFutureExt, ValueFutureExt, aggregate_stream,
    aggregate_unit_stream,
};
pub use types::{
    AGGREGATE_DETAIL, BasicProblem, IntoProblem, Outcome, Problem, ProblemAggregate,
    ProblemDispatch, ProblemRef,
};
