//! The async overlay.
//!
//! [`AsyncOutcome`] wraps a future that eventually yields an [`Outcome`] and
//! carries the whole combinator algebra across `.await` points. A chain may
//! freely mix synchronous steps, futures of plain values and futures of
//! outcomes; the final outcome is the one the equivalent synchronous chain
//! would produce, and no step after a problem is ever started.
//!
//! - [`async_outcome`]: the `AsyncOutcome` type and its combinators
//! - [`lift`]: entry points from outcomes and futures into the overlay
//! - [`aggregate`](mod@aggregate): aggregation over streams of outcomes
//!
//! Dropping an `AsyncOutcome` before it completes cancels the chain; steps
//! that have not started never run.
//!
//! [`Outcome`]: crate::Outcome

pub mod aggregate;
pub mod async_outcome;
pub mod lift;

pub use aggregate::{AggregateStream, aggregate_stream, aggregate_unit_stream};
pub use async_outcome::AsyncOutcome;
pub use lift::{OutcomeFutureExt, ValueFutureExt};
