//! Combinators for composing outcomes.
//!
//! - [`compose`]: map, bind, then_unit, hooks, ensure and rescue
//! - [`query`]: select / select_many, the query-style surface over map and bind
//! - [`aggregate`](mod@aggregate): fold many outcomes into one
//! - [`laws`]: the algebraic laws these combinators commit to
//!
//! Every combinator is a thin layer over [`Outcome::resolve`](crate::Outcome::resolve).

pub mod aggregate;
pub mod compose;
pub mod laws;
pub mod query;

pub use aggregate::{AggregateMode, OutcomeIteratorExt, aggregate, aggregate_unit};
pub use laws::{Law, LawClassification, LawEntry, conditional_laws, law_sheet, unconditional_laws};
