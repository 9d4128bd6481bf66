//! Core types for outcome composition.
//!
//! - [`problem`]: the `Problem` capability, `BasicProblem` and shared handles
//! - [`aggregate`]: `ProblemAggregate`, a problem made of other problems
//! - [`outcome`]: the two-valued `Outcome` union and its resolver
//! - [`resolver`]: dispatch on the concrete problem type

pub mod aggregate;
pub mod outcome;
pub mod problem;
pub mod resolver;

pub use aggregate::{AGGREGATE_DETAIL, ProblemAggregate};
pub use outcome::Outcome;
pub use problem::{AsAny, BasicProblem, IntoProblem, Problem, ProblemRef};
pub use resolver::ProblemDispatch;
