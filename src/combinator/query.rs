//! Query-style composition.
//!
//! `select` and `select_many` read like a sequential query: bind each step's
//! value to a name, then project a result from everything bound so far. They
//! add no behavior of their own; `select` is [`map`](Outcome::map) and
//! `select_many` is [`bind`](Outcome::bind) followed by `map`, so they
//! short-circuit exactly like explicit chaining.
//!
//! ```
//! use outcomes::Outcome;
//!
//! fn customer(id: u32) -> Outcome<String> {
//!     Outcome::ok(format!("customer-{id}"))
//! }
//! fn credit(name: &str) -> Outcome<u32> {
//!     Outcome::ok(u32::try_from(name.len()).unwrap_or(0) * 10)
//! }
//!
//! let line = customer(7)
//!     .select_many(|name| credit(name), |name, credit| (name, credit))
//!     .select(|(name, credit)| format!("{name}: {credit}"));
//! assert_eq!(line, Outcome::ok("customer-7: 100".to_owned()));
//! ```

use crate::types::Outcome;

impl<T> Outcome<T> {
    /// Projects the value. Same as [`map`](Self::map).
    pub fn select<R>(self, selector: impl FnOnce(T) -> R) -> Outcome<R> {
        self.map(selector)
    }

    /// Runs a dependent step, then projects from both values.
    ///
    /// The `selector` sees the current value and returns the next outcome;
    /// the `projector` combines the current value with the next one.
    pub fn select_many<N, R>(
        self,
        selector: impl FnOnce(&T) -> Outcome<N>,
        projector: impl FnOnce(T, N) -> R,
    ) -> Outcome<R> {
        self.bind(|value| selector(&value).map(|next| projector(value, next)))
    }
}
