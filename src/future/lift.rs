//! Entry points into the async overlay.
//!
//! Three kinds of sources can start or continue an async chain:
//!
//! - an [`Outcome`] that is already known, via [`Outcome::into_async`] or the
//!   `*_async` continuations defined here;
//! - a future of an outcome, via [`OutcomeFutureExt::into_async_outcome`];
//! - a future of a plain value (including `()`), via
//!   [`ValueFutureExt::into_ok_outcome`].
//!
//! When the known outcome is already a problem, the `*_async` continuations
//! return a resolved [`AsyncOutcome`] without calling their factory.

use std::future::Future;

use super::async_outcome::AsyncOutcome;
use crate::types::Outcome;

impl<T> Outcome<T> {
    /// Lifts the outcome into an already-resolved [`AsyncOutcome`].
    pub fn into_async<'a>(self) -> AsyncOutcome<'a, T>
    where
        T: Send + 'a,
    {
        AsyncOutcome::ready(self)
    }

    /// Continues with an asynchronous step that may fail.
    pub fn bind_async<'a, R, F, Fut>(self, factory: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<R>> + Send + 'a,
    {
        self.resolve(
            |value| AsyncOutcome::new(factory(value)),
            |problem| AsyncOutcome::ready(Outcome::Problem(problem)),
        )
    }

    /// Transforms the value with an asynchronous function.
    pub fn map_async<'a, R, F, Fut>(self, f: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R> + Send + 'a,
    {
        self.resolve(
            |value| AsyncOutcome::from_value(f(value)),
            |problem| AsyncOutcome::ready(Outcome::Problem(problem)),
        )
    }

    /// Runs an asynchronous check that reports no value.
    ///
    /// See [`AsyncOutcome::then_unit_async`].
    pub fn then_unit_async<'a, F, Fut>(self, factory: F) -> AsyncOutcome<'a, T>
    where
        T: Send + 'a,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<()>> + Send + 'a,
    {
        self.resolve(
            |value| {
                let check = factory(&value);
                AsyncOutcome::new(async move { check.await.map(move |()| value) })
            },
            |problem| AsyncOutcome::ready(Outcome::Problem(problem)),
        )
    }

    /// Like [`select_many`](Self::select_many) with an asynchronous selector.
    pub fn select_many_async<'a, N, R, S, Fut, P>(
        self,
        selector: S,
        projector: P,
    ) -> AsyncOutcome<'a, R>
    where
        T: Send + 'a,
        N: Send + 'a,
        R: Send + 'a,
        S: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<N>> + Send + 'a,
        P: FnOnce(T, N) -> R + Send + 'a,
    {
        self.resolve(
            |value| {
                let next = selector(&value);
                AsyncOutcome::new(async move { next.await.map(move |n| projector(value, n)) })
            },
            |problem| AsyncOutcome::ready(Outcome::Problem(problem)),
        )
    }
}

/// Lifts a future of an outcome into the overlay.
pub trait OutcomeFutureExt<'a, T>: Future<Output = Outcome<T>> + Send + Sized + 'a {
    /// Wraps this future as an [`AsyncOutcome`].
    fn into_async_outcome(self) -> AsyncOutcome<'a, T>
    where
        T: Send + 'a,
    {
        AsyncOutcome::new(self)
    }
}

impl<'a, T, F> OutcomeFutureExt<'a, T> for F where F: Future<Output = Outcome<T>> + Send + 'a {}

/// Lifts a future of a plain value into the overlay.
pub trait ValueFutureExt<'a>: Future + Send + Sized + 'a {
    /// Wraps this future as an [`AsyncOutcome`] that always succeeds.
    fn into_ok_outcome(self) -> AsyncOutcome<'a, Self::Output>
    where
        Self::Output: Send + 'a,
    {
        AsyncOutcome::from_value(self)
    }

    /// Awaits the value, then continues with a step that may fail.
    fn bind_outcome<R, F>(self, factory: F) -> AsyncOutcome<'a, R>
    where
        Self::Output: Send + 'a,
        R: Send + 'a,
        F: FnOnce(Self::Output) -> Outcome<R> + Send + 'a,
    {
        self.into_ok_outcome().bind(factory)
    }
}

impl<'a, F> ValueFutureExt<'a> for F where F: Future + Send + 'a {}
