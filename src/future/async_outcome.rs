//! `AsyncOutcome`: an outcome that is still being computed.
//!
//! Each combinator waits for the current outcome and then continues exactly
//! like its synchronous counterpart. Continuations that are themselves
//! asynchronous (`*_async`) are only started once the predecessor has
//! resolved to a value.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::types::{IntoProblem, Outcome, ProblemRef};

type BoxedOutcomeFuture<'a, T> = Pin<Box<dyn Future<Output = Outcome<T>> + Send + 'a>>;

/// A future that yields an [`Outcome`].
///
/// ```
/// use futures_lite::future::block_on;
/// use outcomes::{AsyncOutcome, BasicProblem, Outcome};
///
/// let total = AsyncOutcome::from_value(async { 20 })
///     .map(|v| v + 1)
///     .bind_async(|v| async move { Outcome::ok(v * 2) })
///     .ensure(|v| *v < 100, |_| BasicProblem::new("too large"));
/// assert_eq!(block_on(total), Outcome::ok(42));
/// ```
#[must_use = "futures do nothing unless polled"]
pub struct AsyncOutcome<'a, T> {
    inner: BoxedOutcomeFuture<'a, T>,
}

impl<'a, T: Send + 'a> AsyncOutcome<'a, T> {
    /// Wraps a future of an outcome.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T>> + Send + 'a,
    {
        Self {
            inner: Box::pin(future),
        }
    }

    /// An already-resolved outcome.
    pub fn ready(outcome: Outcome<T>) -> Self {
        Self::new(std::future::ready(outcome))
    }

    /// An already-resolved success.
    pub fn ok(value: T) -> Self {
        Self::ready(Outcome::Ok(value))
    }

    /// An already-resolved problem.
    pub fn fail(problem: impl IntoProblem) -> Self {
        Self::ready(Outcome::fail(problem))
    }

    /// Wraps a future of a plain value as a future of a successful outcome.
    pub fn from_value<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'a,
    {
        Self::new(async move { Outcome::Ok(future.await) })
    }

    /// Continues with `next` once the value is known; problems skip it.
    fn chain<R, F>(self, next: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> AsyncOutcome<'a, R> + Send + 'a,
    {
        AsyncOutcome::new(async move {
            self.await
                .resolve(next, |problem| AsyncOutcome::ready(Outcome::Problem(problem)))
                .await
        })
    }

    /// See [`Outcome::map`].
    pub fn map<R, F>(self, f: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> R + Send + 'a,
    {
        AsyncOutcome::new(async move { self.await.map(f) })
    }

    /// Transforms the value with an asynchronous function.
    pub fn map_async<R, F, Fut>(self, f: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
    {
        self.chain(move |value| AsyncOutcome::from_value(f(value)))
    }

    /// See [`Outcome::bind`].
    pub fn bind<R, F>(self, factory: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Outcome<R> + Send + 'a,
    {
        AsyncOutcome::new(async move { self.await.bind(factory) })
    }

    /// Alias for [`bind`](Self::bind).
    pub fn and_then<R, F>(self, factory: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Outcome<R> + Send + 'a,
    {
        self.bind(factory)
    }

    /// Continues with an asynchronous step that may fail.
    pub fn bind_async<R, F, Fut>(self, factory: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> Fut + Send + 'a,
        Fut: Future<Output = Outcome<R>> + Send + 'a,
    {
        self.chain(move |value| AsyncOutcome::new(factory(value)))
    }

    /// See [`Outcome::then_unit`].
    pub fn then_unit<F>(self, factory: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<()> + Send + 'a,
    {
        Self::new(async move { self.await.then_unit(factory) })
    }

    /// Runs an asynchronous check that reports no value.
    ///
    /// The future returned by `factory` cannot borrow the value; copy what it
    /// needs out of the reference first.
    pub fn then_unit_async<F, Fut>(self, factory: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'a,
        Fut: Future<Output = Outcome<()>> + Send + 'a,
    {
        self.chain(move |value| {
            let check = factory(&value);
            AsyncOutcome::new(async move { check.await.map(move |()| value) })
        })
    }

    /// See [`Outcome::on_success`].
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T) + Send + 'a,
    {
        Self::new(async move { self.await.on_success(action) })
    }

    /// See [`Outcome::on_problem`].
    pub fn on_problem<F>(self, action: F) -> Self
    where
        F: FnOnce(&ProblemRef) + Send + 'a,
    {
        Self::new(async move { self.await.on_problem(action) })
    }

    /// See [`Outcome::ensure`].
    pub fn ensure<P, Pred, Fac>(self, predicate: Pred, problem: Fac) -> Self
    where
        P: IntoProblem,
        Pred: FnOnce(&T) -> bool + Send + 'a,
        Fac: FnOnce(&T) -> P + Send + 'a,
    {
        Self::new(async move { self.await.ensure(predicate, problem) })
    }

    /// See [`Outcome::rescue`].
    pub fn rescue<Pred, Rec>(self, predicate: Pred, recover: Rec) -> Self
    where
        Pred: FnOnce(&ProblemRef) -> bool + Send + 'a,
        Rec: FnOnce(ProblemRef) -> T + Send + 'a,
    {
        Self::new(async move { self.await.rescue(predicate, recover) })
    }

    /// See [`Outcome::select`].
    pub fn select<R, F>(self, selector: F) -> AsyncOutcome<'a, R>
    where
        R: Send + 'a,
        F: FnOnce(T) -> R + Send + 'a,
    {
        self.map(selector)
    }

    /// See [`Outcome::select_many`].
    pub fn select_many<N, R, S, P>(self, selector: S, projector: P) -> AsyncOutcome<'a, R>
    where
        N: Send + 'a,
        R: Send + 'a,
        S: FnOnce(&T) -> Outcome<N> + Send + 'a,
        P: FnOnce(T, N) -> R + Send + 'a,
    {
        AsyncOutcome::new(async move { self.await.select_many(selector, projector) })
    }

    /// Like [`select_many`](Self::select_many) with an asynchronous selector.
    pub fn select_many_async<N, R, S, Fut, P>(self, selector: S, projector: P) -> AsyncOutcome<'a, R>
    where
        N: Send + 'a,
        R: Send + 'a,
        S: FnOnce(&T) -> Fut + Send + 'a,
        Fut: Future<Output = Outcome<N>> + Send + 'a,
        P: FnOnce(T, N) -> R + Send + 'a,
    {
        self.chain(move |value| {
            let next = selector(&value);
            AsyncOutcome::new(async move { next.await.map(move |n| projector(value, n)) })
        })
    }

    /// Waits for the outcome and resolves it. See [`Outcome::resolve`].
    pub async fn resolve<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_problem: impl FnOnce(ProblemRef) -> R,
    ) -> R {
        self.await.resolve(on_success, on_problem)
    }
}

impl AsyncOutcome<'_, ()> {
    /// An already-resolved [`Outcome::NO_PROBLEM`].
    pub fn no_problem() -> Self {
        Self::ready(Outcome::NO_PROBLEM)
    }
}

impl<'a, T: Send + 'a> From<Outcome<T>> for AsyncOutcome<'a, T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::ready(outcome)
    }
}

impl<T> Future for AsyncOutcome<'_, T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome<T>> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for AsyncOutcome<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}
