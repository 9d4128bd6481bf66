//! Adaptation of `Result` errors into problems.
//!
//! Code outside the outcome world reports failure through
//! `Result<T, E>`. An [`Adapter`] runs such a computation and converts its
//! error into a problem using an [`ErrorMap`]. A map that does not recognize
//! the error returns `None`; the error is then handed back unchanged as
//! `Err(e)`, so nothing is ever silently swallowed.
//!
//! Map resolution happens when the computation is started:
//!
//! 1. the adapter's own map, if it was built with one;
//! 2. otherwise the process-wide default map, if one is installed;
//! 3. otherwise no map, and every error is handed back.
//!
//! ```
//! use outcomes::{Adapter, BasicProblem, Outcome};
//! use std::num::ParseIntError;
//!
//! let adapter = Adapter::typed(|e: &ParseIntError| BasicProblem::new(e.to_string()));
//!
//! let parsed = adapter.call(|| "12".parse::<i32>()).unwrap();
//! assert_eq!(parsed, Outcome::ok(12));
//!
//! let failed = adapter.call(|| "x".parse::<i32>()).unwrap();
//! assert!(failed.is_problem());
//! ```

mod default_map;

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub use default_map::{DefaultMapGuard, clear_default_map, default_map, install_default_map};

use crate::tracing_compat::{debug, trace};
use crate::types::{IntoProblem, Outcome, ProblemRef};

/// Converts an error into a problem, or declines with `None`.
pub type ErrorMap = Arc<dyn Fn(&(dyn Error + 'static)) -> Option<ProblemRef> + Send + Sync>;

/// Builds an [`ErrorMap`] from a closure over any error.
pub fn map_errors_with<F>(map: F) -> ErrorMap
where
    F: Fn(&(dyn Error + 'static)) -> Option<ProblemRef> + Send + Sync + 'static,
{
    Arc::new(map)
}

/// Builds an [`ErrorMap`] that handles one concrete error type.
///
/// Errors of any other type are declined.
pub fn map_error<E, P, F>(map: F) -> ErrorMap
where
    E: Error + 'static,
    P: IntoProblem,
    F: Fn(&E) -> P + Send + Sync + 'static,
{
    Arc::new(move |error: &(dyn Error + 'static)| {
        error.downcast_ref::<E>().map(|typed| map(typed).into_problem())
    })
}

/// Runs fallible computations and adapts their errors into problems.
#[derive(Clone, Default)]
pub struct Adapter {
    map: Option<ErrorMap>,
}

impl Adapter {
    /// An adapter that uses the default map installed at call time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter with its own map; the default map is never consulted.
    #[must_use]
    pub fn with_map(map: ErrorMap) -> Self {
        Self { map: Some(map) }
    }

    /// An adapter handling one concrete error type. See [`map_error`].
    #[must_use]
    pub fn typed<E, P, F>(map: F) -> Self
    where
        E: Error + 'static,
        P: IntoProblem,
        F: Fn(&E) -> P + Send + Sync + 'static,
    {
        Self::with_map(map_error(map))
    }

    /// Returns true if this adapter carries its own map.
    #[must_use]
    pub const fn has_own_map(&self) -> bool {
        self.map.is_some()
    }

    fn effective_map(&self) -> Option<ErrorMap> {
        self.map.clone().or_else(default_map)
    }

    /// Converts one error, handing it back if no map accepts it.
    pub fn convert<E>(&self, error: E) -> Result<ProblemRef, E>
    where
        E: Error + 'static,
    {
        convert_with(self.effective_map().as_ref(), error)
    }

    /// Runs `action`, adapting its error.
    ///
    /// Returns `Ok(Outcome::Ok(v))` on success, `Ok(Outcome::Problem(p))` for
    /// a mapped error and `Err(e)` for an error no map accepted.
    pub fn call<T, E, F>(&self, action: F) -> Result<Outcome<T>, E>
    where
        E: Error + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        let map = self.effective_map();
        match action() {
            Ok(value) => Ok(Outcome::Ok(value)),
            Err(error) => convert_with(map.as_ref(), error).map(Outcome::Problem),
        }
    }

    /// Awaits `future`, adapting its error.
    ///
    /// The map is chosen when this is called, not when the future completes.
    pub fn call_async<T, E, Fut>(
        &self,
        future: Fut,
    ) -> impl Future<Output = Result<Outcome<T>, E>> + use<T, E, Fut>
    where
        E: Error + 'static,
        Fut: Future<Output = Result<T, E>>,
    {
        let map = self.effective_map();
        async move {
            match future.await {
                Ok(value) => Ok(Outcome::Ok(value)),
                Err(error) => convert_with(map.as_ref(), error).map(Outcome::Problem),
            }
        }
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("own_map", &self.map.is_some())
            .finish()
    }
}

fn convert_with<E>(map: Option<&ErrorMap>, error: E) -> Result<ProblemRef, E>
where
    E: Error + 'static,
{
    match map.and_then(|map| map(&error)) {
        Some(problem) => {
            debug!(error = %error, problem = %problem, "error adapted into problem");
            Ok(problem)
        }
        None => {
            trace!(error = %error, "error not mapped, handing it back");
            Err(error)
        }
    }
}

/// Runs `action` with the default map. See [`Adapter::call`].
pub fn adapt<T, E, F>(action: F) -> Result<Outcome<T>, E>
where
    E: Error + 'static,
    F: FnOnce() -> Result<T, E>,
{
    Adapter::new().call(action)
}

/// Awaits `future` with the default map. See [`Adapter::call_async`].
pub fn adapt_async<T, E, Fut>(future: Fut) -> impl Future<Output = Result<Outcome<T>, E>>
where
    E: Error + 'static,
    Fut: Future<Output = Result<T, E>>,
{
    Adapter::new().call_async(future)
}
