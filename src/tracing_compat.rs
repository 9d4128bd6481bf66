//! Optional tracing integration.
//!
//! With the `tracing-integration` feature the macros below are the `tracing`
//! crate's own. Without it they expand to nothing, so call sites compile
//! unchanged and cost nothing.
//!
//! ```ignore
//! use crate::tracing_compat::debug;
//!
//! debug!(problems = 2, "aggregation finished with problems");
//! ```

#[cfg(feature = "tracing-integration")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
macro_rules! noop_event {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
#[allow(unused_imports)]
pub(crate) use {noop_event as debug, noop_event as info, noop_event as trace, noop_event as warn};
