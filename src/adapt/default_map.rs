//! Process-wide default error map.
//!
//! Consulted by [`Adapter`](super::Adapter)s built without an explicit map.
//! Install it once at startup; tests that need a different map for a while
//! use [`DefaultMapGuard`], which puts the previous map back on drop.

use parking_lot::RwLock;

use super::ErrorMap;
use crate::tracing_compat::{info, warn};

static DEFAULT_MAP: RwLock<Option<ErrorMap>> = RwLock::new(None);

/// Returns the installed default map, if any.
#[must_use]
pub fn default_map() -> Option<ErrorMap> {
    DEFAULT_MAP.read().clone()
}

/// Installs `map` as the default, returning the map it replaces.
pub fn install_default_map(map: ErrorMap) -> Option<ErrorMap> {
    let previous = DEFAULT_MAP.write().replace(map);
    if previous.is_some() {
        warn!("default error map replaced");
    } else {
        info!("default error map installed");
    }
    previous
}

/// Removes the default map, returning it.
pub fn clear_default_map() -> Option<ErrorMap> {
    let previous = DEFAULT_MAP.write().take();
    if previous.is_some() {
        info!("default error map cleared");
    }
    previous
}

/// Restores the previously installed default map when dropped.
#[must_use = "the previous default map is restored when the guard drops"]
pub struct DefaultMapGuard {
    previous: Option<ErrorMap>,
}

impl DefaultMapGuard {
    /// Installs `map` until the guard drops.
    pub fn install(map: ErrorMap) -> Self {
        Self {
            previous: install_default_map(map),
        }
    }

    /// Clears the default map until the guard drops.
    pub fn cleared() -> Self {
        Self {
            previous: clear_default_map(),
        }
    }
}

impl Drop for DefaultMapGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        *DEFAULT_MAP.write() = previous;
    }
}

impl std::fmt::Debug for DefaultMapGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultMapGuard")
            .field("restores_map", &self.previous.is_some())
            .finish()
    }
}
