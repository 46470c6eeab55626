//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

/// Shared application state, cloneable across handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    start_time: Instant,
}

impl AppState {
    /// Creates the application state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                start_time: Instant::now(),
            }),
        }
    }

    /// Returns the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.inner.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
