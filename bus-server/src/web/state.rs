//! Application state for the web layer.

use std::sync::Arc;

use crate::clock::Clock;
use crate::index::RouteIndex;

/// Shared application state.
///
/// The index is immutable after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Routes served by this instance
    pub index: Arc<RouteIndex>,

    /// Where "now" comes from for each request
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(index: RouteIndex, clock: impl Clock + 'static) -> Self {
        Self {
            index: Arc::new(index),
            clock: Arc::new(clock),
        }
    }
}
