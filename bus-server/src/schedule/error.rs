//! Schedule loading error types.

use std::path::PathBuf;

use crate::domain::RouteError;

/// Errors that can occur while loading a schedule dataset.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Dataset file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON for the schedule format
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A route violates its invariants
    #[error("invalid route {origin} → {destination}: {source}")]
    InvalidRoute {
        origin: String,
        destination: String,
        #[source]
        source: RouteError,
    },

    /// The same origin/destination pair appears twice
    #[error("duplicate route {origin} → {destination}")]
    DuplicateRoute { origin: String, destination: String },
}
