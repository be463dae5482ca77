//! Domain error types.
//!
//! These errors describe timetable data that violates a route's invariants.
//! They are raised while a dataset is loaded, never during a lookup.

use super::{TimeError, TimeOfDay};

/// Validation failures when constructing a [`Route`](super::Route).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Origin or destination name is blank
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// Origin and destination are the same stop
    #[error("origin and destination are both {0}")]
    SameEndpoints(String),

    /// Route has no departure times
    #[error("route must have at least one departure")]
    NoDepartures,

    /// A departure time could not be parsed
    #[error("departure {index}: {source}")]
    InvalidTime {
        index: usize,
        #[source]
        source: TimeError,
    },

    /// Departure times are out of order or repeated
    #[error("departures must be strictly ascending: {next} follows {previous}")]
    NotAscending {
        previous: TimeOfDay,
        next: TimeOfDay,
    },
}
