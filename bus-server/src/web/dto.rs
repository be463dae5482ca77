//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::lookup::LookupResult;
use crate::schedule::RouteRecord;

/// Message shown when no direct route exists.
pub const NO_ROUTE_MESSAGE: &str = "No direct buses scheduled for this route.";

/// Response listing every origin.
#[derive(Debug, Serialize)]
pub struct OriginsResponse {
    pub origins: Vec<String>,
}

/// Request for the destinations reachable from an origin.
#[derive(Debug, Deserialize)]
pub struct DestinationsRequest {
    pub origin: String,
}

/// Destinations reachable directly from an origin.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub origin: String,
    pub destinations: Vec<String>,
}

/// Full timetable listing, ordered by origin then destination.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub routes: Vec<RouteRecord>,
}

/// Request to find the next bus.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Origin stop name
    pub origin: String,

    /// Destination stop name
    pub destination: String,

    /// Time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// Result of a next-bus lookup.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LookupResponse {
    pub origin: String,
    pub destination: String,

    /// Whether a direct route exists
    pub found: bool,

    /// "Today" or "Tomorrow"
    pub day: Option<String>,

    /// Departure clock time, HH:MM
    pub departure: Option<String>,

    /// Wait rounded to whole minutes
    pub wait_minutes: Option<i64>,

    /// Human-readable wait, e.g. "Leaves in 1h 30m"
    pub wait: Option<String>,

    /// Explanation when no route was found
    pub message: Option<String>,
}

impl LookupResponse {
    pub fn from_result(result: &LookupResult<'_>) -> Self {
        match result.next_bus() {
            Some(next) => {
                let wait = next.departure.wait_label();
                Self {
                    origin: result.origin().to_string(),
                    destination: result.destination().to_string(),
                    found: true,
                    day: Some(next.departure.day.label().to_string()),
                    departure: Some(next.departure.time.to_string()),
                    wait_minutes: Some(wait.minutes().max(0)),
                    wait: Some(wait.to_string()),
                    message: None,
                }
            }
            None => Self {
                origin: result.origin().to_string(),
                destination: result.destination().to_string(),
                found: false,
                day: None,
                departure: None,
                wait_minutes: None,
                wait: None,
                message: Some(NO_ROUTE_MESSAGE.to_string()),
            },
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
