//! Route lookup orchestration.
//!
//! Combines the route index with the departure calculator. The caller
//! samples the current instant once and passes it in, so a single lookup
//! never mixes two readings of the clock.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::departure::{Departure, next_departure};
use crate::domain::Route;
use crate::index::RouteIndex;

/// The next bus on a route that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextBus<'a> {
    pub route: &'a Route,
    pub departure: Departure,
}

/// Outcome of looking up an origin/destination pair.
///
/// A missing route is an ordinary outcome, not an error. A found route
/// always has a next departure, since the calculator wraps to tomorrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<'a> {
    Found(NextBus<'a>),
    NotFound { origin: String, destination: String },
}

impl<'a> LookupResult<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn origin(&self) -> &str {
        match self {
            LookupResult::Found(next) => next.route.origin(),
            LookupResult::NotFound { origin, .. } => origin,
        }
    }

    pub fn destination(&self) -> &str {
        match self {
            LookupResult::Found(next) => next.route.destination(),
            LookupResult::NotFound { destination, .. } => destination,
        }
    }

    pub fn next_bus(&self) -> Option<&NextBus<'a>> {
        match self {
            LookupResult::Found(next) => Some(next),
            LookupResult::NotFound { .. } => None,
        }
    }
}

/// Look up the next direct bus from `origin` to `destination` as of `now`.
///
/// # Examples
///
/// ```
/// use bus_server::index::RouteIndex;
/// use bus_server::lookup::{lookup, LookupResult};
/// use bus_server::schedule::default_schedule;
/// use chrono::NaiveDate;
///
/// let index = RouteIndex::new(default_schedule().unwrap());
/// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(21, 31, 0)
///     .unwrap();
///
/// let result = lookup(&index, "Downtown", "Airport", now);
/// let next = result.next_bus().unwrap();
/// assert_eq!(next.departure.to_string(), "Tomorrow at 06:15");
///
/// let result = lookup(&index, "Downtown", "Nowhere", now);
/// assert!(matches!(result, LookupResult::NotFound { .. }));
/// ```
pub fn lookup<'a>(
    index: &'a RouteIndex,
    origin: &str,
    destination: &str,
    now: NaiveDateTime,
) -> LookupResult<'a> {
    let Some(route) = index.find_route(origin, destination) else {
        debug!(origin, destination, "no direct route");
        return LookupResult::NotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        };
    };

    let departure = next_departure(route, now);
    debug!(
        origin,
        destination,
        day = departure.day.label(),
        time = %departure.time,
        wait_mins = departure.wait.num_minutes(),
        "next departure"
    );

    LookupResult::Found(NextBus { route, departure })
}
