//! Bus route type.

use super::{RouteError, TimeOfDay};

/// A directed origin → destination pair with its daily departures.
///
/// # Invariants
///
/// - Origin and destination are non-empty and differ
/// - At least one departure
/// - Departures are strictly ascending (no duplicates)
///
/// # Examples
///
/// ```
/// use bus_server::domain::Route;
///
/// let route = Route::parse("Downtown", "Airport", &["06:15", "07:45", "21:30"]).unwrap();
/// assert_eq!(route.origin(), "Downtown");
/// assert_eq!(route.first_departure().to_string(), "06:15");
/// assert_eq!(route.last_departure().to_string(), "21:30");
///
/// // Out-of-order schedules are rejected
/// assert!(Route::parse("Downtown", "Airport", &["07:45", "06:15"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    origin: String,
    destination: String,
    times: Vec<TimeOfDay>,
}

impl Route {
    /// Construct a route, validating its invariants.
    ///
    /// Names are trimmed of surrounding whitespace.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        times: Vec<TimeOfDay>,
    ) -> Result<Self, RouteError> {
        let origin = origin.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        if origin.is_empty() {
            return Err(RouteError::EmptyName("origin"));
        }
        if destination.is_empty() {
            return Err(RouteError::EmptyName("destination"));
        }
        if origin == destination {
            return Err(RouteError::SameEndpoints(origin));
        }
        if times.is_empty() {
            return Err(RouteError::NoDepartures);
        }
        if let Some(pair) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(RouteError::NotAscending {
                previous: pair[0],
                next: pair[1],
            });
        }

        Ok(Self {
            origin,
            destination,
            times,
        })
    }

    /// Construct a route from "HH:MM" strings.
    pub fn parse<S: AsRef<str>>(
        origin: impl Into<String>,
        destination: impl Into<String>,
        times: &[S],
    ) -> Result<Self, RouteError> {
        let times = times
            .iter()
            .enumerate()
            .map(|(index, s)| {
                TimeOfDay::parse_hhmm(s.as_ref())
                    .map_err(|source| RouteError::InvalidTime { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(origin, destination, times)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Departure times in ascending order. Never empty.
    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    /// Earliest departure of the day.
    pub fn first_departure(&self) -> TimeOfDay {
        // Non-empty by construction
        self.times[0]
    }

    /// Latest departure of the day.
    pub fn last_departure(&self) -> TimeOfDay {
        self.times[self.times.len() - 1]
    }

    /// Identity of the route within a schedule.
    pub fn key(&self) -> (&str, &str) {
        (&self.origin, &self.destination)
    }
}
