//! Next-departure calculation.
//!
//! Given a route's daily departures and a reference instant, find the
//! first departure at or after that instant. When every departure of the
//! day has gone, the search wraps to the first departure tomorrow, so a
//! route with at least one departure always yields a result.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Route, TimeOfDay};

/// Which calendar day a departure falls on, relative to the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Tomorrow,
}

impl Day {
    pub fn label(&self) -> &'static str {
        match self {
            Day::Today => "Today",
            Day::Tomorrow => "Tomorrow",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved departure: a scheduled time on a specific day.
///
/// Produced by [`next_departure`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub day: Day,
    pub time: TimeOfDay,
    /// Time from the reference instant until the bus leaves. Never negative.
    pub wait: Duration,
}

impl Departure {
    /// The wait rounded to whole minutes, for display.
    pub fn wait_label(&self) -> Wait {
        Wait::from_duration(self.wait)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.day, self.time)
    }
}

/// Find the next departure of `route` at or after `now`.
///
/// A departure exactly at `now` counts as upcoming, with a zero wait.
///
/// # Examples
///
/// ```
/// use bus_server::departure::{next_departure, Day};
/// use bus_server::domain::Route;
/// use chrono::NaiveDate;
///
/// let route = Route::parse("Downtown", "Airport", &["06:15", "21:30"]).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let evening = date.and_hms_opt(19, 0, 0).unwrap();
/// let next = next_departure(&route, evening);
/// assert_eq!(next.day, Day::Today);
/// assert_eq!(next.time.to_string(), "21:30");
///
/// // After the last bus, wrap to tomorrow's first
/// let late = date.and_hms_opt(21, 31, 0).unwrap();
/// let next = next_departure(&route, late);
/// assert_eq!(next.day, Day::Tomorrow);
/// assert_eq!(next.wait_label().to_string(), "Leaves in 8h 44m");
/// ```
pub fn next_departure(route: &Route, now: NaiveDateTime) -> Departure {
    let now_time = now.time();

    // Times are ascending, so the first one not before `now` is the earliest
    let upcoming = route
        .times()
        .iter()
        .find(|t| t.as_naive_time() >= now_time);

    match upcoming {
        Some(&time) => Departure {
            day: Day::Today,
            time,
            wait: time.as_naive_time().signed_duration_since(now_time),
        },
        None => {
            let time = route.first_departure();
            Departure {
                day: Day::Tomorrow,
                time,
                wait: time.as_naive_time().signed_duration_since(now_time) + Duration::days(1),
            }
        }
    }
}

/// A wait rounded to the nearest whole minute.
///
/// Displays as "Departing now" when nothing is left to wait, otherwise as
/// "Leaves in …" with zero hour or minute parts omitted.
///
/// ```
/// use bus_server::departure::Wait;
///
/// assert_eq!(Wait::from_minutes(0).to_string(), "Departing now");
/// assert_eq!(Wait::from_minutes(45).to_string(), "Leaves in 45 min");
/// assert_eq!(Wait::from_minutes(60).to_string(), "Leaves in 1h");
/// assert_eq!(Wait::from_minutes(90).to_string(), "Leaves in 1h 30m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wait {
    minutes: i64,
}

impl Wait {
    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Round a duration to the nearest minute; half a minute rounds up.
    pub fn from_duration(duration: Duration) -> Self {
        let millis = duration.num_milliseconds();
        Self {
            minutes: (millis + 30_000).div_euclid(60_000),
        }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whether the bus is leaving now (nothing left to wait after rounding).
    pub fn is_now(&self) -> bool {
        self.minutes <= 0
    }
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_now() {
            return f.write_str("Departing now");
        }

        let hours = self.minutes / 60;
        let minutes = self.minutes % 60;

        match (hours, minutes) {
            (0, m) => write!(f, "Leaves in {} min", m),
            (h, 0) => write!(f, "Leaves in {}h", h),
            (h, m) => write!(f, "Leaves in {}h {}m", h, m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn downtown_airport() -> Route {
        Route::parse(
            "Downtown",
            "Airport",
            &[
                "06:15", "07:45", "09:30", "12:00", "14:15", "16:45", "19:10", "21:30",
            ],
        )
        .unwrap()
    }

    #[test]
    fn picks_first_departure_after_now() {
        let next = next_departure(&downtown_airport(), at(10, 0));
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.time, time("12:00"));
        assert_eq!(next.wait, Duration::hours(2));
    }

    #[test]
    fn exact_match_departs_now() {
        let next = next_departure(&downtown_airport(), at(9, 30));
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.time, time("09:30"));
        assert_eq!(next.wait, Duration::zero());
        assert_eq!(next.wait_label().to_string(), "Departing now");
    }

    #[test]
    fn seconds_past_departure_moves_on() {
        let now = at(9, 30) + Duration::seconds(1);
        let next = next_departure(&downtown_airport(), now);
        assert_eq!(next.time, time("12:00"));
    }

    #[test]
    fn before_first_departure() {
        let next = next_departure(&downtown_airport(), at(0, 0));
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.time, time("06:15"));
        assert_eq!(next.wait_label().to_string(), "Leaves in 6h 15m");
    }

    #[test]
    fn last_departure_still_today() {
        let next = next_departure(&downtown_airport(), at(21, 30));
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.time, time("21:30"));
    }

    #[test]
    fn wraps_to_tomorrow_after_last_departure() {
        let next = next_departure(&downtown_airport(), at(21, 31));
        assert_eq!(next.day, Day::Tomorrow);
        assert_eq!(next.time, time("06:15"));
        assert_eq!(next.wait, Duration::hours(8) + Duration::minutes(44));
        assert_eq!(next.wait_label().to_string(), "Leaves in 8h 44m");
    }

    #[test]
    fn single_departure_wraps_across_midnight() {
        let route = Route::parse("Harbor", "Airport", &["00:05"]).unwrap();

        let next = next_departure(&route, at(23, 55));
        assert_eq!(next.day, Day::Tomorrow);
        assert_eq!(next.wait, Duration::minutes(10));

        let next = next_departure(&route, at(0, 0));
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.wait, Duration::minutes(5));
    }

    #[test]
    fn departure_display() {
        let next = next_departure(&downtown_airport(), at(21, 31));
        assert_eq!(next.to_string(), "Tomorrow at 06:15");
        let next = next_departure(&downtown_airport(), at(7, 0));
        assert_eq!(next.to_string(), "Today at 07:45");
    }

    #[test]
    fn wait_labels() {
        assert_eq!(Wait::from_minutes(0).to_string(), "Departing now");
        assert_eq!(Wait::from_minutes(-3).to_string(), "Departing now");
        assert_eq!(Wait::from_minutes(1).to_string(), "Leaves in 1 min");
        assert_eq!(Wait::from_minutes(45).to_string(), "Leaves in 45 min");
        assert_eq!(Wait::from_minutes(60).to_string(), "Leaves in 1h");
        assert_eq!(Wait::from_minutes(90).to_string(), "Leaves in 1h 30m");
        assert_eq!(Wait::from_minutes(125).to_string(), "Leaves in 2h 5m");
    }

    #[test]
    fn wait_rounds_to_nearest_minute() {
        assert_eq!(Wait::from_duration(Duration::seconds(29)).minutes(), 0);
        assert_eq!(Wait::from_duration(Duration::seconds(30)).minutes(), 1);
        assert_eq!(Wait::from_duration(Duration::seconds(89)).minutes(), 1);
        assert_eq!(Wait::from_duration(Duration::seconds(90)).minutes(), 2);
        assert!(Wait::from_duration(Duration::seconds(20)).is_now());
    }

    #[test]
    fn day_labels() {
        assert_eq!(Day::Today.label(), "Today");
        assert_eq!(Day::Tomorrow.to_string(), "Tomorrow");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Timelike};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    prop_compose! {
        /// A route with 1-12 distinct departures, sorted ascending.
        fn arb_route()(minutes in prop::collection::btree_set(0u32..1440, 1..12)) -> Route {
            let times = minutes_to_times(&minutes);
            Route::new("Downtown", "Airport", times).unwrap()
        }
    }

    prop_compose! {
        fn arb_now()(secs in 0u32..86_400) -> NaiveDateTime {
            at_seconds(secs)
        }
    }

    fn at_seconds(secs: u32) -> NaiveDateTime {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        date.and_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap())
    }

    fn last_departure_secs(route: &Route) -> u32 {
        route.last_departure().as_naive_time().num_seconds_from_midnight()
    }

    /// A route and an instant no later than its last departure.
    fn arb_route_with_service_left() -> impl Strategy<Value = (Route, NaiveDateTime)> {
        arb_route().prop_flat_map(|route| {
            let last = last_departure_secs(&route);
            (Just(route), (0..=last).prop_map(at_seconds))
        })
    }

    /// A route and an instant after its last departure, before midnight.
    ///
    /// The latest departure is 23:59, so the range is never empty.
    fn arb_route_after_last() -> impl Strategy<Value = (Route, NaiveDateTime)> {
        arb_route().prop_flat_map(|route| {
            let last = last_departure_secs(&route);
            (Just(route), ((last + 1)..86_400).prop_map(at_seconds))
        })
    }

    fn minutes_to_times(minutes: &BTreeSet<u32>) -> Vec<TimeOfDay> {
        minutes
            .iter()
            .map(|m| TimeOfDay::new(m / 60, m % 60).unwrap())
            .collect()
    }

    proptest! {
        /// Before the last departure: today's smallest time not before now
        #[test]
        fn today_picks_smallest_upcoming((route, now) in arb_route_with_service_left()) {
            let next = next_departure(&route, now);
            prop_assert_eq!(next.day, Day::Today);
            let expected = route
                .times()
                .iter()
                .copied()
                .filter(|t| t.as_naive_time() >= now.time())
                .min()
                .unwrap();
            prop_assert_eq!(next.time, expected);
        }

        /// After the last departure: tomorrow's first
        #[test]
        fn after_last_wraps_to_first((route, now) in arb_route_after_last()) {
            let next = next_departure(&route, now);
            prop_assert_eq!(next.day, Day::Tomorrow);
            prop_assert_eq!(next.time, route.first_departure());
        }

        /// Wait is never negative, and zero only on an exact match
        #[test]
        fn wait_non_negative(route in arb_route(), now in arb_now()) {
            let next = next_departure(&route, now);
            prop_assert!(next.wait >= Duration::zero());
            prop_assert!(next.wait <= Duration::days(1));
            if next.wait == Duration::zero() {
                prop_assert_eq!(next.time.as_naive_time(), now.time());
            }
        }

        /// now + wait lands exactly on the chosen departure
        #[test]
        fn wait_reaches_departure(route in arb_route(), now in arb_now()) {
            let next = next_departure(&route, now);
            let departs = now + next.wait;
            prop_assert_eq!(departs.time(), next.time.as_naive_time());
            let expected_date = match next.day {
                Day::Today => now.date(),
                Day::Tomorrow => now.date().succ_opt().unwrap(),
            };
            prop_assert_eq!(departs.date(), expected_date);
        }

        /// Labels omit zero parts and never go negative
        #[test]
        fn label_shape(minutes in 1i64..2880) {
            let label = Wait::from_minutes(minutes).to_string();
            prop_assert!(label.starts_with("Leaves in "));
            prop_assert!(!label.starts_with("Leaves in 0"));
            prop_assert!(!label.ends_with(" 0m"));
        }
    }
}
