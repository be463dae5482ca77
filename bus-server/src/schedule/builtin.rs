//! The built-in timetable.

use super::error::ScheduleError;
use super::file::RouteRecord;
use super::store::ScheduleStore;

/// (origin, destination, departures)
const DEFAULT_ROUTES: &[(&str, &str, &[&str])] = &[
    (
        "Downtown",
        "Airport",
        &["06:15", "07:45", "09:30", "12:00", "14:15", "16:45", "19:10", "21:30"],
    ),
    (
        "Downtown",
        "University",
        &[
            "05:50", "07:05", "08:20", "09:50", "11:10", "13:25", "15:00", "17:40", "20:05",
        ],
    ),
    (
        "Downtown",
        "Harbor",
        &["06:00", "07:30", "09:00", "10:30", "12:30", "15:45", "18:10"],
    ),
    (
        "Airport",
        "Downtown",
        &["06:50", "08:20", "10:05", "12:35", "14:40", "17:15", "20:00", "22:15"],
    ),
    (
        "Airport",
        "University",
        &["07:10", "09:30", "11:40", "13:50", "16:05", "18:20", "21:10"],
    ),
    (
        "University",
        "Downtown",
        &["06:20", "07:40", "09:15", "11:00", "13:10", "15:30", "17:50", "20:10"],
    ),
    (
        "University",
        "Harbor",
        &["06:45", "08:15", "10:00", "12:20", "14:40", "17:05", "19:30"],
    ),
    (
        "Harbor",
        "Downtown",
        &["05:55", "07:25", "08:55", "10:25", "12:45", "16:00", "18:25", "20:35"],
    ),
];

/// The eight-route Downtown/Airport/University/Harbor network.
///
/// Goes through the same validation as a file dataset.
pub fn default_schedule() -> Result<ScheduleStore, ScheduleError> {
    ScheduleStore::from_records(DEFAULT_ROUTES.iter().map(|(origin, destination, times)| {
        RouteRecord {
            origin: (*origin).to_string(),
            destination: (*destination).to_string(),
            times: times.iter().map(|t| (*t).to_string()).collect(),
        }
    }))
}
