//! Timetable dataset loading.
//!
//! A [`ScheduleStore`] is the validated, immutable set of routes the
//! service answers from. It is built once at startup, either from the
//! built-in network or from a JSON file, and rejected as a whole if any
//! route is malformed.

mod builtin;
mod error;
mod file;
mod store;

pub use builtin::default_schedule;
pub use error::ScheduleError;
pub use file::{RouteRecord, ScheduleFile};
pub use store::ScheduleStore;
