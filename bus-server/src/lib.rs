//! Bus schedule lookup server.
//!
//! Answers "when is the next direct bus from here to there, and how long
//! do I wait?" from a fixed daily timetable.

pub mod clock;
pub mod config;
pub mod departure;
pub mod domain;
pub mod index;
pub mod lookup;
pub mod schedule;
pub mod web;
