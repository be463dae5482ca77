//! Domain types for the bus schedule.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod route;
mod time;

pub use error::RouteError;
pub use route::Route;
pub use time::{TimeError, TimeOfDay};
