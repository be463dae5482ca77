//! Web layer for the bus schedule service.
//!
//! Renders the route selectors, the full timetable and lookup results as
//! HTML, and exposes the same data as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
