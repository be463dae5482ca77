//! JSON dataset format.
//!
//! ```json
//! { "routes": [ { "origin": "Downtown", "destination": "Airport",
//!                 "times": ["06:15", "07:45"] } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Route;

use super::error::ScheduleError;
use super::store::ScheduleStore;

/// Top-level dataset document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleFile {
    pub routes: Vec<RouteRecord>,
}

/// One route as written in a dataset, times still as "HH:MM" text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub times: Vec<String>,
}

impl RouteRecord {
    /// Validate into a domain route.
    pub fn into_route(self) -> Result<Route, ScheduleError> {
        let times = self.times.as_slice();
        Route::parse(self.origin.as_str(), self.destination.as_str(), times).map_err(|source| {
            ScheduleError::InvalidRoute {
                origin: self.origin,
                destination: self.destination,
                source,
            }
        })
    }

    /// Render a domain route back into its dataset form.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            times: route.times().iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ScheduleStore {
    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let file: ScheduleFile = serde_json::from_str(json).map_err(|e| ScheduleError::Json {
            message: e.to_string(),
        })?;

        Self::from_records(file.routes)
    }

    /// Read, parse and validate a JSON dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }
}
