//! Validated in-memory route collection.

use std::collections::HashSet;

use crate::domain::Route;

use super::error::ScheduleError;
use super::file::RouteRecord;

/// An immutable, validated set of routes.
///
/// Every route satisfies the [`Route`] invariants and no two routes share
/// the same origin/destination pair.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    routes: Vec<Route>,
}

impl ScheduleStore {
    /// Build a store from already-validated routes.
    ///
    /// Fails if an origin/destination pair appears more than once.
    pub fn new(routes: Vec<Route>) -> Result<Self, ScheduleError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(route.key()) {
                return Err(ScheduleError::DuplicateRoute {
                    origin: route.origin().to_string(),
                    destination: route.destination().to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Build a store from raw records, validating each one.
    ///
    /// The first malformed record rejects the whole dataset.
    pub fn from_records(
        records: impl IntoIterator<Item = RouteRecord>,
    ) -> Result<Self, ScheduleError> {
        let routes = records
            .into_iter()
            .map(RouteRecord::into_route)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(routes)
    }

    /// Routes in dataset order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
