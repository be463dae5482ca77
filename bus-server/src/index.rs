//! Route index over a schedule store.
//!
//! Answers the selection questions a rider asks before a lookup: where can
//! I leave from, where can I go from there, and is there a direct bus.

use std::collections::BTreeMap;

use crate::domain::Route;
use crate::schedule::ScheduleStore;

/// Index of routes by origin, then destination.
///
/// Owns the store it indexes. Both map levels are ordered, so origins and
/// destinations come out sorted by byte-wise string order.
///
/// # Examples
///
/// ```
/// use bus_server::index::RouteIndex;
/// use bus_server::schedule::default_schedule;
///
/// let index = RouteIndex::new(default_schedule().unwrap());
/// assert_eq!(index.origins(), vec!["Airport", "Downtown", "Harbor", "University"]);
/// assert!(index.find_route("Downtown", "Airport").is_some());
/// assert!(index.find_route("Downtown", "Nowhere").is_none());
/// ```
#[derive(Debug)]
pub struct RouteIndex {
    store: ScheduleStore,

    /// Map from origin -> destination -> position in `store.routes()`.
    by_origin: BTreeMap<String, BTreeMap<String, usize>>,
}

impl RouteIndex {
    /// Index every route in the store.
    pub fn new(store: ScheduleStore) -> Self {
        let mut by_origin: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

        for (idx, route) in store.routes().iter().enumerate() {
            by_origin
                .entry(route.origin().to_string())
                .or_default()
                .insert(route.destination().to_string(), idx);
        }

        Self { store, by_origin }
    }

    /// Distinct origins, sorted.
    pub fn origins(&self) -> Vec<&str> {
        self.by_origin.keys().map(String::as_str).collect()
    }

    /// Distinct destinations reachable directly from `origin`, sorted.
    ///
    /// Empty if the origin is unknown.
    pub fn destinations(&self, origin: &str) -> Vec<&str> {
        self.by_origin
            .get(origin)
            .map(|dests| dests.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Exact-match lookup of a direct route.
    ///
    /// `None` means there is no direct bus; the reverse direction is a
    /// separate route and is never implied.
    pub fn find_route(&self, origin: &str, destination: &str) -> Option<&Route> {
        let idx = *self.by_origin.get(origin)?.get(destination)?;
        self.store.routes().get(idx)
    }

    /// Every route, ordered by origin then destination.
    pub fn listing(&self) -> Vec<&Route> {
        let routes = self.store.routes();
        self.by_origin
            .values()
            .flat_map(|dests| dests.values())
            .filter_map(|&idx| routes.get(idx))
            .collect()
    }

    pub fn route_count(&self) -> usize {
        self.store.len()
    }
}
