//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Route;
use crate::lookup::LookupResult;

use super::dto::NO_ROUTE_MESSAGE;

/// Hint shown under the "no route" message.
const NO_ROUTE_HINT: &str = "Select a different origin or destination.";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: route selectors and the full timetable.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub origins: Vec<String>,
    /// Destinations for the pre-selected (first) origin
    pub destinations: Vec<String>,
    pub routes: Vec<RouteView>,
}

/// Lookup result as a standalone page, for form submits without the script.
#[derive(Template)]
#[template(path = "lookup_page.html")]
pub struct LookupPageTemplate {
    pub result: ResultView,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// `<option>` list for the destination selector.
#[derive(Template)]
#[template(path = "destination_options.html")]
pub struct DestinationOptionsTemplate {
    pub destinations: Vec<String>,
}

/// Lookup result panel.
#[derive(Template)]
#[template(path = "lookup_result.html")]
pub struct LookupResultTemplate {
    pub result: ResultView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One route in the timetable listing.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub origin: String,
    pub destination: String,
    pub times: Vec<String>,
}

impl RouteView {
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            times: route.times().iter().map(|t| t.to_string()).collect(),
        }
    }

    /// e.g. "Downtown → Airport"
    pub fn heading(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// Lookup result panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub found: bool,
    /// "Today at 06:15", or the no-route message
    pub next_time: String,
    /// "Leaves in 45 min", or a hint to pick another pair
    pub wait: String,
}

impl ResultView {
    pub fn from_result(result: &LookupResult<'_>) -> Self {
        let title = format!("{} → {}", result.origin(), result.destination());

        match result.next_bus() {
            Some(next) => Self {
                title,
                found: true,
                next_time: next.departure.to_string(),
                wait: next.departure.wait_label().to_string(),
            },
            None => Self {
                title,
                found: false,
                next_time: NO_ROUTE_MESSAGE.to_string(),
                wait: NO_ROUTE_HINT.to_string(),
            },
        }
    }
}
