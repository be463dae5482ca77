//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDateTime;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::TimeOfDay;
use crate::lookup::lookup;
use crate::schedule::RouteRecord;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Header the page script sets when it wants a bare HTML fragment.
pub const FRAGMENT_HEADER: &str = "x-requested-with";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/origins", get(list_origins))
        .route("/api/destinations", get(list_destinations))
        .route("/api/schedule", get(schedule_listing))
        .route("/lookup", get(lookup_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with route selectors and the full timetable.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let origins = state.index.origins();
    // The origin selector starts on its first entry
    let destinations = origins
        .first()
        .map(|origin| state.index.destinations(origin))
        .unwrap_or_default();

    let template = IndexTemplate {
        origins: to_owned(origins),
        destinations: to_owned(destinations),
        routes: state
            .index
            .listing()
            .into_iter()
            .map(RouteView::from_route)
            .collect(),
    };

    render(&template).map(Html)
}

/// List every origin.
async fn list_origins(State(state): State<AppState>) -> Json<OriginsResponse> {
    Json(OriginsResponse {
        origins: to_owned(state.index.origins()),
    })
}

/// List destinations reachable from an origin.
async fn list_destinations(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DestinationsRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query?;
    let destinations = to_owned(state.index.destinations(req.origin.trim()));

    if accepts_html(&headers) {
        let html = render(&DestinationOptionsTemplate { destinations })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(DestinationsResponse {
            origin: req.origin,
            destinations,
        })
        .into_response())
    }
}

/// Full timetable as JSON.
async fn schedule_listing(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let routes = state
        .index
        .listing()
        .into_iter()
        .map(RouteRecord::from_route)
        .collect();

    Json(ScheduleResponse { routes })
}

/// Find the next bus between two stops.
async fn lookup_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<LookupRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query?;
    // Sample the clock once per request
    let now = reference_instant(state.clock.now(), req.time.as_deref())?;

    let result = lookup(&state.index, req.origin.trim(), req.destination.trim(), now);

    if accepts_html(&headers) {
        let result = ResultView::from_result(&result);
        let html = if is_fragment_request(&headers) {
            render(&LookupResultTemplate { result })?
        } else {
            render(&LookupPageTemplate { result })?
        };
        Ok(Html(html).into_response())
    } else {
        Ok(Json(LookupResponse::from_result(&result)).into_response())
    }
}

/// Resolve the instant a lookup is made at.
///
/// An explicit `time` keeps today's date and replaces the time of day.
fn reference_instant(now: NaiveDateTime, time: Option<&str>) -> Result<NaiveDateTime, AppError> {
    match time.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(now),
        Some(t) => TimeOfDay::parse_hhmm(t)
            .map(|tod| tod.on(now.date()))
            .map_err(|e| AppError::BadRequest {
                message: format!("Invalid time {t}: {e}"),
            }),
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Check if the request came from the page script rather than a navigation.
fn is_fragment_request(headers: &HeaderMap) -> bool {
    headers.contains_key(FRAGMENT_HEADER)
}

fn render(template: &impl Template) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}
