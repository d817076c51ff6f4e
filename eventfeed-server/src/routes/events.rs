//! Event listing pages.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use eventfeed_core::{apply_filter, FilterOutcome, Period};

use crate::render::{self, Render};
use crate::routes::AppError;
use crate::state::AppState;

const INVALID_FILTER_MESSAGE: &str = "Invalid filter. Please adjust your values!";
const NO_EVENTS_MESSAGE: &str = "No events found for the chosen filter!";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/events", get(all_events))
        .route("/events/search", get(search))
        .route("/events/{*slug}", get(filtered_events))
}

/// GET / - Featured events
async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let events = state.store.fetch_featured().await?;

    let body = render::page(
        "Eventfeed",
        "Find a lot of great events!",
        &render::event_list(&events),
    );
    Ok(Html(body))
}

/// GET /events - All events plus the year/month search form
async fn all_events(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let events = state.store.fetch_all().await?;

    let body = render::page(
        "All Events",
        "Browse every event in the feed",
        &format!("{}\n{}", render::search_form(), render::event_list(&events)),
    );
    Ok(Html(body))
}

#[derive(Deserialize)]
struct SearchParams {
    year: String,
    month: String,
}

/// GET /events/search - Produce the /events/{year}/{month} path
///
/// Values are passed through untouched; the filtered page owns validation.
async fn search(Query(params): Query<SearchParams>) -> Redirect {
    Redirect::to(&format!("/events/{}/{}", params.year, params.month))
}

/// GET /events/{year}/{month} - Filtered events
///
/// The fetch happens before validation, and a store failure renders the
/// same view as an invalid filter.
async fn filtered_events(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let events = match state.store.fetch_all().await {
        Ok(events) => events,
        Err(err) => {
            tracing::warn!("event store fetch failed: {err}");
            return invalid_filter_page();
        }
    };

    let segments: Vec<&str> = slug.split('/').filter(|s| !s.is_empty()).collect();

    match apply_filter(&events, &segments) {
        FilterOutcome::Invalid(err) => {
            tracing::debug!("rejected filter '{slug}': {err}");
            invalid_filter_page()
        }
        FilterOutcome::Empty(period) => {
            let body = render::page(
                "Filtered Events",
                &period_description(period),
                &render::alert(NO_EVENTS_MESSAGE),
            );
            Html(body).into_response()
        }
        FilterOutcome::Matches(period, matched) => {
            let body = render::page(
                "Filtered Events",
                &period_description(period),
                &format!("{}\n{}", period.render(), render::event_list(&matched)),
            );
            Html(body).into_response()
        }
    }
}

fn period_description(period: Period) -> String {
    format!("All events for {}/{}", period.month, period.year)
}

fn invalid_filter_page() -> Response {
    let body = render::page(
        "Filtered Events",
        "Invalid filter",
        &render::alert(INVALID_FILTER_MESSAGE),
    );
    (StatusCode::BAD_REQUEST, Html(body)).into_response()
}
