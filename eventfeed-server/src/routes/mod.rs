pub mod events;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::render;

/// Convert anyhow errors into the generic error page.
///
/// Used by the unfiltered pages, where a store failure has no filter view
/// to fold into.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);

        let body = render::page(
            "Something went wrong",
            "The event list is unavailable",
            &render::alert("The event list is unavailable right now."),
        );
        (StatusCode::BAD_GATEWAY, Html(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
