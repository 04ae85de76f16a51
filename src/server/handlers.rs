//! HTTP request handlers for the page server.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::inspect::inspect;
use crate::loaders::load_page;
use crate::page::{host_html, Page};

use super::AppState;

async fn load_host(state: &AppState) -> Result<String, Response> {
    host_html(state.page.as_deref(), state.layout, &state.shell)
        .await
        .map_err(|e| {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load host page").into_response()
        })
}

/// Render the page. Every request is a fresh page load.
pub async fn index(State(state): State<AppState>) -> Response {
    let host = match load_host(&state).await {
        Ok(host) => host,
        Err(response) => return response,
    };

    let (html, report) =
        load_page(state.source.as_ref(), state.layout, &state.resources, &host).await;
    tracing::debug!("Served page with {} sections", report.sections_rendered());
    Html(html).into_response()
}

/// Report which containers and UI affordances the host page binds.
pub async fn api_inspect(State(state): State<AppState>) -> Response {
    let host = match load_host(&state).await {
        Ok(host) => host,
        Err(response) => return response,
    };

    let report = inspect(&Page::parse(&host), state.layout);
    Json(report).into_response()
}
