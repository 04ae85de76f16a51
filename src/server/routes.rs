//! Router configuration for the page server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::handlers;
use super::AppState;

/// Create the router. The site's `static/` directory is served alongside
/// the page when the site is a local directory.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/api/inspect", get(handlers::api_inspect));

    if let Some(ref site_dir) = state.site_dir {
        router = router.nest_service("/static", ServeDir::new(site_dir.join("static")));
    }

    router.layer(CorsLayer::permissive()).with_state(state)
}
