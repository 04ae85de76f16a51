//! Web server for the tutorial page.
//!
//! Renders the page on every request, the way a browser would run the
//! page's loaders on every page load, and serves the site's static files.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::fetch::{ContentError, ContentSource, ResourcePaths};
use crate::layout::Layout;
use crate::page::ShellOptions;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub layout: Layout,
    pub resources: ResourcePaths,
    /// Host page file, re-read per request. The built-in page is used when unset.
    pub page: Option<PathBuf>,
    pub shell: ShellOptions,
    /// Local site directory whose `static/` is served, if the site is not a URL.
    pub site_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self, ContentError> {
        Ok(Self {
            source: Arc::from(settings.content_source()?),
            layout: settings.layout,
            resources: settings.resources.clone(),
            page: settings.page.clone(),
            shell: settings.shell.clone(),
            site_dir: settings.site_dir(),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::fetch::DirSource;

    const TEAM: &str = r#"{
        "organizers": [
            {"name": "Ada Lovelace", "image": "static/ada.jpg",
             "website": "https://ada.test", "affiliationNumbers": [1]}
        ],
        "affiliations": [{"number": 1, "name": "Analytical Engines", "website": "https://ae.test"}]
    }"#;

    const READING: &str = r#"{"papers": [{"title": "Paper One", "link": "https://p1.test"}]}"#;

    fn setup_site() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("team.json"), TEAM).unwrap();
        std::fs::write(static_dir.join("reading-list.json"), READING).unwrap();
        dir
    }

    fn setup_test_app(site: &std::path::Path, layout: Layout) -> axum::Router {
        let state = AppState {
            source: Arc::new(DirSource::new(site)),
            layout,
            resources: ResourcePaths::default(),
            page: None,
            shell: ShellOptions::default(),
            site_dir: Some(site.to_path_buf()),
        };
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_sections() {
        let site = setup_site();
        let (status, body) = get(setup_test_app(site.path(), Layout::V1), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains(r#"href="https://ae.test""#));
        assert!(body.contains("Paper One"));
        // No schedule.json: the container is left empty
        assert!(body.contains(r#"<div id="scheduleContent"></div>"#));
    }

    #[tokio::test]
    async fn test_each_request_is_a_fresh_load() {
        let site = setup_site();
        let app = setup_test_app(site.path(), Layout::V1);

        let (_, first) = get(app.clone(), "/").await;
        let (_, second) = get(app, "/").await;
        assert_eq!(first, second);
        assert_eq!(first.matches("papers-list").count(), 1);
    }

    #[tokio::test]
    async fn test_static_files_served() {
        let site = setup_site();
        let (status, body) = get(setup_test_app(site.path(), Layout::V2), "/static/team.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ada Lovelace"));

        let (status, _) = get(setup_test_app(site.path(), Layout::V2), "/static/missing.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_host_page() {
        let site = setup_site();
        let state = AppState {
            source: Arc::new(DirSource::new(site.path())),
            layout: Layout::V1,
            resources: ResourcePaths::default(),
            page: Some(site.path().join("nope.html")),
            shell: ShellOptions::default(),
            site_dir: None,
        };
        let (status, _) = get(create_router(state), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_api_inspect() {
        let site = setup_site();
        let (status, body) = get(setup_test_app(site.path(), Layout::V2), "/api/inspect").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["layout"], "v2");
        assert_eq!(json["containers"].as_array().unwrap().len(), 5);
        assert_eq!(json["citation"], false);
    }
}
