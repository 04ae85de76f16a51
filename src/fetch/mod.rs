//! Content fetching.
//!
//! A [`ContentSource`] retrieves one named resource per call; [`fetch_json`]
//! decodes it. There is no retry and no caching: every page load fetches
//! each document afresh.

mod dir;
mod http;

pub use dir::DirSource;
pub use http::{HttpOptions, HttpSource};

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while retrieving or decoding a resource.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid resource URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Relative paths of the page's JSON documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    #[serde(default = "default_team")]
    pub team: String,
    #[serde(default = "default_schedule")]
    pub schedule: String,
    #[serde(default = "default_reading_list")]
    pub reading_list: String,
}

fn default_team() -> String {
    "static/team.json".to_string()
}

fn default_schedule() -> String {
    "static/schedule.json".to_string()
}

fn default_reading_list() -> String {
    "static/reading-list.json".to_string()
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            team: default_team(),
            schedule: default_schedule(),
            reading_list: default_reading_list(),
        }
    }
}

/// Somewhere page documents can be fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve the raw bytes of `path`, relative to the site root.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Fetch `path` and decode it as JSON.
pub async fn fetch_json<T: DeserializeOwned>(
    source: &dyn ContentSource,
    path: &str,
) -> Result<T, ContentError> {
    tracing::debug!("Fetching {} from {}", path, source.location());
    let bytes = source.fetch(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| ContentError::Decode {
        resource: path.to_string(),
        source: e,
    })
}

/// Check whether a site location is a URL rather than a directory.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Open a content source for a site directory or base URL.
pub fn open_source(
    location: &str,
    options: &HttpOptions,
) -> Result<Box<dyn ContentSource>, ContentError> {
    if is_url(location) {
        Ok(Box::new(HttpSource::new(location, options)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingListDocument;
    use tempfile::tempdir;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/tutorial/"));
        assert!(is_url("http://localhost:3030"));
        assert!(!is_url("./site"));
        assert!(!is_url("/var/www/site"));
    }

    #[test]
    fn test_default_resource_paths() {
        let paths = ResourcePaths::default();
        assert_eq!(paths.team, "static/team.json");
        assert_eq!(paths.schedule, "static/schedule.json");
        assert_eq!(paths.reading_list, "static/reading-list.json");
    }

    #[tokio::test]
    async fn test_fetch_json_decode_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/reading-list.json"), "{not json").unwrap();

        let source = DirSource::new(dir.path());
        let result: Result<ReadingListDocument, _> =
            fetch_json(&source, "static/reading-list.json").await;
        assert!(matches!(result, Err(ContentError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_open_source_picks_directory() {
        let dir = tempdir().unwrap();
        let source = open_source(dir.path().to_str().unwrap(), &HttpOptions::default()).unwrap();
        assert_eq!(source.location(), dir.path().display().to_string());
    }
}
