//! HTTP source backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{ContentError, ContentSource};

/// Default user agent for document requests.
pub const USER_AGENT: &str = concat!("tutorial-page/", env!("CARGO_PKG_VERSION"));

/// Client options for [`HttpSource`].
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Custom user agent, or the crate default.
    pub user_agent: Option<String>,
}

/// Fetches resources relative to a base URL.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base`.
    ///
    /// The base is treated as a directory even without a trailing slash, so
    /// `https://host/tutorial` resolves `static/team.json` to
    /// `https://host/tutorial/static/team.json`.
    pub fn new(base: &str, options: &HttpOptions) -> Result<Self, ContentError> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&normalized).map_err(|e| ContentError::InvalidUrl {
            url: normalized.clone(),
            source: e,
        })?;

        let mut builder = Client::builder()
            .user_agent(options.user_agent.as_deref().unwrap_or(USER_AGENT))
            .gzip(true)
            .brotli(true);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ContentError::Client)?;

        Ok(Self { client, base })
    }

    /// Resolve a resource path against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, ContentError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ContentError::InvalidUrl {
                url: path.to_string(),
                source: e,
            })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ContentError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ContentError::Transport {
                url: url.to_string(),
                source: e,
            })?;
        Ok(bytes.to_vec())
    }

    fn location(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_trailing_slash() {
        let source = HttpSource::new("https://example.com/tutorial", &HttpOptions::default())
            .unwrap();
        assert_eq!(
            source.resolve("static/team.json").unwrap().as_str(),
            "https://example.com/tutorial/static/team.json"
        );
        assert_eq!(
            source.resolve("/static/team.json").unwrap().as_str(),
            "https://example.com/tutorial/static/team.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpSource::new("not a url", &HttpOptions::default());
        assert!(matches!(result, Err(ContentError::InvalidUrl { .. })));
    }

    #[test]
    fn test_location_is_base() {
        let source =
            HttpSource::new("http://localhost:3030", &HttpOptions::default()).unwrap();
        assert_eq!(source.location(), "http://localhost:3030/");
    }
}
