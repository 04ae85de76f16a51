//! Host page model.
//!
//! A [`Page`] is a parsed HTML document whose containers (found by CSS
//! selector) can have their inner HTML replaced or appended to. Writes are
//! kept beside the parsed tree and applied when the page is serialized, so
//! the host markup outside the containers comes out as it went in.

mod serialize;
mod shell;

pub use shell::{render_shell, ShellOptions};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::layout::Layout;

/// Errors that can occur while obtaining the host page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read host page {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render built-in page: {0}")]
    Shell(#[from] askama::Error),
}

/// Host HTML for a page load: the file at `path`, or the built-in page for
/// `layout` when no file is given.
pub async fn host_html(
    path: Option<&Path>,
    layout: Layout,
    shell: &ShellOptions,
) -> Result<String, PageError> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PageError::Read {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(render_shell(layout, shell)?),
    }
}

/// A parsed host page with pending container writes.
pub struct Page {
    html: Html,
    /// Replacement inner HTML, keyed by element position in document order.
    writes: BTreeMap<usize, String>,
}

impl Page {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            writes: BTreeMap::new(),
        }
    }

    fn selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!("Invalid selector {:?}: {:?}", selector, e);
                None
            }
        }
    }

    fn first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Self::selector(selector)?;
        self.html.select(&selector).next()
    }

    /// Position of `element` among all elements, in document order.
    fn ordinal(&self, element: ElementRef<'_>) -> Option<usize> {
        let all = Self::selector("*")?;
        self.html.select(&all).position(|e| e == element)
    }

    /// Check whether any element matches `selector`.
    pub fn has(&self, selector: &str) -> bool {
        self.first(selector).is_some()
    }

    /// Count elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        Self::selector(selector)
            .map(|s| self.html.select(&s).count())
            .unwrap_or(0)
    }

    /// Text content of the first match, as originally parsed.
    pub fn text(&self, selector: &str) -> Option<String> {
        self.first(selector).map(|e| e.text().collect())
    }

    /// Current inner HTML of the first match, including pending writes.
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        let element = self.first(selector)?;
        let current = self
            .ordinal(element)
            .and_then(|i| self.writes.get(&i).cloned())
            .unwrap_or_else(|| element.inner_html());
        Some(current)
    }

    /// Replace the inner HTML of the first match.
    ///
    /// Returns `false` and leaves the page untouched when nothing matches.
    pub fn set_inner_html(&mut self, selector: &str, html: impl Into<String>) -> bool {
        let Some(ordinal) = self.first(selector).and_then(|e| self.ordinal(e)) else {
            return false;
        };
        self.writes.insert(ordinal, html.into());
        true
    }

    /// Append to the inner HTML of the first match, keeping what is there.
    ///
    /// Returns `false` and leaves the page untouched when nothing matches.
    pub fn append_inner_html(&mut self, selector: &str, html: &str) -> bool {
        let Some(existing) = self.inner_html(selector) else {
            return false;
        };
        self.set_inner_html(selector, existing + html)
    }

    /// Serialize the page with all writes applied.
    pub fn to_html(&self) -> String {
        let Some(all) = Self::selector("*") else {
            return String::new();
        };
        let targets: Vec<(ElementRef<'_>, &str)> = self
            .writes
            .iter()
            .filter_map(|(ordinal, content)| {
                self.html
                    .select(&all)
                    .nth(*ordinal)
                    .map(|e| (e, content.as_str()))
            })
            .collect();

        serialize::document(&self.html, &targets)
    }
}
