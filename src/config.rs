//! Configuration management.
//!
//! Settings come from, lowest priority first: built-in defaults, a config
//! file, `TPAGE_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::{is_url, open_source, ContentError, ContentSource, HttpOptions, ResourcePaths};
use crate::layout::Layout;
use crate::page::ShellOptions;

/// Base name of discovered config files.
pub const CONFIG_BASENAME: &str = "tutorial-page";

/// Config file extensions, in discovery order.
const EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site directory or base URL the JSON documents are fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Host HTML page. The built-in page for the layout is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Where `render` writes the page. Stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// BibTeX for the built-in page's citation block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub resources: ResourcePaths,
    /// Path the config was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// The format is chosen by extension; anything unrecognized is read as JSON.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_error = |format: &'static str, message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_error("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_error("JSON", e.to_string())),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Apply `TPAGE_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    fn apply_env_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(site) = var("TPAGE_SITE") {
            self.site = Some(site);
        }
        if let Some(layout) = var("TPAGE_LAYOUT") {
            let layout = layout
                .parse::<Layout>()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "TPAGE_LAYOUT".to_string(),
                    message,
                })?;
            self.layout = Some(layout);
        }
        if let Some(timeout) = var("TPAGE_REQUEST_TIMEOUT") {
            let timeout = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "TPAGE_REQUEST_TIMEOUT".to_string(),
                    message: e.to_string(),
                })?;
            self.request_timeout = Some(timeout);
        }
        if let Some(user_agent) = var("TPAGE_USER_AGENT") {
            self.user_agent = Some(user_agent);
        }
        Ok(())
    }
}

/// Resolve a path that may be relative to the config file.
/// - Paths starting with ~ are expanded
/// - Absolute paths are returned as-is
/// - Relative paths are joined onto `base_dir`
pub fn resolve_path(path_str: &str, base_dir: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(path_str);
    let path = Path::new(expanded.as_ref());

    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Look for `tutorial-page.{toml,json,yaml,yml}` in `dir`.
pub fn find_config_in(dir: &Path) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", CONFIG_BASENAME, ext)))
        .find(|path| path.is_file())
}

/// Look for `config.*` in the user config directory.
fn find_user_config() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join(CONFIG_BASENAME);
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{}", ext)))
        .find(|path| path.is_file())
}

/// Find a config file. The first match wins:
/// the site directory, the current directory, then the user config directory.
pub fn discover_config(site_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = site_dir.and_then(find_config_in) {
        return Some(path);
    }
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in(&cwd))
    {
        return Some(path);
    }
    find_user_config()
}

/// Command-line values that take priority over everything else.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides discovery).
    pub config_path: Option<PathBuf>,
    pub site: Option<String>,
    pub layout: Option<Layout>,
    pub page: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Site directory or base URL.
    pub site: String,
    pub layout: Layout,
    pub page: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub shell: ShellOptions,
    pub resources: ResourcePaths,
    pub request_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Config file the settings were loaded from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site: ".".to_string(),
            layout: Layout::default(),
            page: None,
            output: None,
            shell: ShellOptions::default(),
            resources: ResourcePaths::default(),
            request_timeout: None,
            user_agent: None,
            config_path: None,
        }
    }
}

impl Settings {
    /// Resolve settings from a config (already carrying env overrides) and
    /// command-line options.
    pub fn resolve(config: &Config, options: &LoadOptions) -> Self {
        let mut settings = Settings::default();
        let base_dir = config
            .base_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        if let Some(ref site) = config.site {
            settings.site = if is_url(site) {
                site.clone()
            } else {
                resolve_path(site, &base_dir).display().to_string()
            };
        }
        if let Some(layout) = config.layout {
            settings.layout = layout;
        }
        if let Some(ref page) = config.page {
            settings.page = Some(resolve_path(page, &base_dir));
        }
        if let Some(ref output) = config.output {
            settings.output = Some(resolve_path(output, &base_dir));
        }
        if let Some(ref title) = config.title {
            settings.shell.title = title.clone();
        }
        settings.shell.citation = config.citation.clone();
        settings.request_timeout = config.request_timeout.map(Duration::from_secs);
        settings.user_agent = config.user_agent.clone();
        settings.resources = config.resources.clone();
        settings.config_path = config.source_path.clone();

        // Command-line flags win
        if let Some(ref site) = options.site {
            settings.site = site.clone();
        }
        if let Some(layout) = options.layout {
            settings.layout = layout;
        }
        if let Some(ref page) = options.page {
            settings.page = Some(page.clone());
        }
        if let Some(ref output) = options.output {
            settings.output = Some(output.clone());
        }

        settings
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: self.request_timeout,
            user_agent: self.user_agent.clone(),
        }
    }

    /// The site directory, or `None` when the site is a URL.
    pub fn site_dir(&self) -> Option<PathBuf> {
        (!is_url(&self.site)).then(|| PathBuf::from(&self.site))
    }

    /// Open the content source for the configured site.
    pub fn content_source(&self) -> Result<Box<dyn ContentSource>, ContentError> {
        open_source(&self.site, &self.http_options())
    }
}

/// Load settings: discover and read the config file, apply environment
/// overrides, then command-line options.
pub async fn load_settings(options: LoadOptions) -> Result<Settings, ConfigError> {
    let config_path = match options.config_path {
        Some(ref path) => Some(path.clone()),
        None => {
            let site = options
                .site
                .clone()
                .or_else(|| std::env::var("TPAGE_SITE").ok());
            let site_dir = site.filter(|s| !is_url(s)).map(PathBuf::from);
            discover_config(site_dir.as_deref())
        }
    };

    let mut config = match config_path {
        Some(ref path) => {
            tracing::debug!("Loading config from {}", path.display());
            Config::load_from_path(path).await?
        }
        None => Config::default(),
    };
    config.apply_env()?;

    Ok(Settings::resolve(&config, &options))
}
