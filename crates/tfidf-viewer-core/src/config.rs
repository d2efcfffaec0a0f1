//! Connection and field configuration for tfidf-viewer
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. `config.toml` (explicit path, else `$TFIDF_VIEWER_CONFIG_DIR`, else the
//!    platform config directory under `tfidf-viewer/`)
//! 3. environment (`TFIDF_VIEWER_URL`, `TFIDF_VIEWER_TIMEOUT`)
//! 4. command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfidfError};

/// Default Elasticsearch address
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Default timeout for a single index request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Field holding the path a document was indexed under
pub const DEFAULT_PATH_FIELD: &str = "path";

/// Field whose term vectors are compared
pub const DEFAULT_TEXT_FIELD: &str = "text";

const CONFIG_DIR: &str = "tfidf-viewer";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TFIDF_VIEWER_CONFIG_DIR";
const URL_ENV_VAR: &str = "TFIDF_VIEWER_URL";
const TIMEOUT_ENV_VAR: &str = "TFIDF_VIEWER_TIMEOUT";

const MIN_TIMEOUT_SECONDS: u64 = 1;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Query used to look a document up by its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathQuery {
    /// `match` query. Only exact when the path field is mapped as `keyword`.
    #[default]
    Match,
    /// `term` query against the indexed value, exact for any mapping that
    /// stores the path untokenized
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the Elasticsearch cluster
    pub url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Field matched against the file path.
    ///
    /// With [`PathQuery::Match`] this field should be mapped as `keyword`;
    /// an analyzed `text` field matches any document sharing a token such as
    /// `data` or `txt`, so an unknown path may still resolve.
    pub path_field: String,
    /// Query kind used for path lookups
    pub path_query: PathQuery,
    /// Field whose term statistics are fetched
    pub text_field: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            path_field: DEFAULT_PATH_FIELD.to_string(),
            path_query: PathQuery::Match,
            text_field: DEFAULT_TEXT_FIELD.to_string(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ViewerConfig {
    /// Resolve the effective configuration from every source
    pub fn resolve(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = Self::discover(explicit)?;
        config.apply_env_from(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config.validated()
    }

    /// Load the configuration file, if any
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Location of the implicit configuration file
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TfidfError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: ViewerConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply environment variables through the given lookup
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(URL_ENV_VAR).filter(|s| !s.is_empty()) {
            self.url = url;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            match timeout.parse::<u64>() {
                Ok(seconds) => self.timeout_seconds = seconds,
                Err(_) => tracing::warn!(value = %timeout, "ignoring invalid {}", TIMEOUT_ENV_VAR),
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.url {
            self.url = url.clone();
        }
        if let Some(seconds) = overrides.timeout_seconds {
            self.timeout_seconds = seconds;
        }
    }

    /// Normalize and check values
    pub fn validated(mut self) -> Result<Self> {
        let url = self.url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(TfidfError::invalid_value("url", "(empty)"));
        }
        self.url = url.to_string();

        if self.path_field.trim().is_empty() {
            return Err(TfidfError::invalid_value("path_field", "(empty)"));
        }
        if self.text_field.trim().is_empty() {
            return Err(TfidfError::invalid_value("text_field", "(empty)"));
        }

        self.timeout_seconds = self
            .timeout_seconds
            .clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS);
        Ok(self)
    }
}
