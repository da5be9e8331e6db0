//! Config - Application Configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_API_BASE_URL};
use crate::domain::user::UserId;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Main application configuration, persisted as TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API server settings
    pub api: ApiConfig,
    /// Locale code (`en`, `es`); detected from the OS when unset
    pub locale: Option<String>,
    /// Identity of the signed-in viewer
    pub viewer_id: Option<UserId>,
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server root, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Per-request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Save to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// Record the chosen UI language in the file at `path`, leaving every
    /// other stored setting as it was
    pub fn store_locale_at(path: &Path, locale: &str) -> Result<()> {
        let mut stored = Self::load_from(path)?;
        stored.locale = Some(locale.to_string());
        stored.save_to(path)
    }

    /// Record the chosen UI language in the default config file
    pub fn store_locale(locale: &str) -> Result<()> {
        Self::store_locale_at(&Self::default_path()?, locale)
    }
}
