use crate::core::request::{RequestOptions, Style};
use crate::error::{HipsumError, HipsumResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default generator endpoint
pub const DEFAULT_BASE_URL: &str = "http://hipsum.co/api/";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "HIPSUM_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Generator
    pub base_url: String,
    pub style: Style,
    pub start_with_lorem: Option<bool>,
    /// Request timeout in seconds, 0 disables it
    pub timeout_secs: u64,

    // Behaviour
    pub single_flight: bool,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            style: Style::default(),
            start_with_lorem: None,
            timeout_secs: 30,
            single_flight: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or return defaults
    pub fn load() -> HipsumResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults when it is missing or corrupt
    pub fn load_from(path: &Path) -> HipsumResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Config>(&content) {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> HipsumResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> HipsumResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| HipsumError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HipsumError::Config(format!(
                "base_url must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Fixed request settings derived from this config
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            style: self.style,
            start_with_lorem: self.start_with_lorem,
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hipsum")
        .join("config.json")
}
