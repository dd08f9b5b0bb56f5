//! Configuration loading for todoist-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables `TODOIST_API_TOKEN`, `TODOIST_API_URL`, `TODOIST_PAGE_SIZE`
//! 2. The file named by `TODOIST_MCP_CONFIG_PATH`
//! 3. ~/.binks/todoist.toml
//! 4. Default values
//!
//! Environment values override the file. The token has no default.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::todoist::{DEFAULT_BASE_URL, MAX_PAGE_SIZE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Todoist API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal API token
    #[serde(default)]
    pub token: Option<String>,
    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Items requested per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

// Hand-written so the token never reaches a log line
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    50
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Overlay environment values; `lookup` is `std::env::var` outside tests
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(token) = lookup("TODOIST_API_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.api.token = Some(token);
        }
        if let Some(url) = lookup("TODOIST_API_URL").filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(size) = lookup("TODOIST_PAGE_SIZE") {
            self.api.page_size = size
                .trim()
                .parse()
                .with_context(|| format!("TODOIST_PAGE_SIZE is not a number: {}", size))?;
        }
        Ok(())
    }

    /// Check that the config can produce a working client
    pub fn validate(&self) -> Result<()> {
        self.token()?;
        self.base_url()?;
        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            return Err(anyhow!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                self.api.page_size
            ));
        }
        Ok(())
    }

    pub fn token(&self) -> Result<&str> {
        self.api
            .token
            .as_deref()
            .ok_or_else(|| anyhow!("TODOIST_API_TOKEN environment variable is required"))
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api.base_url)
            .with_context(|| format!("invalid Todoist base URL: {}", self.api.base_url))
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TODOIST_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".binks").join("todoist.toml"))
    }
}
