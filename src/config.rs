//! Configuration management
//!
//! Deployment settings live in `~/.screener/config.toml` (see [`crate::paths`]).
//! The API endpoint can be overridden with `SCREENER_API_URL` or `--api-url`.
//!
//! ```toml
//! [api]
//! url = "https://script.google.com/macros/s/<deployment>/exec"
//! timeout_secs = 30
//! max_retries = 0
//!
//! [screening]
//! require_include_reason = true
//! exclude_reasons = ["not relevant", "duplicate", "other"]
//!
//! [screening.roles.C2]
//! include_reasons = ["agree with C1", "other"]
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::RetryPolicy;
use crate::core::models::ScreeningPolicy;
use crate::paths;

/// Environment variable overriding the configured endpoint
pub const API_URL_ENV: &str = "SCREENER_API_URL";

/// Screener configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote store settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Reason catalog and decision rules
    #[serde(default)]
    pub screening: ScreeningPolicy,
}

/// Remote store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries for read operations on transient failures
    #[serde(default)]
    pub max_retries: u32,
    /// Initial retry delay, doubled per attempt
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl ApiConfig {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Retry policy for read operations
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

impl Config {
    /// Load from the default location; a missing file yields defaults
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Save to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::config_file())
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint to use: explicit override, then environment, then file
    #[must_use]
    pub fn api_url(&self, override_url: Option<&str>) -> Option<String> {
        let usable = |url: &str| {
            let url = url.trim();
            (!url.is_empty()).then(|| url.to_string())
        };
        override_url
            .and_then(usable)
            .or_else(|| std::env::var(API_URL_ENV).ok().as_deref().and_then(usable))
            .or_else(|| self.api.url.as_deref().and_then(usable))
    }
}
