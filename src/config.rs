// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration. The CLI layers its flags on top of whatever the file
//! provides.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Hard cap on returned results. Configs may lower it, never raise it.
pub const MAX_RESULTS: usize = 12;

/// Default cap on returned results.
pub const DEFAULT_MAX_RESULTS: usize = MAX_RESULTS;

/// Default snippet length in characters, excluding ellipsis markers.
pub const DEFAULT_SNIPPET_WINDOW: usize = 130;

/// Smallest snippet window that still shows a match with some context.
pub const MIN_SNIPPET_WINDOW: usize = 20;

/// Tunables for crawling, scoring and the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Relative path of the sitemap that drives the crawl.
    pub sitemap_path: String,
    /// Quiet period after the last keystroke before a full-index query runs.
    pub debounce_ms: u64,
    pub max_results: usize,
    pub snippet_window: usize,
    /// HTTP client timeout; a slower page counts as unavailable.
    pub request_timeout_secs: u64,
    /// Prefix of the session cache key. Bump it when `PageRecord` changes shape.
    pub cache_key: String,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sitemap_path: "sitemap.xml".to_string(),
            debounce_ms: 200,
            max_results: DEFAULT_MAX_RESULTS,
            snippet_window: DEFAULT_SNIPPET_WINDOW,
            request_timeout_secs: 10,
            cache_key: "vitrine-index-v1".to_string(),
            user_agent: concat!("vitrine/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SearchConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 || self.max_results > MAX_RESULTS {
            return Err(ConfigError::Invalid(format!(
                "maxResults must be between 1 and {}",
                MAX_RESULTS
            )));
        }
        if self.snippet_window < MIN_SNIPPET_WINDOW {
            return Err(ConfigError::Invalid(format!(
                "snippetWindow must be at least {} characters",
                MIN_SNIPPET_WINDOW
            )));
        }
        if self.sitemap_path.trim().is_empty() {
            return Err(ConfigError::Invalid("sitemapPath must not be empty".into()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Limits handed to the scorer.
    pub fn limits(&self) -> crate::scoring::ScoreLimits {
        crate::scoring::ScoreLimits {
            max_results: self.max_results,
            snippet_window: self.snippet_window,
        }
    }
}
