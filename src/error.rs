// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these are fatal to a page embedding the search: a fetch error drops
//! one page, a sitemap error leaves the index empty, a session error is a cache
//! miss. Only configuration errors stop the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Why a page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx status, network failure or timeout. The caller skips the page.
    #[error("page unavailable: {0}")]
    Unavailable(String),

    /// The path resolved to another origin; it is never requested.
    #[error("refusing cross-origin fetch: {0}")]
    CrossOrigin(String),

    /// The fetcher's base URL cannot be used as an origin.
    #[error("invalid base URL: {0}")]
    InvalidBase(String),
}

/// The sitemap could not be read as a list of `<loc>` entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    #[error("malformed sitemap: {0}")]
    Malformed(String),
}

/// Session snapshot storage failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session snapshot is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
