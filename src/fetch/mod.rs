// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page retrieval: one attempt per page, failures collapse to "unavailable".
//!
//! The crawl never retries. A page that fails once is simply missing from the
//! index for the session. Everything that talks to the network sits behind the
//! `PageFetcher` trait so the crawl and the controller can be driven by an
//! in-memory site in tests.

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Retrieves a page's HTML by same-origin relative path.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// One network request. Non-2xx, network failure and timeout all map to
    /// `FetchError::Unavailable`.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch(path).await
    }
}

/// Parse a site base URL, making sure relative paths join below it.
///
/// `https://example.com/site` is treated as the directory `/site/`, so that
/// `about.html` resolves to `/site/about.html` rather than `/about.html`.
pub fn parse_base(base: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidBase(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidBase(base.to_string()));
    }
    if !url.path().ends_with('/') {
        let dir = format!("{}/", url.path());
        url.set_path(&dir);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Resolve a relative path against the base and refuse anything off-origin.
pub fn resolve_same_origin(base: &Url, path: &str) -> Result<Url, FetchError> {
    let url = base
        .join(path.trim())
        .map_err(|e| FetchError::Unavailable(format!("{path}: {e}")))?;
    if url.origin() != base.origin() {
        return Err(FetchError::CrossOrigin(url.to_string()));
    }
    Ok(url)
}

/// Turn an absolute same-origin URL into the site-relative key used by the index.
///
/// The key is the path below the base directory, without query or fragment.
/// The base directory itself maps to `index.html`. Returns `None` for other
/// origins and for same-origin paths outside the base directory, since a key
/// is always joined back under the base.
pub fn site_relative_path(base: &Url, url: &Url) -> Option<String> {
    if url.origin() != base.origin() {
        return None;
    }
    let relative = url.path().strip_prefix(base.path())?;
    if relative.is_empty() {
        Some("index.html".to_string())
    } else if relative.ends_with('/') {
        Some(format!("{relative}index.html"))
    } else {
        Some(relative.to_string())
    }
}
