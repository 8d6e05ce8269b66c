// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::types::PageRecord;
#[cfg(feature = "native")]
use crate::types::{IndexStatus, SearchResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Create a record with an empty description.
pub fn make_record(url: &str, title: &str, body_text: &str) -> PageRecord {
    PageRecord::new(url, title, "", body_text)
}

/// A small interior-design site used across tests.
pub fn sample_site() -> Vec<PageRecord> {
    vec![
        PageRecord::new(
            "index.html",
            "SKN Interior Solutions",
            "Interior design studio for homes, offices and showrooms.",
            "Welcome to SKN. We design residential and commercial interiors across the region.",
        ),
        make_record(
            "about.html",
            "About Us",
            "We design residential and commercial interiors.",
        ),
        make_record(
            "services.html",
            "Our Services",
            "Space planning, turnkey fit-outs and furniture design for residential clients.",
        ),
        make_record(
            "commercial-showrooms.html",
            "Commercial Showrooms",
            "Showroom interiors that put the product first.",
        ),
        make_record("contact.html", "Contact", "Reach our team."),
    ]
}

/// Minimal HTML document with a title and body paragraph.
pub fn make_html(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{}</title></head><body><p>{}</p></body></html>",
        title, body
    )
}

/// Sitemap listing `paths` below `base` (which should end with `/`).
pub fn make_sitemap(base: &str, paths: &[&str]) -> String {
    let entries: String = paths
        .iter()
        .map(|path| format!("  <url><loc>{}{}</loc></url>\n", base, path))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        entries
    )
}

/// In-memory site: path → HTML. Unknown paths are unavailable.
#[derive(Debug, Default)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(path.to_string(), html.into());
        self
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PageFetcher for MapFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.requests.lock().push(path.to_string());
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(format!("{path}: HTTP 404 Not Found")))
    }
}

/// Search surface that records everything pushed to it.
#[cfg(feature = "native")]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    input: Mutex<String>,
    page: crate::controller::CurrentPage,
    renders: Mutex<Vec<(Vec<SearchResult>, IndexStatus)>>,
    expanded: Mutex<bool>,
    navigations: Mutex<Vec<String>>,
}

#[cfg(feature = "native")]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface showing the page `url` with markup `html`.
    pub fn with_page(url: &str, html: &str) -> Self {
        Self {
            page: crate::controller::CurrentPage::new(url, html),
            ..Self::default()
        }
    }

    pub fn set_input(&self, value: &str) {
        *self.input.lock() = value.to_string();
    }

    pub fn renders(&self) -> Vec<(Vec<SearchResult>, IndexStatus)> {
        self.renders.lock().clone()
    }

    pub fn last_render(&self) -> Option<(Vec<SearchResult>, IndexStatus)> {
        self.renders.lock().last().cloned()
    }

    pub fn clear_renders(&self) {
        self.renders.lock().clear();
    }

    pub fn is_expanded(&self) -> bool {
        *self.expanded.lock()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }
}

#[cfg(feature = "native")]
impl crate::controller::SearchSurface for RecordingSurface {
    fn input_value(&self) -> String {
        self.input.lock().clone()
    }

    fn current_page(&self) -> crate::controller::CurrentPage {
        self.page.clone()
    }

    fn render(&self, results: &[SearchResult], status: IndexStatus) {
        self.renders.lock().push((results.to_vec(), status));
    }

    fn set_expanded(&self, expanded: bool) {
        *self.expanded.lock() = expanded;
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().push(url.to_string());
    }
}
