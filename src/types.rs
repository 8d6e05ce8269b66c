// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the site index.
//!
//! A crawl produces one `PageRecord` per reachable page. Queries produce
//! `SearchResult`s, which are derived and never stored.
//!
//! # Invariants
//!
//! - **PageRecord**: `url` is a site-relative path and the unique key of the
//!   index. `body_text` never contains runs of whitespace. A record is never
//!   mutated after it enters the index; a re-crawl replaces it wholesale.
//!
//! - **SearchResult**: sequences are ordered by `score` descending, with index
//!   insertion order as the tie-break, and never exceed the configured limit.

use serde::{Deserialize, Serialize};

/// The indexed representation of one page.
///
/// Serialized camelCase so a session snapshot reads the same as the records a
/// browser front end would hand to `SiteSearcher::loadRecords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Site-relative path, e.g. `about.html` or `projects/project-clark.html`.
    pub url: String,
    pub title: String,
    /// Meta description; empty when the page has none.
    #[serde(default)]
    pub description: String,
    /// Visible body text, whitespace collapsed.
    #[serde(default)]
    pub body_text: String,
}

impl PageRecord {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            body_text: body_text.into(),
        }
    }
}

/// One ranked match, ready for a rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub score: f64,
}

/// Where a rendered result set came from.
///
/// The surface uses this to show an "indexing…" hint while the crawl is still
/// running, and to tell "no results" apart from "not searched yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexStatus {
    /// Crawl still running: results mix the partial index and the quick scan.
    Indexing,
    /// Crawl finished: results come from the full index.
    Ready,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_record_json_shape() {
        let record = PageRecord::new("about.html", "About Us", "", "We design interiors.");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"bodyText\":\"We design interiors.\""));
    }

    #[test]
    fn test_page_record_missing_optional_fields() {
        let json = r#"{"url": "contact.html", "title": "Contact"}"#;
        let record: PageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.body_text, "");
    }
}
