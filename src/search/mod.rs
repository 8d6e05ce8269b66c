// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time scoring over the site index.
//!
//! `score` is a pure function of the query and the records: no caching, no
//! hidden state, so calling it twice on the same index yields the same output.
//! The quick scan in `quick` reuses it over the links of the loaded page.

pub mod quick;

pub use quick::quick_search;

use crate::scoring::ranking::rank;
use crate::scoring::snippet::{leading_snippet, snippet_around};
use crate::scoring::{RecordMatch, ScoreLimits};
use crate::types::{PageRecord, SearchResult};
use crate::util::fold_case;

impl AsRef<PageRecord> for PageRecord {
    fn as_ref(&self) -> &PageRecord {
        self
    }
}

/// Normalize a raw query: trim and fold case. Inner whitespace is kept, so
/// every result really contains the query as typed.
///
/// Returns an empty string for queries that should produce no results.
pub fn normalize_query(query: &str) -> String {
    fold_case(query.trim())
}

/// Rank `records` against `query`.
///
/// Records that match nowhere are dropped. The rest are sorted by descending
/// score, ties in input order, and cut to `limits.max_results`.
pub fn score<R: AsRef<PageRecord>>(
    query: &str,
    records: &[R],
    limits: &ScoreLimits,
) -> Vec<SearchResult> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return Vec::new();
    }
    let needle_len = needle.chars().count();

    let mut results: Vec<SearchResult> = records
        .iter()
        .map(AsRef::<PageRecord>::as_ref)
        .filter_map(|record| {
            let matched = RecordMatch::find(&needle, record);
            let score = matched.score();
            (score > 0.0).then(|| SearchResult {
                url: record.url.clone(),
                title: record.title.clone(),
                snippet: snippet_for(record, &matched, needle_len, limits.snippet_window),
                score,
            })
        })
        .collect();

    rank(&mut results, limits.max_results);
    results
}

/// Body window around the first body match; otherwise the description, then
/// the opening of the body.
fn snippet_for(record: &PageRecord, matched: &RecordMatch, needle_len: usize, window: usize) -> String {
    match matched.body {
        Some(offset) => snippet_around(&record.body_text, offset, needle_len, window),
        None if !record.description.is_empty() => leading_snippet(&record.description, window),
        None => leading_snippet(&record.body_text, window),
    }
}
