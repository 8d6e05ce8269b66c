// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Score descending, and nothing else. Ties keep the order the results were
//! produced in, which is index insertion order, because `sort_by` is stable.
//! That makes the output deterministic without an explicit tiebreak key.

use crate::config::MAX_RESULTS;
use crate::types::SearchResult;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Higher score first. NaN never occurs, but compares equal if it did.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable sort by descending score, then cut to `limit`, which never exceeds
/// `MAX_RESULTS`.
pub fn rank(results: &mut Vec<SearchResult>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit.min(MAX_RESULTS));
}

/// Combine two result lists, keeping the first occurrence of each url.
///
/// `primary` wins ties and duplicates: while indexing, full-index results go
/// first and the quick scan only fills in pages the index has not reached.
pub fn merge_ranked(
    primary: Vec<SearchResult>,
    secondary: Vec<SearchResult>,
    limit: usize,
) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    let mut merged: Vec<SearchResult> = primary
        .into_iter()
        .chain(secondary)
        .filter(|r| seen.insert(r.url.clone()))
        .collect();
    rank(&mut merged, limit);
    merged
}
