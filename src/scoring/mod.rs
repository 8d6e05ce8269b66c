// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A record's score is the sum of independently weighted signals (title,
//! title prefix, url, description, body). Field weights dominate; the body
//! position bonus only separates pages that match in the same fields.

mod core;
pub mod ranking;
pub mod snippet;

pub use self::core::*;

use crate::config::{DEFAULT_MAX_RESULTS, DEFAULT_SNIPPET_WINDOW};

/// Output bounds for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLimits {
    pub max_results: usize,
    /// Snippet length in characters, excluding ellipsis markers.
    pub snippet_window: usize,
}

impl Default for ScoreLimits {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            snippet_window: DEFAULT_SNIPPET_WINDOW,
        }
    }
}
