// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weights behind search ranking.
//!
//! The numbers themselves are policy. What the tests pin down are the
//! relations between them:
//!
//! ```text
//! TITLE_MATCH > BODY_MATCH + MAX_BODY_POSITION_BONUS      (80 > 30)
//! DESCRIPTION_MATCH > URL_MATCH > BODY_MATCH + bonus       (40 > 30 ≥ 30)
//! ```
//!
//! so a title hit always outranks a body-only hit wherever the body match sits,
//! and the position bonus only orders pages that matched the same fields.

use crate::types::PageRecord;
use crate::util::{char_offset_of, fold_case};

/// Query appears anywhere in the title.
pub const TITLE_MATCH_SCORE: f64 = 80.0;

/// Extra when the title starts with the query.
pub const TITLE_PREFIX_BONUS: f64 = 20.0;

/// Query appears in the meta description.
pub const DESCRIPTION_MATCH_SCORE: f64 = 40.0;

/// Query appears in the page path.
pub const URL_MATCH_SCORE: f64 = 30.0;

/// Query appears in the body text, before the position bonus.
pub const BODY_MATCH_SCORE: f64 = 10.0;

/// Body match at offset 0 gets all of this; at the end of the text, none.
pub const MAX_BODY_POSITION_BONUS: f64 = 20.0;

/// Where a folded query landed in one record. Offsets are in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordMatch {
    pub title: Option<usize>,
    pub url: bool,
    pub description: bool,
    pub body: Option<usize>,
    /// Character length of the body text, for the position bonus.
    pub body_len: usize,
}

impl RecordMatch {
    /// Locate `needle` (already folded and non-empty) in each field.
    pub fn find(needle: &str, record: &PageRecord) -> Self {
        let body = fold_case(&record.body_text);
        Self {
            title: char_offset_of(&fold_case(&record.title), needle),
            url: fold_case(&record.url).contains(needle),
            description: fold_case(&record.description).contains(needle),
            body: char_offset_of(&body, needle),
            body_len: body.chars().count(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.title.is_some() || self.url || self.description || self.body.is_some()
    }

    /// Sum of the weighted signals. Zero means no match.
    pub fn score(&self) -> f64 {
        let mut score = 0.0;
        if let Some(offset) = self.title {
            score += TITLE_MATCH_SCORE;
            if offset == 0 {
                score += TITLE_PREFIX_BONUS;
            }
        }
        if self.url {
            score += URL_MATCH_SCORE;
        }
        if self.description {
            score += DESCRIPTION_MATCH_SCORE;
        }
        if let Some(offset) = self.body {
            score += BODY_MATCH_SCORE + position_bonus(offset, self.body_len);
        }
        score
    }
}

/// Position bonus: body matches near the start of the text score higher.
///
/// Linear from `MAX_BODY_POSITION_BONUS` at offset 0 down to 0 at the end.
pub fn position_bonus(offset: usize, text_len: usize) -> f64 {
    if text_len > 0 {
        let clamped = offset.min(text_len) as f64;
        MAX_BODY_POSITION_BONUS * (1.0 - clamped / text_len as f64)
    } else {
        0.0
    }
}
