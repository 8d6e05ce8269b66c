// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction around a match.
//!
//! The window is measured in characters and starts a quarter-window before the
//! match so the reader sees some lead-in. `…` marks a side that was cut.

use crate::util::slice_chars;

pub const ELLIPSIS: &str = "…";

/// A window of `text` around the char range `[offset, offset + match_len)`.
pub fn snippet_around(text: &str, offset: usize, match_len: usize, window: usize) -> String {
    let len = text.chars().count();
    if len <= window {
        return text.to_string();
    }

    let lead = window.saturating_sub(match_len).min(window / 4);
    let mut start = offset.min(len).saturating_sub(lead);
    let end = (start + window).min(len);
    if end == len {
        start = len.saturating_sub(window);
    }

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(slice_chars(text, start, end).trim());
    if end < len {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// The first `window` characters of `text`.
pub fn leading_snippet(text: &str, window: usize) -> String {
    snippet_around(text, 0, 0, window)
}
