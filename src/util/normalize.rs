// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and whitespace normalization.
//!
//! Matching is substring-based, and snippets are cut from the original text at
//! the offset where the folded text matched. That only works if folding keeps
//! the character count intact, so `fold_case` maps every char to exactly one
//! char. Offsets are character offsets throughout, never byte offsets.

/// Lowercase a string one char at a time, keeping the char count unchanged.
///
/// `str::to_lowercase` can expand a char into several (`İ` → `i̇`), which would
/// shift every offset after it. Taking only the first lowercase char keeps
/// folded and original text aligned.
pub fn fold_case(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// Both arguments are expected to be folded already.
pub fn char_offset_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

/// Slice a string by character positions `[start, end)`, clamped to its length.
pub fn slice_chars(value: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    value.chars().skip(start).take(end - start).collect()
}
