// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the indexer, the scorer and the quick scan.
//!
//! Case folding and whitespace collapsing live here so that the text we index
//! and the text we match against are always prepared the same way.

pub mod normalize;

pub use normalize::{char_offset_of, collapse_whitespace, fold_case, slice_chars};
