// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The UI seam of the controller.
//!
//! A surface is whatever hosts the search box: a DOM binding, a terminal UI, a
//! test double. The controller never touches widgets directly, it only reads
//! the input and pushes results through this trait.

use crate::types::{IndexStatus, SearchResult};
use std::sync::Arc;

/// The page currently shown to the user, used by the quick local fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentPage {
    /// Site-relative path, e.g. `projects/project-clark.html`.
    pub url: String,
    pub html: String,
}

impl CurrentPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Input, output and navigation for one search box.
pub trait SearchSurface: Send + Sync + 'static {
    /// Current text of the search input.
    fn input_value(&self) -> String;

    fn current_page(&self) -> CurrentPage;

    /// Replace the displayed result list.
    fn render(&self, results: &[SearchResult], status: IndexStatus);

    /// Open or close the results panel.
    fn set_expanded(&self, expanded: bool);

    fn navigate(&self, url: &str);
}

impl<T: SearchSurface> SearchSurface for Arc<T> {
    fn input_value(&self) -> String {
        (**self).input_value()
    }

    fn current_page(&self) -> CurrentPage {
        (**self).current_page()
    }

    fn render(&self, results: &[SearchResult], status: IndexStatus) {
        (**self).render(results, status)
    }

    fn set_expanded(&self, expanded: bool) {
        (**self).set_expanded(expanded)
    }

    fn navigate(&self, url: &str) {
        (**self).navigate(url)
    }
}
