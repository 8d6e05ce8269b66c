// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page indexing: turning fetched HTML into `PageRecord`s.
//!
//! Parsing is best effort. html5ever recovers from almost anything, and every
//! field we cannot find falls back to a derived or empty value, so `parse_page`
//! has no error path at all.

pub mod sitemap;

pub use sitemap::parse_sitemap;

use crate::types::PageRecord;
use crate::util::collapse_whitespace;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never visible.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "svg", "head"];

/// Elements that break words apart when their text is flattened.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul", "button", "option",
];

/// Deeper markup than this is truncated instead of recursed into.
const MAX_NESTING_DEPTH: usize = 256;

/// Parse one page into a record.
pub fn parse_page(url: &str, html: &str) -> PageRecord {
    let document = Html::parse_document(html);

    let title = first_text(&document, "title").unwrap_or_else(|| title_from_url(url));
    let description = meta_description(&document).unwrap_or_default();
    let body_text = body_element(&document)
        .map(visible_text)
        .unwrap_or_default();

    PageRecord {
        url: url.to_string(),
        title,
        description,
        body_text,
    }
}

/// Derive a readable title from a path: `commercial-showrooms.html` → `Commercial Showrooms`.
pub fn title_from_url(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let file = without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);

    if stem.is_empty() || stem.eq_ignore_ascii_case("index") {
        return "Home".to_string();
    }

    stem.split(['-', '_', '.', '+', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Visible text under an element, whitespace collapsed.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_visible_text(element, &mut raw, 0);
    collapse_whitespace(&raw)
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String, depth: usize) {
    let name = element.value().name();
    if SKIPPED_ELEMENTS.contains(&name) {
        return;
    }
    if depth > MAX_NESTING_DEPTH {
        tracing::debug!(element = name, "nesting limit reached, truncating text");
        return;
    }

    let is_block = BLOCK_ELEMENTS.contains(&name);
    if is_block {
        out.push(' ');
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    push_visible_text(child_element, out, depth + 1);
                }
            }
            _ => {}
        }
    }
    if is_block {
        out.push(' ');
    }
}

/// The `<body>` element, or the document root for fragments without one.
pub(crate) fn body_element(document: &Html) -> Option<ElementRef<'_>> {
    select_first(document, "body").or_else(|| Some(document.root_element()))
}

pub(crate) fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

pub(crate) fn first_text(document: &Html, css: &str) -> Option<String> {
    let text = collapse_whitespace(&select_first(document, css)?.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

pub(crate) fn meta_content(document: &Html, css: &str) -> Option<String> {
    let content = select_first(document, css)?.value().attr("content")?;
    let content = collapse_whitespace(content);
    (!content.is_empty()).then_some(content)
}

fn meta_description(document: &Html) -> Option<String> {
    meta_content(document, r#"meta[name="description"]"#)
        .or_else(|| meta_content(document, r#"meta[property="og:description"]"#))
        .or_else(|| meta_content(document, r#"meta[name="og:description"]"#))
}
