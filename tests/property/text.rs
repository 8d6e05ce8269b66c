//! Indexing and snippet robustness on arbitrary input.

use proptest::prelude::*;
use vitrine::parse_page;
use vitrine::scoring::snippet::{snippet_around, ELLIPSIS};
use vitrine::util::fold_case;

proptest! {
    /// Property: parsing never panics and body text has no whitespace runs.
    #[test]
    fn prop_parse_page_never_panics(html in ".{0,400}") {
        let record = parse_page("page.html", &html);
        prop_assert!(!record.title.is_empty());
        prop_assert!(!record.body_text.contains("  "));
        prop_assert_eq!(record.body_text.trim(), record.body_text.as_str());
    }

    /// Property: case folding never changes the character count.
    #[test]
    fn prop_fold_case_keeps_char_count(text in "\\PC{0,64}") {
        prop_assert_eq!(fold_case(&text).chars().count(), text.chars().count());
    }

    /// Property: snippets stay within the window plus two markers and contain
    /// the match.
    #[test]
    fn prop_snippet_contains_match(
        prefix in "[a-z ]{0,300}",
        suffix in "[a-z ]{0,300}",
        window in 20usize..200,
    ) {
        let text = format!("{prefix}MARBLE{suffix}");
        let offset = prefix.chars().count();
        let snippet = snippet_around(&text, offset, 6, window);

        prop_assert!(snippet.contains("MARBLE"), "{:?}", snippet);
        let markers = snippet.matches(ELLIPSIS).count();
        prop_assert!(snippet.chars().count() <= window + markers);
    }
}
