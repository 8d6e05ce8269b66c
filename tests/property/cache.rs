//! Cache upsert invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use vitrine::testing::make_record;
use vitrine::SiteIndexCache;

proptest! {
    /// Property: urls stay unique and keep their first-insertion order, no
    /// matter how often a page is put again.
    #[test]
    fn prop_put_is_upsert(slugs in prop::collection::vec("[a-f]{1,2}", 0..50)) {
        let cache = SiteIndexCache::new();
        for (i, slug) in slugs.iter().enumerate() {
            cache.put(make_record(&format!("{slug}.html"), &format!("v{i}"), "body"));
        }

        let mut seen = HashSet::new();
        let first_order: Vec<String> = slugs
            .iter()
            .map(|slug| format!("{slug}.html"))
            .filter(|url| seen.insert(url.clone()))
            .collect();
        let urls: Vec<String> = cache.get().iter().map(|r| r.url.clone()).collect();
        prop_assert_eq!(urls, first_order);
    }

    /// Property: the stored record is the last one put for its url.
    #[test]
    fn prop_last_put_wins(versions in 1usize..10) {
        let cache = SiteIndexCache::new();
        for v in 0..versions {
            cache.put(make_record("about.html", &format!("About v{v}"), "body"));
        }
        let index = cache.get();
        prop_assert_eq!(index.len(), 1);
        let expected = format!("About v{}", versions - 1);
        prop_assert_eq!(index.records()[0].title.as_str(), expected.as_str());
    }
}
