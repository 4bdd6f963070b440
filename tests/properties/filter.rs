//! Property tests for -I name patterns.

use proptest::prelude::*;

use neotree::PatternFilter;

fn plain_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9_.-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a literal pattern matches exactly its own name.
    #[test]
    fn property_literal_pattern_matches_itself(name in plain_name(), other in plain_name()) {
        let filter = PatternFilter::new([name.clone()]);
        prop_assert!(filter.matches(&name));
        if other != name {
            prop_assert!(!filter.matches(&other));
        }
    }

    /// PROPERTY: `*` matches every name.
    #[test]
    fn property_star_matches_everything(name in plain_name()) {
        prop_assert!(PatternFilter::new(["*"]).matches(&name));
    }

    /// PROPERTY: `*.ext` matches names by suffix.
    #[test]
    fn property_extension_glob(stem in "[a-z]{1,8}", ext in "[a-z]{1,4}") {
        let filter = PatternFilter::new([format!("*.{ext}")]);
        let matching = format!("{stem}.{ext}");
        let other = format!("{stem}.{ext}x");
        prop_assert!(filter.matches(&matching));
        prop_assert!(!filter.matches(&other));
    }

    /// PROPERTY: characters outside `*`, `?` and `[` are always literal.
    #[test]
    fn property_non_wildcard_text_is_literal(name in "[A-Za-z0-9{},\\\\/!#.]{1,16}") {
        let filter = PatternFilter::new([name.clone()]);
        prop_assert!(filter.matches(&name));
    }

    /// PROPERTY: construction never panics on arbitrary pattern text.
    #[test]
    fn property_arbitrary_patterns_never_panic(pattern in "(?s).{0,32}", name in plain_name()) {
        let _ = PatternFilter::new([pattern]).matches(&name);
    }
}
