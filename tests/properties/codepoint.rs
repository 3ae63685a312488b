//! Property tests for codepoint parsing.

use proptest::prelude::*;

use emojiforge::Codepoint;

fn scalar() -> impl Strategy<Value = u32> {
    prop_oneof![0x20u32..0xd800, 0xe000u32..0x11_0000]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any `-`-joined sequence of scalar values parses, lowercased,
    /// and yields the same scalars back.
    #[test]
    fn property_valid_sequences_parse(
        scalars in proptest::collection::vec(scalar(), 1..=5),
        upper in any::<bool>(),
    ) {
        let raw: Vec<String> = scalars
            .iter()
            .map(|s| if upper { format!("{:X}", s) } else { format!("{:x}", s) })
            .collect();
        let raw = raw.join("-");

        let parsed = Codepoint::parse(&raw).unwrap();

        prop_assert_eq!(parsed.as_str(), raw.to_ascii_lowercase());
        prop_assert_eq!(parsed.scalars(), scalars.clone());
        prop_assert_eq!(parsed.is_sequence(), scalars.len() > 1);
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(raw in ".{0,24}") {
        let _ = Codepoint::parse(&raw);
    }

    /// PROPERTY: Surrogates are never valid codepoints.
    #[test]
    fn property_surrogates_rejected(s in 0xd800u32..0xe000) {
        let hex = format!("{:x}", s);
        prop_assert!(Codepoint::parse(&hex).is_err());
    }
}
