//! Property tests for picker name ordering.

use proptest::prelude::*;

use emojiforge::domain::services::{picker_order, THUMBS_DOWN, THUMBS_UP};

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z_+\\-0-9]{1,12}",
        1 => Just(THUMBS_UP.to_string()),
        1 => Just(THUMBS_DOWN.to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: When both thumbs names are present, down directly follows up.
    #[test]
    fn property_thumbs_pair_is_adjacent(names in proptest::collection::vec(name(), 0..40)) {
        let ordered = picker_order(names.clone());

        let up = ordered.iter().position(|n| n == THUMBS_UP);
        let down = ordered.iter().position(|n| n == THUMBS_DOWN);
        if let (Some(up), Some(down)) = (up, down) {
            prop_assert_eq!(down, up + 1);
        }
    }

    /// PROPERTY: Apart from the thumbs pair, names are sorted and unique.
    #[test]
    fn property_other_names_sorted(names in proptest::collection::vec(name(), 0..40)) {
        let ordered = picker_order(names.clone());

        let rest: Vec<&String> = ordered
            .iter()
            .filter(|n| n.as_str() != THUMBS_DOWN)
            .collect();
        prop_assert!(rest.windows(2).all(|w| w[0] < w[1]));

        let mut expected = names;
        expected.sort();
        expected.dedup();
        let mut actual = ordered;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
