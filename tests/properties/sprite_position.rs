//! Property tests for sprite sheet positions.

use proptest::prelude::*;

use emojiforge::domain::value_objects::{percent, SpritePosition, SHEET_GRID_DIVISOR};

proptest! {
    /// PROPERTY: Offsets are `coordinate * 100 / 48` and grow with the coordinate.
    #[test]
    fn property_percent_is_linear(coordinate in 0u32..64) {
        let p = percent(coordinate);

        prop_assert!((p * f64::from(SHEET_GRID_DIVISOR) - f64::from(coordinate) * 100.0).abs() < 1e-9);
        prop_assert!(percent(coordinate + 1) > p);
    }

    /// PROPERTY: The CSS value is "<x>% <y>%" in that order.
    #[test]
    fn property_css_value_shape(x in 0u32..49, y in 0u32..49) {
        let position = SpritePosition::from_sheet(x, y);
        let css = position.css_value();

        let parts: Vec<&str> = css.split(' ').collect();
        prop_assert_eq!(parts.len(), 2);
        prop_assert_eq!(parts[0].trim_end_matches('%').parse::<f64>().unwrap(), percent(x));
        prop_assert_eq!(parts[1].trim_end_matches('%').parse::<f64>().unwrap(), percent(y));
    }
}
