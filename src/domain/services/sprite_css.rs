//! Sprite sheet stylesheet rendering

use std::collections::BTreeSet;

use crate::domain::entities::EmojiRecord;
use crate::domain::value_objects::{Codepoint, SpritePosition, SHEET_BACKGROUND_SIZE};

use super::aliases::AliasTable;

/// Sprite sheet file name for an emoji set, from a `{set}` pattern
pub fn sheet_file_name(pattern: &str, emoji_set: &str) -> String {
    pattern.replace("{set}", emoji_set)
}

/// One `background-position` rule
pub fn position_rule(codepoint: &Codepoint, position: SpritePosition) -> String {
    format!(
        ".emoji-{} {{\n    background-position: {};\n}}\n",
        codepoint,
        position.css_value()
    )
}

/// Render the stylesheet for one emoji set.
///
/// Every entry with an image in `emoji_set` gets a rule for its unified
/// codepoint and one more per alias.
pub fn render_sprite_css(
    emoji_set: &str,
    sheet_file: &str,
    records: &[EmojiRecord],
    aliases: &AliasTable,
) -> String {
    let mut css = format!(
        "div.emoji,
span.emoji
{{
    display: inline-block;
    background-image: url('{sheet}');
    -webkit-background-size: {size}%;
    -moz-background-size: {size}%;
    background-size: {size}%;
    background-repeat: no-repeat;

    /* Hide the text. */
    text-indent: 100%;
    white-space: nowrap;
    overflow: hidden;
}}
",
        sheet = sheet_file,
        size = SHEET_BACKGROUND_SIZE,
    );

    let mut emitted: BTreeSet<&Codepoint> = BTreeSet::new();
    for record in records.iter().filter(|r| r.has_image(emoji_set)) {
        let position = record.position();
        for codepoint in std::iter::once(&record.unified).chain(aliases.aliases_of(&record.unified)) {
            if emitted.insert(codepoint) {
                css.push('\n');
                css.push_str(&position_rule(codepoint, position));
            }
        }
    }

    css
}
