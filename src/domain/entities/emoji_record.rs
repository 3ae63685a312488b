//! Emoji dataset entry

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::domain::value_objects::{Codepoint, SpritePosition};

/// Category whose short names get patched CSS classes
pub const FLAGS_CATEGORY: &str = "Flags";

/// One entry of the third-party emoji dataset.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEmojiRecord")]
pub struct EmojiRecord {
    pub short_name: String,
    /// All short names, primary first
    pub short_names: Vec<String>,
    pub unified: Codepoint,
    pub category: String,
    pub sort_order: u32,
    pub sheet_x: u32,
    pub sheet_y: u32,
    /// Emoji sets that ship an image for this entry
    pub images: BTreeSet<String>,
}

impl EmojiRecord {
    pub fn has_image(&self, emoji_set: &str) -> bool {
        self.images.contains(emoji_set)
    }

    /// Whether the primary set renders this entry in color
    pub fn has_color_glyph(&self, primary_set: &str) -> bool {
        self.has_image(primary_set)
    }

    pub fn is_flag(&self) -> bool {
        self.category == FLAGS_CATEGORY
    }

    pub fn position(&self) -> SpritePosition {
        SpritePosition::from_sheet(self.sheet_x, self.sheet_y)
    }
}

#[derive(Deserialize)]
struct RawEmojiRecord {
    short_name: String,
    #[serde(default)]
    short_names: Vec<String>,
    unified: Codepoint,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sort_order: u32,
    sheet_x: u32,
    sheet_y: u32,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

impl From<RawEmojiRecord> for EmojiRecord {
    fn from(raw: RawEmojiRecord) -> Self {
        let images = raw
            .rest
            .iter()
            .filter(|(_, value)| value.as_bool() == Some(true))
            .filter_map(|(key, _)| key.strip_prefix("has_img_"))
            .map(str::to_string)
            .collect();

        let mut short_names = raw.short_names;
        if !short_names.contains(&raw.short_name) {
            short_names.insert(0, raw.short_name.clone());
        }

        Self {
            short_name: raw.short_name,
            short_names,
            unified: raw.unified,
            category: raw.category.unwrap_or_default(),
            sort_order: raw.sort_order,
            sheet_x: raw.sheet_x,
            sheet_y: raw.sheet_y,
            images,
        }
    }
}
