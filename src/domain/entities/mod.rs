//! Domain Entities
//!
//! Inputs and outputs of a build, free of I/O.

mod artifact_set;
mod emoji_map;
mod emoji_record;
mod glyph_table;

pub use artifact_set::{
    sprite_css_file, GeneratedArtifactSet, TextArtifact, CODEPOINT_TO_NAME_FILE,
    CODES_MODULE_FILE, NAME_TO_CODEPOINT_FILE,
};
pub use emoji_map::{EmojiMap, LegacyReactions};
pub use emoji_record::{EmojiRecord, FLAGS_CATEGORY};
pub use glyph_table::GlyphTable;
