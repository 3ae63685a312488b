//! Catalog and position generation
//!
//! Turns the loaded inputs into every text artifact of a build. Pure: nothing
//! here touches the disk.

use crate::domain::entities::{
    sprite_css_file, EmojiMap, EmojiRecord, GeneratedArtifactSet, LegacyReactions, TextArtifact,
    CODEPOINT_TO_NAME_FILE, CODES_MODULE_FILE, NAME_TO_CODEPOINT_FILE,
};
use crate::domain::services::{
    build_catalog, codepoint_to_name, patched_css_classes, picker_order, render_codes_module,
    render_json_map, render_sprite_css, sheet_file_name, AliasTable, EmojiCodes,
};
use crate::error::ForgeResult;

/// Loaded inputs of the generator
#[derive(Debug, Clone, Copy)]
pub struct GenerateInputs<'a> {
    pub emoji_map: &'a EmojiMap,
    pub records: &'a [EmojiRecord],
    pub legacy: &'a LegacyReactions,
    pub emoji_sets: &'a [String],
    pub primary_set: &'a str,
    /// Sprite sheet file pattern with a `{set}` placeholder
    pub sheet_file: &'a str,
}

/// Assemble the exported lookup tables
pub fn emoji_codes(inputs: &GenerateInputs<'_>) -> EmojiCodes {
    EmojiCodes {
        names: picker_order(inputs.emoji_map.names()),
        codepoints: inputs.emoji_map.codepoints(),
        name_to_codepoint: inputs.emoji_map.as_map().clone(),
        codepoint_to_name: codepoint_to_name(inputs.records, inputs.legacy, inputs.primary_set),
        emoji_catalog: build_catalog(inputs.records, inputs.primary_set),
        patched_css_classes: patched_css_classes(inputs.records),
    }
}

/// Render every stylesheet and lookup table
pub fn generate_artifacts(inputs: &GenerateInputs<'_>) -> ForgeResult<GeneratedArtifactSet> {
    let aliases = AliasTable::resolve(inputs.records, inputs.legacy);
    if !aliases.is_empty() {
        log::info!("{} legacy codepoints aliased", aliases.len());
    }

    let sprite_css = inputs
        .emoji_sets
        .iter()
        .map(|set| {
            let sheet = sheet_file_name(inputs.sheet_file, set);
            TextArtifact::new(
                sprite_css_file(set),
                render_sprite_css(set, &sheet, inputs.records, &aliases),
            )
        })
        .collect();

    let codes = emoji_codes(inputs);
    let lookup_tables = vec![
        TextArtifact::new(
            CODES_MODULE_FILE,
            render_codes_module(&codes, CODES_MODULE_FILE)?,
        ),
        TextArtifact::new(
            NAME_TO_CODEPOINT_FILE,
            render_json_map(&codes.name_to_codepoint, NAME_TO_CODEPOINT_FILE)?,
        ),
        TextArtifact::new(
            CODEPOINT_TO_NAME_FILE,
            render_json_map(&codes.codepoint_to_name, CODEPOINT_TO_NAME_FILE)?,
        ),
    ];

    Ok(GeneratedArtifactSet {
        sprite_css,
        lookup_tables,
    })
}
