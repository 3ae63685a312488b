//! Category catalog and name lookup tables

use std::collections::BTreeMap;

use crate::domain::entities::{EmojiRecord, LegacyReactions};
use crate::domain::value_objects::Codepoint;

use super::name_order::pin_thumbs;

/// Category -> ordered short names, for the picker UI.
///
/// Only entries with a color glyph in the primary set are listed. Within a
/// category, entries follow the dataset's `sort_order` (ties by name).
pub fn build_catalog(records: &[EmojiRecord], primary_set: &str) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<&EmojiRecord>> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.has_color_glyph(primary_set) && !r.category.is_empty())
    {
        grouped.entry(record.category.clone()).or_default().push(record);
    }

    grouped
        .into_iter()
        .map(|(category, mut entries)| {
            entries.sort_by(|a, b| {
                a.sort_order
                    .cmp(&b.sort_order)
                    .then_with(|| a.short_name.cmp(&b.short_name))
            });
            let mut names: Vec<String> = entries.into_iter().map(|r| r.short_name.clone()).collect();
            pin_thumbs(&mut names);
            (category, names)
        })
        .collect()
}

/// Codepoint -> display name.
///
/// The legacy reactions name wins when one exists for the codepoint, else the
/// dataset's primary short name is used.
pub fn codepoint_to_name(
    records: &[EmojiRecord],
    legacy: &LegacyReactions,
    primary_set: &str,
) -> BTreeMap<Codepoint, String> {
    let legacy_names = legacy.first_name_by_codepoint();

    records
        .iter()
        .filter(|r| r.has_color_glyph(primary_set))
        .map(|record| {
            let name = legacy_names
                .get(&record.unified)
                .cloned()
                .unwrap_or_else(|| record.short_name.clone());
            (record.unified.clone(), name)
        })
        .collect()
}

/// Flag short name -> unified codepoint, so CSS class lookups for flags use
/// the unified form.
pub fn patched_css_classes(records: &[EmojiRecord]) -> BTreeMap<String, Codepoint> {
    records
        .iter()
        .filter(|r| r.is_flag())
        .flat_map(|record| {
            record
                .short_names
                .iter()
                .map(move |name| (name.clone(), record.unified.clone()))
        })
        .collect()
}
