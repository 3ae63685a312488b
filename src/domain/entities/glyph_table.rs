//! Codepoint to glyph-file map
//!
//! Built once from the font's `cmap_format_12` table and read-only afterwards.

use std::collections::BTreeMap;

use crate::domain::value_objects::Codepoint;

/// Map from scalar value to the font-internal glyph name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    entries: BTreeMap<u32, String>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scalar: u32, glyph_name: impl Into<String>) {
        self.entries.insert(scalar, glyph_name.into());
    }

    /// Glyph name for a codepoint.
    ///
    /// Only single scalars are mapped; ligature sequences are not in `cmap`.
    pub fn glyph_for(&self, codepoint: &Codepoint) -> Option<&str> {
        if codepoint.is_sequence() {
            return None;
        }
        self.entries
            .get(&codepoint.first_scalar())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, String)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
