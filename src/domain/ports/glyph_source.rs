//! Glyph source ports
//!
//! A glyph source yields the font's pre-rendered color bitmap for a
//! codepoint; a fallback renderer draws one from a monochrome font when no
//! bitmap exists.

use std::path::Path;

use crate::domain::entities::GlyphTable;
use crate::domain::value_objects::Codepoint;
use crate::error::ForgeResult;

/// Pre-rendered glyph bitmap taken from the color font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Font-internal glyph name
    pub glyph_name: String,
    /// PNG-encoded image
    pub png: Vec<u8>,
}

/// Source of pre-rendered color glyphs
pub trait GlyphSource {
    /// The parsed codepoint -> glyph table
    fn glyph_table(&self) -> &GlyphTable;

    /// Bitmap for a codepoint.
    ///
    /// Fails with `ForgeError::MissingGlyph` when the font has no usable
    /// bitmap; callers fall back to monochrome rendering.
    fn bitmap(&self, codepoint: &Codepoint) -> ForgeResult<GlyphBitmap>;
}

/// Builds a [`GlyphSource`] from a font file.
///
/// `scratch` is a private directory for intermediate dumps. Failures here are
/// structural and abort the run.
pub trait GlyphSourceLoader {
    fn load(&self, font: &Path, scratch: &Path) -> ForgeResult<Box<dyn GlyphSource>>;
}

/// Monochrome renderer used when no color bitmap exists
pub trait FallbackRenderer {
    /// Render a codepoint to a PNG-encoded image
    fn render(&self, codepoint: &Codepoint) -> ForgeResult<Vec<u8>>;
}
