//! Glyph source reading embedded PNG strikes in-process
//!
//! For hosts without `ttx`: the font's Unicode `cmap` subtables give the
//! glyph table, and CBDT/sbix strikes give the bitmaps.

use std::path::Path;

use ttf_parser::{Face, RasterImageFormat};

use crate::domain::entities::GlyphTable;
use crate::domain::ports::{GlyphBitmap, GlyphSource, GlyphSourceLoader};
use crate::domain::value_objects::Codepoint;
use crate::error::{ForgeError, ForgeResult};

/// Loads [`EmbeddedGlyphSource`] from a font file
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedGlyphLoader;

impl GlyphSourceLoader for EmbeddedGlyphLoader {
    fn load(&self, font: &Path, _scratch: &Path) -> ForgeResult<Box<dyn GlyphSource>> {
        let data = std::fs::read(font)?;
        let source = EmbeddedGlyphSource::from_bytes(data).map_err(|message| ForgeError::Font {
            file: font.to_path_buf(),
            message,
        })?;
        log::info!(
            "read {} glyph mappings from {}",
            source.table.len(),
            font.display()
        );
        Ok(Box::new(source))
    }
}

/// Font bytes plus the glyph table derived from them
pub struct EmbeddedGlyphSource {
    data: Vec<u8>,
    table: GlyphTable,
}

impl EmbeddedGlyphSource {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, String> {
        let face = Face::parse(&data, 0).map_err(|e| e.to_string())?;
        let mut table = GlyphTable::new();

        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                subtable.codepoints(|scalar| {
                    if let Some(id) = subtable.glyph_index(scalar) {
                        let name = face
                            .glyph_name(id)
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("glyph{}", id.0));
                        table.insert(scalar, name);
                    }
                });
            }
        }

        Ok(Self { data, table })
    }
}

impl GlyphSource for EmbeddedGlyphSource {
    fn glyph_table(&self) -> &GlyphTable {
        &self.table
    }

    fn bitmap(&self, codepoint: &Codepoint) -> ForgeResult<GlyphBitmap> {
        let glyph_name = self
            .table
            .glyph_for(codepoint)
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "not in glyph table"))?;

        let face = Face::parse(&self.data, 0)
            .map_err(|e| ForgeError::missing_glyph(codepoint, e.to_string()))?;
        let image = codepoint
            .as_char()
            .and_then(|c| face.glyph_index(c))
            .and_then(|id| face.glyph_raster_image(id, u16::MAX))
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "no embedded bitmap"))?;

        if image.format != RasterImageFormat::PNG {
            return Err(ForgeError::missing_glyph(
                codepoint,
                format!("unsupported bitmap format {:?}", image.format),
            ));
        }

        Ok(GlyphBitmap {
            glyph_name: glyph_name.to_string(),
            png: image.data.to_vec(),
        })
    }
}
