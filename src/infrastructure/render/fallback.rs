//! Monochrome fallback renderer
//!
//! Draws the character in black at 8x the target size, then downsamples with
//! a Lanczos filter for anti-aliasing.

use std::io::Cursor;
use std::path::Path;

use fontdue::{Font, FontSettings};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::domain::ports::FallbackRenderer;
use crate::domain::value_objects::Codepoint;
use crate::error::{ForgeError, ForgeResult};

/// Output edge length in pixels
pub const FALLBACK_SIZE: u32 = 68;
/// Supersampling factor
pub const AA_SCALE: u32 = 8;
/// Font size at output scale, in pixels
pub const FALLBACK_FONT_PX: f32 = 65.0;

/// Fallback renderer backed by a monochrome TrueType font
pub struct FontdueRenderer {
    font: Font,
}

impl FontdueRenderer {
    pub fn from_file(path: &Path) -> ForgeResult<Self> {
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ForgeError::MissingInput {
                path: path.to_path_buf(),
            },
            _ => ForgeError::Io(e),
        })?;
        Self::from_bytes(&data).map_err(|message| ForgeError::Font {
            file: path.to_path_buf(),
            message,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(str::to_string)?;
        Ok(Self { font })
    }

    fn render_char(&self, c: char) -> Option<RgbaImage> {
        if self.font.lookup_glyph_index(c) == 0 {
            return None;
        }

        let big = FALLBACK_SIZE * AA_SCALE;
        let px = FALLBACK_FONT_PX * AA_SCALE as f32;
        let (metrics, coverage) = self.font.rasterize(c, px);
        let ascent = self
            .font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px);

        // Text origin at the canvas' top-left corner, baseline at the ascent
        let left = metrics.xmin;
        let top = ascent.round() as i32 - (metrics.height as i32 + metrics.ymin);

        let mut canvas = RgbaImage::new(big, big);
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let alpha = coverage[row * metrics.width + col];
                if alpha == 0 {
                    continue;
                }
                let x = left + col as i32;
                let y = top + row as i32;
                if x < 0 || y < 0 || x >= big as i32 || y >= big as i32 {
                    continue;
                }
                canvas.put_pixel(x as u32, y as u32, Rgba([0, 0, 0, alpha]));
            }
        }

        Some(imageops::resize(
            &canvas,
            FALLBACK_SIZE,
            FALLBACK_SIZE,
            FilterType::Lanczos3,
        ))
    }
}

impl FallbackRenderer for FontdueRenderer {
    fn render(&self, codepoint: &Codepoint) -> ForgeResult<Vec<u8>> {
        let c = codepoint
            .as_char()
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "sequence has no single character"))?;
        let image = self
            .render_char(c)
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "not in fallback font"))?;
        encode_png(&image)
    }
}

/// Encode an RGBA image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> ForgeResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
