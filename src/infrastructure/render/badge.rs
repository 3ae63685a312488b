//! Two-tone circular badge for white keycap glyphs
//!
//! Some fonts ship the ASCII digit and `#` keycaps as white shapes on a
//! transparent background, which disappear on a light picker. They get drawn
//! on top of a grey ring around a darker disc instead.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::fallback::encode_png;
use crate::error::ForgeResult;

/// Glyph names drawn white-on-transparent by the color font
pub const WHITE_KEYCAP_GLYPHS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "hash",
];

const RING_COLOR: Rgba<u8> = Rgba([0x9e, 0x9e, 0x9e, 0xff]);
const DISC_COLOR: Rgba<u8> = Rgba([0x5f, 0x63, 0x68, 0xff]);
const DISC_RATIO: f32 = 0.86;
const GLYPH_RATIO: f32 = 0.6;

/// True if `glyph_name` is one of the white keycap glyphs
pub fn is_white_keycap(glyph_name: &str) -> bool {
    WHITE_KEYCAP_GLYPHS.contains(&glyph_name)
}

/// Draw a PNG-encoded glyph centered on the badge and re-encode it
pub fn recolor_on_badge(png: &[u8]) -> ForgeResult<Vec<u8>> {
    let glyph = image::load_from_memory(png)?;
    let size = glyph.width().max(glyph.height()).max(1);

    let mut canvas = badge(size);

    let inner = ((size as f32 * GLYPH_RATIO).round() as u32).max(1);
    let scaled = glyph.resize(inner, inner, FilterType::Lanczos3).to_rgba8();
    let x = (size - scaled.width()) / 2;
    let y = (size - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);

    encode_png(&canvas)
}

fn badge(size: u32) -> RgbaImage {
    let center = size as f32 / 2.0;
    let outer = center;
    let inner = center * DISC_RATIO;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= inner {
            DISC_COLOR
        } else if distance <= outer {
            RING_COLOR
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
