//! Image rendering
//!
//! - `FontdueRenderer` - monochrome fallback glyphs
//! - `recolor_on_badge` - white keycap glyphs on a circular badge

mod badge;
mod fallback;

pub use badge::{is_white_keycap, recolor_on_badge, WHITE_KEYCAP_GLYPHS};
pub use fallback::{encode_png, FontdueRenderer, AA_SCALE, FALLBACK_FONT_PX, FALLBACK_SIZE};
