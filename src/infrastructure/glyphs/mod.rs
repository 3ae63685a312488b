//! Glyph Source Implementations
//!
//! - `TtxGlyphLoader` - external `ttx` dump (XML glyph table + PNG files)
//! - `EmbeddedGlyphLoader` - in-process parsing of embedded PNG strikes

mod embedded;
mod ttx;

pub use embedded::{EmbeddedGlyphLoader, EmbeddedGlyphSource};
pub use ttx::{parse_cmap_format_12, TtxGlyphLoader, TtxGlyphSource};

use crate::config::GlyphSourceKind;
use crate::domain::ports::GlyphSourceLoader;

/// Loader for the configured glyph source
pub fn loader_for(kind: GlyphSourceKind, ttx_command: &str) -> Box<dyn GlyphSourceLoader> {
    match kind {
        GlyphSourceKind::Ttx => Box::new(TtxGlyphLoader::new(ttx_command)),
        GlyphSourceKind::Embedded => Box::new(EmbeddedGlyphLoader),
    }
}
