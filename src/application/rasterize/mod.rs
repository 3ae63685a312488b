//! Rasterize Module
//!
//! Produces one PNG per unique codepoint of the emoji name map, plus one
//! name symlink per emoji name.
//!
//! ## Structure
//!
//! - `result` - Per-glyph outcomes and the aggregated report
//! - `use_case` - The `Rasterizer`

mod result;
mod use_case;

pub use result::{GlyphFailure, GlyphOutcome, LinkFailure, RasterizeReport};
pub use use_case::{Rasterizer, UNICODE_DIR};
