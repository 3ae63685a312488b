//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Console and NDJSON event sinks
//! - `fs/` - File system implementation (Local)
//! - `repositories/` - JSON inputs and the content-addressed cache
//! - `glyphs/` - Color glyph sources (ttx dump, embedded strikes)
//! - `render/` - Fallback rendering and keycap badges

pub mod events;
pub mod fs;
pub mod glyphs;
pub mod render;
pub mod repositories;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use glyphs::{loader_for, EmbeddedGlyphLoader, TtxGlyphLoader};
pub use render::FontdueRenderer;
pub use repositories::{CacheStore, DatasetRepository};
