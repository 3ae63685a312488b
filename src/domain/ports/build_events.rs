//! Build Event Port
//!
//! Provides an observable interface for build operations.
//! Enables console progress, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Build started
    Started {
        stamp: String,
        cache_dir: PathBuf,
        emoji_count: usize,
    },

    /// A successful previous run already populated the cache directory
    CacheHit { cache_dir: PathBuf },

    /// Glyph table parsed from the font
    GlyphTableLoaded { glyph_count: usize },

    /// One codepoint used the fallback renderer
    GlyphFallback { codepoint: String },

    /// One codepoint could not be rasterized at all
    GlyphFailed {
        codepoint: String,
        names: Vec<String>,
        reason: String,
    },

    /// A name symlink or brand asset link could not be created
    LinkFailed { link: PathBuf, error: String },

    /// Rasterization finished
    Rasterized {
        color: usize,
        fallback: usize,
        failed: usize,
    },

    /// Artifacts written into the cache directory
    Materialized { files: usize },

    /// Served-assets symlink now points at the cache directory
    Published { link: PathBuf, target: PathBuf },

    /// Build completed
    Completed { success: bool, cached: bool },
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink: human output in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-glyph events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
