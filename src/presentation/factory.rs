//! Port Factory
//!
//! Creates the infrastructure behind the build use case ports.
//! This is the dependency injection point for the application.

use crate::config::BuildContext;
use crate::domain::ports::{BuildEventSink, GlyphSourceLoader};
use crate::error::ForgeResult;
use crate::infrastructure::{loader_for, ConsoleEventSink, FontdueRenderer, JsonEventSink};

/// Glyph source loader selected by `build.glyph_source`
pub fn create_glyph_loader(ctx: &BuildContext) -> Box<dyn GlyphSourceLoader> {
    loader_for(ctx.build.glyph_source, &ctx.build.ttx_command)
}

/// Fallback renderer backed by the configured fallback font
pub fn create_fallback_renderer(ctx: &BuildContext) -> ForgeResult<FontdueRenderer> {
    FontdueRenderer::from_file(&ctx.fallback_font)
}

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool, verbose: u8) -> Box<dyn BuildEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(verbose > 0))
    }
}
