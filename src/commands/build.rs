//! Build command handler

use std::path::Path;

use anyhow::Result;

use emojiforge::application::{BuildOptions, BuildUseCase};
use emojiforge::infrastructure::LocalFs;
use emojiforge::presentation::{create_event_sink, create_fallback_renderer, create_glyph_loader};

use super::EXIT_BUILD_FAILED;

/// Run one build. Returns the process exit code for a build that ran.
pub fn cmd_build(
    config: Option<&Path>,
    cache_root: Option<&Path>,
    force: bool,
    json: bool,
    verbose: u8,
) -> Result<u8> {
    let ctx = super::load_context(config, cache_root, json)?;
    let fs = LocalFs::new();
    let loader = create_glyph_loader(&ctx);
    let fallback = create_fallback_renderer(&ctx)?;
    let events = create_event_sink(json, verbose);

    let options = BuildOptions::new().with_force(force);
    let result = BuildUseCase::new(&fs, loader.as_ref(), &fallback).execute_with_events(
        &ctx,
        &options,
        events.as_ref(),
    )?;

    if result.is_success() {
        return Ok(0);
    }

    // stderr in both modes; the JSON stream on stdout stays parseable
    if result.has_glyph_failures() {
        eprintln!("Errors dumping emoji!");
    }
    if !json {
        for error in &result.errors {
            log::error!("{}", error);
        }
    }
    Ok(EXIT_BUILD_FAILED)
}
