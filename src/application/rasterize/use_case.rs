//! Rasterize Use Case
//!
//! For each unique codepoint:
//! 1. Take the color bitmap from the glyph source (keycaps go on a badge)
//! 2. Otherwise draw it with the fallback renderer
//! 3. Write `unicode/<codepoint>.png` and link every name to it
//!
//! A failed glyph is recorded and the loop moves on; only I/O errors on the
//! output tree abort.

use std::path::{Path, PathBuf};

use crate::domain::entities::EmojiMap;
use crate::domain::ports::{BuildEvent, BuildEventSink, FallbackRenderer, FileSystem, GlyphSource};
use crate::domain::value_objects::Codepoint;
use crate::error::ForgeResult;
use crate::infrastructure::render::{is_white_keycap, recolor_on_badge};

use super::result::{GlyphFailure, GlyphOutcome, LinkFailure, RasterizeReport};

/// Per-codepoint images, relative to the output directory
pub const UNICODE_DIR: &str = "unicode";

/// Rasterizes the emoji name map into an output directory
pub struct Rasterizer<'a, FS: FileSystem> {
    fs: &'a FS,
    source: &'a dyn GlyphSource,
    fallback: &'a dyn FallbackRenderer,
    events: &'a dyn BuildEventSink,
}

impl<'a, FS: FileSystem> Rasterizer<'a, FS> {
    pub fn new(
        fs: &'a FS,
        source: &'a dyn GlyphSource,
        fallback: &'a dyn FallbackRenderer,
        events: &'a dyn BuildEventSink,
    ) -> Self {
        Self {
            fs,
            source,
            fallback,
            events,
        }
    }

    /// Rasterize every codepoint of `emoji_map` into `out_dir`
    pub fn run(&self, emoji_map: &EmojiMap, out_dir: &Path) -> ForgeResult<RasterizeReport> {
        let unicode_dir = out_dir.join(UNICODE_DIR);
        self.fs.create_dir_all(&unicode_dir)?;

        let mut report = RasterizeReport::new();
        for (codepoint, names) in emoji_map.names_by_codepoint() {
            let (outcome, png) = self.produce(&codepoint);

            match png {
                Some(png) => {
                    let file_name = format!("{}.png", codepoint);
                    self.fs.write(&unicode_dir.join(&file_name), &png)?;
                    if outcome == GlyphOutcome::FallbackRendered
                        && self.events.wants_detailed_events()
                    {
                        self.events.on_event(BuildEvent::GlyphFallback {
                            codepoint: codepoint.to_string(),
                        });
                    }
                    self.link_names(out_dir, &file_name, &names, &mut report);
                }
                None => {
                    let reason = match &outcome {
                        GlyphOutcome::Failed { reason } => reason.clone(),
                        _ => "no image produced".to_string(),
                    };
                    log::warn!("Missing {} ({}): {}", names.join(", "), codepoint, reason);
                    self.events.on_event(BuildEvent::GlyphFailed {
                        codepoint: codepoint.to_string(),
                        names: names.clone(),
                        reason: reason.clone(),
                    });
                    report.failures.push(GlyphFailure {
                        codepoint: codepoint.clone(),
                        names,
                        reason,
                    });
                }
            }

            report.outcomes.insert(codepoint, outcome);
        }

        self.events.on_event(BuildEvent::Rasterized {
            color: report.color_count(),
            fallback: report.fallback_count(),
            failed: report.failed_count(),
        });
        log::info!(
            "rasterized {} color, {} fallback, {} failed",
            report.color_count(),
            report.fallback_count(),
            report.failed_count()
        );

        Ok(report)
    }

    /// Produce the PNG for one codepoint
    pub fn produce(&self, codepoint: &Codepoint) -> (GlyphOutcome, Option<Vec<u8>>) {
        let color_error = match self.source.bitmap(codepoint) {
            Ok(bitmap) => {
                if !is_white_keycap(&bitmap.glyph_name) {
                    let outcome = GlyphOutcome::ColorGlyphFound {
                        glyph_name: bitmap.glyph_name,
                        recolored: false,
                    };
                    return (outcome, Some(bitmap.png));
                }
                match recolor_on_badge(&bitmap.png) {
                    Ok(png) => {
                        let outcome = GlyphOutcome::ColorGlyphFound {
                            glyph_name: bitmap.glyph_name,
                            recolored: true,
                        };
                        return (outcome, Some(png));
                    }
                    Err(e) => e.to_string(),
                }
            }
            Err(e) => e.to_string(),
        };
        log::debug!("{}: no color glyph ({})", codepoint, color_error);

        match self.fallback.render(codepoint) {
            Ok(png) => (GlyphOutcome::FallbackRendered, Some(png)),
            Err(e) => (
                GlyphOutcome::Failed {
                    reason: e.to_string(),
                },
                None,
            ),
        }
    }

    fn link_names(
        &self,
        out_dir: &Path,
        file_name: &str,
        names: &[String],
        report: &mut RasterizeReport,
    ) {
        let target = PathBuf::from(UNICODE_DIR).join(file_name);
        for name in names {
            let link = out_dir.join(format!("{}.png", name));
            match self.fs.symlink(&target, &link) {
                Ok(()) => report.links += 1,
                Err(e) => {
                    log::warn!("cannot link {}: {}", link.display(), e);
                    self.events.on_event(BuildEvent::LinkFailed {
                        link: link.clone(),
                        error: e.to_string(),
                    });
                    report.link_failures.push(LinkFailure {
                        link,
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}
