//! Console Event Sink
//!
//! Human-readable build progress. Per-glyph lines only show up when verbose.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Progress goes to stderr so stdout stays clean for piping
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                stamp,
                cache_dir,
                emoji_count,
            } => {
                self.line(format!("Building {} emoji", emoji_count));
                self.line(format!("  stamp  {}", stamp));
                self.line(format!("  cache  {}", cache_dir.display()));
            }
            BuildEvent::CacheHit { cache_dir } => {
                self.line(format!("✓ Cache is up to date ({})", cache_dir.display()));
            }
            BuildEvent::GlyphTableLoaded { glyph_count } => {
                if self.verbose {
                    self.line(format!("  {} color glyphs in font", glyph_count));
                }
            }
            BuildEvent::GlyphFallback { codepoint } => {
                if self.verbose {
                    self.line(format!("  fallback {}", codepoint));
                }
            }
            BuildEvent::GlyphFailed {
                codepoint,
                names,
                reason,
            } => {
                self.line(format!("✗ Missing {} ({}): {}", names.join(", "), codepoint, reason));
            }
            BuildEvent::LinkFailed { link, error } => {
                self.line(format!("✗ Cannot link {}: {}", link.display(), error));
            }
            BuildEvent::Rasterized {
                color,
                fallback,
                failed,
            } => {
                self.line(format!(
                    "✓ Rasterized {} color, {} fallback, {} failed",
                    color, fallback, failed
                ));
            }
            BuildEvent::Materialized { files } => {
                self.line(format!("✓ Wrote {} files", files));
            }
            BuildEvent::Published { link, target } => {
                self.line(format!("✓ {} -> {}", link.display(), target.display()));
            }
            BuildEvent::Completed { success, cached } => {
                if !success {
                    self.line("✗ Build failed".to_string());
                } else if !cached {
                    self.line("✓ Build complete".to_string());
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
