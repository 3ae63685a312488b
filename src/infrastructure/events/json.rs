//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                stamp,
                cache_dir,
                emoji_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "stamp": stamp,
                    "cache_dir": cache_dir.display().to_string(),
                    "emoji_count": emoji_count,
                })
            }

            BuildEvent::CacheHit { cache_dir } => {
                serde_json::json!({
                    "event": "cache_hit",
                    "command": "build",
                    "cache_dir": cache_dir.display().to_string(),
                })
            }

            BuildEvent::GlyphTableLoaded { glyph_count } => {
                serde_json::json!({
                    "event": "glyph_table",
                    "command": "build",
                    "glyph_count": glyph_count,
                })
            }

            BuildEvent::GlyphFallback { codepoint } => {
                serde_json::json!({
                    "event": "glyph_fallback",
                    "command": "build",
                    "codepoint": codepoint,
                })
            }

            BuildEvent::GlyphFailed {
                codepoint,
                names,
                reason,
            } => {
                serde_json::json!({
                    "event": "glyph_failed",
                    "command": "build",
                    "codepoint": codepoint,
                    "names": names,
                    "reason": reason,
                })
            }

            BuildEvent::LinkFailed { link, error } => {
                serde_json::json!({
                    "event": "link_failed",
                    "command": "build",
                    "link": link.display().to_string(),
                    "error": error,
                })
            }

            BuildEvent::Rasterized {
                color,
                fallback,
                failed,
            } => {
                serde_json::json!({
                    "event": "rasterized",
                    "command": "build",
                    "color": color,
                    "fallback": fallback,
                    "failed": failed,
                })
            }

            BuildEvent::Materialized { files } => {
                serde_json::json!({
                    "event": "materialized",
                    "command": "build",
                    "files": files,
                })
            }

            BuildEvent::Published { link, target } => {
                serde_json::json!({
                    "event": "published",
                    "command": "build",
                    "link": link.display().to_string(),
                    "target": target.display().to_string(),
                })
            }

            BuildEvent::Completed { success, cached } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "success": success,
                    "cached": cached,
                })
            }
        };

        self.write_event(json);
    }
}
