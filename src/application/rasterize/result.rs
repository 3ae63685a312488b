//! Rasterize Result
//!
//! Per-glyph outcomes replace exception-style control flow, so the overall
//! success flag is a plain fold over them.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::Codepoint;

/// How one codepoint's image was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphOutcome {
    /// Taken from the color font
    ColorGlyphFound {
        glyph_name: String,
        /// Drawn onto the keycap badge first
        recolored: bool,
    },
    /// Drawn with the monochrome fallback font
    FallbackRendered,
    /// No image could be produced
    Failed { reason: String },
}

impl GlyphOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, GlyphOutcome::Failed { .. })
    }
}

/// A codepoint that produced no image, with the names that wanted it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFailure {
    pub codepoint: Codepoint,
    pub names: Vec<String>,
    pub reason: String,
}

/// A name symlink that could not be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    pub link: PathBuf,
    pub error: String,
}

/// Result of rasterizing the whole name map
#[derive(Debug, Clone, Default)]
pub struct RasterizeReport {
    pub outcomes: BTreeMap<Codepoint, GlyphOutcome>,
    pub failures: Vec<GlyphFailure>,
    pub link_failures: Vec<LinkFailure>,
    /// Name symlinks created
    pub links: usize,
}

impl RasterizeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| matches!(o, GlyphOutcome::ColorGlyphFound { .. }))
            .count()
    }

    pub fn fallback_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| matches!(o, GlyphOutcome::FallbackRendered))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Every glyph produced an image and every name link exists
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.link_failures.is_empty()
    }
}
