//! Test doubles shared by the use case tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, Mutex};

use image::{Rgba, RgbaImage};

use crate::domain::entities::GlyphTable;
use crate::domain::ports::{
    BuildEvent, BuildEventSink, FallbackRenderer, GlyphBitmap, GlyphSource, GlyphSourceLoader,
};
use crate::domain::value_objects::Codepoint;
use crate::error::{ForgeError, ForgeResult};
use crate::infrastructure::render::encode_png;

pub fn cp(s: &str) -> Codepoint {
    Codepoint::parse(s).unwrap()
}

pub fn solid_png(color: [u8; 4]) -> Vec<u8> {
    encode_png(&RgbaImage::from_pixel(16, 16, Rgba(color))).unwrap()
}

/// Glyph source with in-memory bitmaps
#[derive(Clone, Default)]
pub struct FakeGlyphSource {
    table: GlyphTable,
    bitmaps: BTreeMap<String, Vec<u8>>,
}

impl FakeGlyphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `scalar` to `glyph_name` and give it a bitmap
    pub fn with_glyph(mut self, scalar: u32, glyph_name: &str, png: Vec<u8>) -> Self {
        self.table.insert(scalar, glyph_name);
        self.bitmaps.insert(glyph_name.to_string(), png);
        self
    }
}

impl GlyphSource for FakeGlyphSource {
    fn glyph_table(&self) -> &GlyphTable {
        &self.table
    }

    fn bitmap(&self, codepoint: &Codepoint) -> ForgeResult<GlyphBitmap> {
        let glyph_name = self
            .table
            .glyph_for(codepoint)
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "not in glyph table"))?;
        let png = self
            .bitmaps
            .get(glyph_name)
            .cloned()
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "no bitmap"))?;
        Ok(GlyphBitmap {
            glyph_name: glyph_name.to_string(),
            png,
        })
    }
}

/// Loader handing out a fixed source and counting calls
#[derive(Clone, Default)]
pub struct FakeLoader {
    pub source: FakeGlyphSource,
    pub loads: Arc<Mutex<usize>>,
}

impl FakeLoader {
    pub fn new(source: FakeGlyphSource) -> Self {
        Self {
            source,
            loads: Arc::default(),
        }
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl GlyphSourceLoader for FakeLoader {
    fn load(&self, _font: &Path, _scratch: &Path) -> ForgeResult<Box<dyn GlyphSource>> {
        *self.loads.lock().unwrap() += 1;
        Ok(Box::new(self.source.clone()))
    }
}

/// Fallback renderer that knows a fixed set of codepoints
#[derive(Clone, Default)]
pub struct FakeFallback {
    known: BTreeSet<Codepoint>,
}

impl FakeFallback {
    pub fn knowing(codepoints: &[&str]) -> Self {
        Self {
            known: codepoints.iter().map(|s| cp(s)).collect(),
        }
    }
}

impl FallbackRenderer for FakeFallback {
    fn render(&self, codepoint: &Codepoint) -> ForgeResult<Vec<u8>> {
        if self.known.contains(codepoint) {
            Ok(solid_png([0, 0, 0, 255]))
        } else {
            Err(ForgeError::missing_glyph(codepoint, "not in fallback font"))
        }
    }
}

/// Event sink that records every event
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Arc<Mutex<Vec<BuildEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<BuildEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BuildEventSink for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}
