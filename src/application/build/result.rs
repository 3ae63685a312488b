//! Build Result

use std::path::PathBuf;

use crate::application::materialize::MaterializeReport;
use crate::application::rasterize::RasterizeReport;
use crate::domain::value_objects::CacheStamp;
use crate::infrastructure::repositories::SuccessRecord;

/// Cache key of the current inputs, without building anything
#[derive(Debug, Clone)]
pub struct StampInfo {
    pub stamp: CacheStamp,
    pub dataset_version: String,
    pub cache_dir: PathBuf,
    /// A previous run left a success marker
    pub complete: bool,
    /// Contents of that marker, when readable
    pub success: Option<SuccessRecord>,
}

impl StampInfo {
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Result of a build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub stamp: CacheStamp,
    pub cache_dir: PathBuf,
    /// A previous run's output was reused
    pub cached: bool,
    pub rasterize: Option<RasterizeReport>,
    pub materialize: Option<MaterializeReport>,
    /// Served-assets link now points at `cache_dir`
    pub published: bool,
    /// Non-structural failures (missing glyphs, links)
    pub errors: Vec<String>,
}

impl BuildResult {
    pub fn new(stamp: CacheStamp, cache_dir: PathBuf) -> Self {
        Self {
            stamp,
            cache_dir,
            cached: false,
            rasterize: None,
            materialize: None,
            published: false,
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any glyph failed to rasterize
    pub fn has_glyph_failures(&self) -> bool {
        self.rasterize
            .as_ref()
            .is_some_and(|r| r.failed_count() > 0)
    }
}
