//! Resolved build context
//!
//! Every configured path is joined onto the config file's directory once, up
//! front, so nothing downstream depends on the process working directory.

use std::path::{Path, PathBuf};

use crate::domain::services::sheet_file_name;

use super::types::{BuildConfig, Config};

/// Dataset file inside the dataset package
pub const DATASET_FILE: &str = "emoji.json";

/// Absolute-or-base-relative paths plus build settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub base_dir: PathBuf,
    /// Config file, when one was loaded; tracked by the cache stamp
    pub config_file: Option<PathBuf>,
    pub font: PathBuf,
    pub fallback_font: PathBuf,
    pub emoji_map: PathBuf,
    pub unified_reactions: PathBuf,
    pub manifest: PathBuf,
    pub dataset_dir: PathBuf,
    pub brand_assets: PathBuf,
    pub served_link: PathBuf,
    pub cache_root: PathBuf,
    pub build: BuildConfig,
}

impl BuildContext {
    pub fn resolve(config: &Config, base_dir: &Path, config_file: Option<PathBuf>) -> Self {
        let at = |p: &Path| base_dir.join(p);
        let paths = &config.paths;

        Self {
            base_dir: base_dir.to_path_buf(),
            config_file,
            font: at(&paths.font),
            fallback_font: at(&paths.fallback_font),
            emoji_map: at(&paths.emoji_map),
            unified_reactions: at(&paths.unified_reactions),
            manifest: at(&paths.manifest),
            dataset_dir: at(&paths.dataset_dir),
            brand_assets: at(&paths.brand_assets),
            served_link: at(&paths.served_link),
            cache_root: at(&config.cache.root),
            build: config.build.clone(),
        }
    }

    /// Replace the cache root (e.g. from `--cache-root`)
    pub fn with_cache_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.cache_root = root.into();
        self
    }

    pub fn dataset_file(&self) -> PathBuf {
        self.dataset_dir.join(DATASET_FILE)
    }

    /// Sprite sheet file name for an emoji set
    pub fn sheet_file(&self, emoji_set: &str) -> String {
        sheet_file_name(&self.build.sheet_file, emoji_set)
    }

    /// Sprite sheet shipped by the dataset package
    pub fn sheet_source(&self, emoji_set: &str) -> PathBuf {
        self.dataset_dir.join(self.sheet_file(emoji_set))
    }

    /// Files whose contents key the cache, in hashing order
    pub fn tracked_inputs(&self) -> Vec<PathBuf> {
        let mut inputs = vec![
            self.font.clone(),
            self.fallback_font.clone(),
            self.emoji_map.clone(),
            self.unified_reactions.clone(),
        ];
        inputs.extend(self.config_file.clone());
        inputs
    }
}
