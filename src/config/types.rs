//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ForgeResult;

use super::loader::{self, ConfigWarning};

/// Input and output locations, relative to the config file's directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Color emoji font
    pub font: PathBuf,
    /// Monochrome font for codepoints without a color glyph
    pub fallback_font: PathBuf,
    /// JSON map of emoji name -> codepoint
    pub emoji_map: PathBuf,
    /// Legacy JSON map of reaction name -> codepoint
    pub unified_reactions: PathBuf,
    /// Dependency manifest pinning the dataset version
    pub manifest: PathBuf,
    /// Installed dataset package (holds `emoji.json` and the sprite sheets)
    pub dataset_dir: PathBuf,
    /// Directory holding the brand assets
    pub brand_assets: PathBuf,
    /// Served-assets symlink re-pointed at the cache directory
    pub served_link: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from("fonts/NotoColorEmoji.ttf"),
            fallback_font: PathBuf::from("fonts/DejaVuSans.ttf"),
            emoji_map: PathBuf::from("emoji_map.json"),
            unified_reactions: PathBuf::from("unified_reactions.json"),
            manifest: PathBuf::from("package.json"),
            dataset_dir: PathBuf::from("node_modules/emoji-datasource"),
            brand_assets: PathBuf::from("static/assets/brand-emoji"),
            served_link: PathBuf::from("static/generated/emoji"),
        }
    }
}

/// Content-addressed cache location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding one subdirectory per cache stamp
    pub root: PathBuf,
    /// Variable that marks a sandboxed CI host
    pub sandbox_env: String,
    /// Cache directory under `$HOME` used on sandboxed hosts
    pub sandbox_dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/srv/emoji-cache"),
            sandbox_env: "TRAVIS".to_string(),
            sandbox_dir: "emoji-cache".to_string(),
        }
    }
}

/// How the color glyph table and bitmaps are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSourceKind {
    /// Dump the font with the external `ttx` tool
    #[default]
    Ttx,
    /// Parse embedded PNG strikes in-process
    Embedded,
}

/// Build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub glyph_source: GlyphSourceKind,
    pub ttx_command: String,
    /// Emoji sets that get a sprite sheet and a CSS file
    pub emoji_sets: Vec<String>,
    /// Set whose image flags decide color glyph availability
    pub primary_set: String,
    /// Package whose version is folded into the cache stamp
    pub dataset_package: String,
    /// Sprite sheet file name; `{set}` is replaced by the set name
    pub sheet_file: String,
    /// Files copied from `paths.brand_assets` into `images/static/`
    pub brand_assets: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            glyph_source: GlyphSourceKind::default(),
            ttx_command: "ttx".to_string(),
            emoji_sets: ["google", "apple", "twitter", "emojione"]
                .into_iter()
                .map(String::from)
                .collect(),
            primary_set: "google".to_string(),
            dataset_package: "emoji-datasource".to_string(),
            sheet_file: "sheet_{set}_64.png".to_string(),
            brand_assets: vec!["brand.png".to_string()],
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ForgeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ForgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply environment variable overrides from `lookup`
    pub fn with_env_overrides_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        loader::with_env_overrides_from(self, lookup)
    }
}
