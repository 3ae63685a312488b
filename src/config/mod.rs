//! Configuration module for emojiforge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`EMOJIFORGE_CACHE_ROOT`, sandbox variable)
//! 3. Config file (`emojiforge.toml`)
//! 4. Built-in defaults (lowest priority)

mod context;
mod loader;
mod types;

pub use context::{BuildContext, DATASET_FILE};
pub use loader::{load_or_default, ConfigWarning, CACHE_ROOT_ENV};
pub use types::{BuildConfig, CacheConfig, Config, GlyphSourceKind, PathsConfig};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "emojiforge.toml";
