//! emojiforge - emoji asset builder
//!
//! Turns a color emoji font, an emoji dataset and a handful of mapping files
//! into the assets a chat web client serves: per-codepoint PNGs with name
//! symlinks, sprite stylesheets per emoji set and JS/JSON lookup tables.
//! Output lives in a content-addressed cache directory and is published by
//! re-pointing one symlink.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, StampInfo};
pub use config::{BuildContext, Config};
pub use domain::value_objects::{CacheStamp, Codepoint};
pub use error::{ForgeError, ForgeResult};
