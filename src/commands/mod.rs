//! Command handlers

pub mod build;
pub mod stamp;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use emojiforge::config::{load_or_default, BuildContext, DEFAULT_CONFIG_FILE};

use crate::ui::output::print_config_warnings;

/// Exit code of a build that ran but did not succeed
pub const EXIT_BUILD_FAILED: u8 = 1;

/// Load the config, apply environment and flag overrides, and resolve every
/// path against the config file's directory.
pub fn load_context(
    config: Option<&Path>,
    cache_root: Option<&Path>,
    json: bool,
) -> Result<BuildContext> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let explicit = config.is_some();
    let config_path = cwd.join(config.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)));

    let (config, warnings) = load_or_default(&config_path, explicit)?;
    print_config_warnings(&warnings, json);
    let config = config.with_env_overrides();

    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.clone());
    let loaded = config_path.exists().then(|| config_path.clone());

    let mut ctx = BuildContext::resolve(&config, &base_dir, loaded);
    if let Some(root) = cache_root {
        ctx = ctx.with_cache_root(absolute(&cwd, root));
    }
    log::debug!("base directory {}", ctx.base_dir.display());
    log::debug!("cache root {}", ctx.cache_root.display());
    Ok(ctx)
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
