//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, ForgeResult};

use super::types::Config;

/// Overrides the cache root regardless of any other setting
pub const CACHE_ROOT_ENV: &str = "EMOJIFORGE_CACHE_ROOT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ForgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ForgeError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => ForgeError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ForgeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path`, or fall back to defaults when it is absent and was not
/// asked for explicitly.
pub fn load_or_default(path: &Path, explicit: bool) -> ForgeResult<(Config, Vec<ConfigWarning>)> {
    if !explicit && !path.exists() {
        log::debug!("{} not found, using built-in defaults", path.display());
        return Ok((Config::default(), Vec::new()));
    }
    load_with_warnings(path)
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply environment variable overrides.
///
/// `EMOJIFORGE_CACHE_ROOT` wins; otherwise, when the configured sandbox
/// variable is set, the cache moves under `$HOME`.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup(CACHE_ROOT_ENV).filter(|v| !v.is_empty()) {
        config.cache.root = PathBuf::from(root);
        return config;
    }

    if lookup(&config.cache.sandbox_env).is_some() {
        let home = lookup("HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        if let Some(home) = home {
            config.cache.root = home.join(&config.cache.sandbox_dir);
        } else {
            log::warn!(
                "{} is set but no home directory is known; keeping {}",
                config.cache.sandbox_env,
                config.cache.root.display()
            );
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "font",
        "fallback_font",
        "emoji_map",
        "unified_reactions",
        "manifest",
        "dataset_dir",
        "brand_assets",
        "served_link",
        "cache",
        "root",
        "sandbox_env",
        "sandbox_dir",
        "build",
        "glyph_source",
        "ttx_command",
        "emoji_sets",
        "primary_set",
        "dataset_package",
        "sheet_file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
