//! Error types for emojiforge
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for emojiforge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Main error type for emojiforge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// A tracked input file is missing
    #[error("input file not found: {path}")]
    MissingInput { path: PathBuf },

    /// JSON input could not be parsed
    #[error("invalid JSON in {file}: {source}")]
    Json {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The dependency manifest does not pin the dataset package
    #[error("package '{package}' has no version in {file}")]
    ManifestVersion { package: String, file: PathBuf },

    /// A codepoint string is not a valid `-`-joined hex sequence
    #[error("invalid codepoint '{value}'")]
    InvalidCodepoint { value: String },

    /// Neither a color glyph nor a fallback rendering exists
    #[error("missing glyph for codepoint {codepoint}: {reason}")]
    MissingGlyph { codepoint: String, reason: String },

    /// External font-introspection tool failed
    #[error("command '{command}' failed: {message}")]
    Subprocess { command: String, message: String },

    /// Glyph table dump could not be parsed
    #[error("malformed glyph table in {file}: {message}")]
    GlyphTable { file: PathBuf, message: String },

    /// Font file could not be parsed
    #[error("unable to load font {file}: {message}")]
    Font { file: PathBuf, message: String },

    /// Symlink could not be created
    #[error("cannot link {link} -> {target}: {source}")]
    Symlink {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system port error
    #[error(transparent)]
    Fs(#[from] crate::domain::ports::FsError),

    /// Image decode/encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    /// Build a `MissingGlyph` error for a codepoint
    pub fn missing_glyph(codepoint: impl ToString, reason: impl Into<String>) -> Self {
        Self::MissingGlyph {
            codepoint: codepoint.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_missing_input() {
        let err = ForgeError::MissingInput {
            path: PathBuf::from("fonts/NotoColorEmoji.ttf"),
        };
        assert_eq!(
            err.to_string(),
            "input file not found: fonts/NotoColorEmoji.ttf"
        );
    }

    #[test]
    fn test_error_display_missing_glyph() {
        let err = ForgeError::missing_glyph("1f600", "not in fallback font");
        assert_eq!(
            err.to_string(),
            "missing glyph for codepoint 1f600: not in fallback font"
        );
    }

    #[test]
    fn test_error_display_manifest_version() {
        let err = ForgeError::ManifestVersion {
            package: "emoji-datasource".to_string(),
            file: PathBuf::from("package.json"),
        };
        assert_eq!(
            err.to_string(),
            "package 'emoji-datasource' has no version in package.json"
        );
    }
}
