//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

/// Cache key of the current inputs
#[derive(Debug, Clone, Serialize)]
pub struct StampEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub stamp: &'a str,
    pub dataset_version: &'a str,
    pub cache_dir: String,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl<'a> StampEvent<'a> {
    pub fn new(stamp: &'a str, dataset_version: &'a str, cache_dir: String, complete: bool) -> Self {
        Self {
            event: "stamp",
            command: "stamp",
            stamp,
            dataset_version,
            cache_dir,
            complete,
            generated_at: None,
        }
    }

    pub fn with_generated_at(mut self, generated_at: String) -> Self {
        self.generated_at = Some(generated_at);
        self
    }
}

/// Event emitted when a command fails before producing a result.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Unknown config key
#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> From<&'a emojiforge::config::ConfigWarning> for ConfigWarningEvent<'a> {
    fn from(w: &'a emojiforge::config::ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            key: &w.key,
            file: w.file.display().to_string(),
            line: w.line,
            suggestion: w.suggestion.as_deref(),
        }
    }
}
