//! Generated text artifacts of one build

/// JS module exporting every lookup table
pub const CODES_MODULE_FILE: &str = "emoji_codes.js";
/// Flat `name -> codepoint` JSON map
pub const NAME_TO_CODEPOINT_FILE: &str = "name_to_codepoint.json";
/// Flat `codepoint -> name` JSON map
pub const CODEPOINT_TO_NAME_FILE: &str = "codepoint_to_name.json";

/// CSS file holding the position rules of one emoji set
pub fn sprite_css_file(emoji_set: &str) -> String {
    format!("{}-sprite.css", emoji_set)
}

/// A text file to be written into the cache directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArtifact {
    pub file_name: String,
    pub content: String,
}

impl TextArtifact {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Everything the catalog/position generator produces.
///
/// Write-once: the materializer persists it and nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedArtifactSet {
    /// One stylesheet per emoji set
    pub sprite_css: Vec<TextArtifact>,
    /// JS module and the two JSON maps
    pub lookup_tables: Vec<TextArtifact>,
}

impl GeneratedArtifactSet {
    pub fn files(&self) -> impl Iterator<Item = &TextArtifact> {
        self.sprite_css.iter().chain(self.lookup_tables.iter())
    }

    pub fn get(&self, file_name: &str) -> Option<&TextArtifact> {
        self.files().find(|a| a.file_name == file_name)
    }
}
