//! Cache Stamp Value Object
//!
//! Content-addressed identifier of one build's input set. The hex digest is
//! used verbatim as the cache directory name.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest over the tracked inputs of a build
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheStamp(String);

impl CacheStamp {
    /// Name of the marker file written after a fully successful run
    pub const SUCCESS_FILE: &'static str = ".success-stamp";

    /// Start hashing a new input set
    pub fn builder() -> CacheStampBuilder {
        CacheStampBuilder::default()
    }

    /// Wrap an already computed hex digest
    pub fn from_hex(hex: &str) -> Self {
        Self(hex.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated digest for human output
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for CacheStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheStamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Incremental stamp computation.
///
/// Every chunk is length-prefixed so `["ab", "c"]` and `["a", "bc"]` produce
/// different stamps.
#[derive(Default)]
pub struct CacheStampBuilder {
    hasher: Sha256,
}

impl CacheStampBuilder {
    /// Feed the content of one tracked file
    pub fn add_bytes(mut self, content: &[u8]) -> Self {
        self.hasher.update((content.len() as u64).to_le_bytes());
        self.hasher.update(content);
        self
    }

    /// Feed a version string or other textual input
    pub fn add_str(self, value: &str) -> Self {
        self.add_bytes(value.as_bytes())
    }

    pub fn finish(self) -> CacheStamp {
        CacheStamp(format!("{:x}", self.hasher.finalize()))
    }
}
