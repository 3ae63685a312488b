//! Codepoint Value Object
//!
//! A validated emoji codepoint: one or more Unicode scalar values written as
//! lowercase hex and joined by `-` (e.g. `1f600`, `1f1fa-1f1f8`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ForgeError;

/// Emoji codepoint sequence in canonical lowercase form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(String);

impl Codepoint {
    /// Parse a codepoint, normalizing to lowercase.
    pub fn parse(raw: &str) -> Result<Self, ForgeError> {
        let canonical = raw.trim().to_ascii_lowercase();
        let invalid = || ForgeError::InvalidCodepoint {
            value: raw.to_string(),
        };

        if canonical.is_empty() {
            return Err(invalid());
        }
        for segment in canonical.split('-') {
            if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(segment, 16).map_err(|_| invalid())?;
            if char::from_u32(value).is_none() {
                return Err(invalid());
            }
        }

        Ok(Self(canonical))
    }

    /// Build a codepoint for a single scalar value.
    pub fn from_char(c: char) -> Self {
        Self(format!("{:x}", c as u32))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scalar values making up this sequence.
    pub fn scalars(&self) -> Vec<u32> {
        self.0
            .split('-')
            .filter_map(|segment| u32::from_str_radix(segment, 16).ok())
            .collect()
    }

    /// The first scalar value, used for glyph table lookups.
    pub fn first_scalar(&self) -> u32 {
        self.scalars().first().copied().unwrap_or_default()
    }

    /// The character for single-scalar codepoints; `None` for sequences.
    pub fn as_char(&self) -> Option<char> {
        match self.scalars().as_slice() {
            [only] => char::from_u32(*only),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.0.contains('-')
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Codepoint {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Codepoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Codepoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Codepoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
