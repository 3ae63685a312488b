//! Emoji name to codepoint maps

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Codepoint;

/// Flat `name -> codepoint` map.
///
/// Used for the emoji name map that drives rasterization and for the legacy
/// "unified reactions" map, which shares the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiMap(BTreeMap<String, Codepoint>);

/// Legacy reactions dataset: display name to codepoint
pub type LegacyReactions = EmojiMap;

impl EmojiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, codepoint: Codepoint) {
        self.0.insert(name.into(), codepoint);
    }

    pub fn get(&self, name: &str) -> Option<&Codepoint> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Codepoint)> {
        self.0.iter().map(|(name, cp)| (name.as_str(), cp))
    }

    /// Unique codepoints in sorted order
    pub fn codepoints(&self) -> Vec<Codepoint> {
        self.0
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every name grouped under its codepoint, names sorted
    pub fn names_by_codepoint(&self) -> BTreeMap<Codepoint, Vec<String>> {
        let mut grouped: BTreeMap<Codepoint, Vec<String>> = BTreeMap::new();
        for (name, cp) in &self.0 {
            grouped.entry(cp.clone()).or_default().push(name.clone());
        }
        grouped
    }

    /// Reverse lookup; the lexicographically first name wins on collisions.
    pub fn first_name_by_codepoint(&self) -> BTreeMap<Codepoint, String> {
        let mut reverse = BTreeMap::new();
        for (name, cp) in &self.0 {
            reverse.entry(cp.clone()).or_insert_with(|| name.clone());
        }
        reverse
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Codepoint> {
        &self.0
    }
}

impl FromIterator<(String, Codepoint)> for EmojiMap {
    fn from_iter<I: IntoIterator<Item = (String, Codepoint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
