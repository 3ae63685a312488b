//! Alias resolution between legacy and current codepoints
//!
//! While a dataset migration is in flight, a legacy short name may still point
//! at an older codepoint than the dataset's current `unified` value. Such
//! legacy codepoints become aliases that address the same sprite cell.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{EmojiRecord, LegacyReactions};
use crate::domain::value_objects::Codepoint;

/// Legacy codepoint -> current unified codepoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<Codepoint, Codepoint>,
}

impl AliasTable {
    /// Resolve aliases for every dataset entry.
    ///
    /// A legacy codepoint that is itself some entry's current codepoint is
    /// never aliased, so it keeps addressing its own cell.
    pub fn resolve(records: &[EmojiRecord], legacy: &LegacyReactions) -> Self {
        let current: BTreeSet<&Codepoint> = records.iter().map(|r| &r.unified).collect();
        let mut aliases = BTreeMap::new();

        for record in records {
            for name in &record.short_names {
                let Some(legacy_cp) = legacy.get(name) else {
                    continue;
                };
                if legacy_cp == &record.unified || current.contains(legacy_cp) {
                    continue;
                }
                aliases
                    .entry(legacy_cp.clone())
                    .or_insert_with(|| record.unified.clone());
            }
        }

        Self { aliases }
    }

    /// Legacy codepoints that should share `unified`'s position
    pub fn aliases_of<'a>(&'a self, unified: &'a Codepoint) -> impl Iterator<Item = &'a Codepoint> {
        self.aliases
            .iter()
            .filter(move |(_, target)| *target == unified)
            .map(|(legacy, _)| legacy)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
