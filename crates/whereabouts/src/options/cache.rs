//! Parse-once cache for display options.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::{DisplayOptions, OptionsId};

/// Memoizes [`DisplayOptions::parse`] by options-string identity.
///
/// Hosts re-evaluate the same options string on every state update; the
/// parsed form is pure data, so it is parsed once and reused across updates.
#[derive(Debug, Default)]
pub struct OptionsCache {
    entries: HashMap<OptionsId, DisplayOptions>,
}

impl OptionsCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the parsed form of `raw`, parsing and storing it on first use.
    ///
    /// A hash collision between two distinct strings is resolved by letting
    /// the newer string take the slot; this should be vanishingly rare with
    /// a 64-bit FNV-1a hash but must not serve the wrong tree.
    pub fn get_or_parse(&mut self, raw: &str) -> &DisplayOptions {
        let id = OptionsId::from_options(raw);
        match self.entries.entry(id) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if slot.raw() != raw {
                    *slot = DisplayOptions::parse(raw);
                }
                slot
            }
            Entry::Vacant(entry) => entry.insert(DisplayOptions::parse(raw)),
        }
    }

    /// Look up a previously parsed entry by id.
    pub fn get(&self, id: OptionsId) -> Option<&DisplayOptions> {
        self.entries.get(&id)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
