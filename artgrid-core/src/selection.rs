//! Selection set keyed by artwork identity.

use crate::artwork::{Artwork, ArtworkId};
use std::collections::HashSet;

/// Records the user has marked, in the order they were added.
///
/// Membership is by `ArtworkId`, so a record re-fetched on another page visit
/// is still recognized as selected. The set may hold records that are not on
/// the page currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    records: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Artwork>) -> Self {
        let mut set = Self::new();
        set.extend(records);
        set
    }

    /// Replace the whole set.
    pub fn replace(&mut self, records: impl IntoIterator<Item = Artwork>) {
        self.clear();
        self.extend(records);
    }

    /// Append records, skipping ones already selected.
    pub fn extend(&mut self, records: impl IntoIterator<Item = Artwork>) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn insert(&mut self, record: Artwork) -> bool {
        if self.ids.insert(record.id) {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, id: ArtworkId) -> bool {
        if self.ids.remove(&id) {
            self.records.retain(|r| r.id != id);
            true
        } else {
            false
        }
    }

    /// Flip membership of a record. Returns whether it is now selected.
    pub fn toggle(&mut self, record: &Artwork) -> bool {
        if self.remove(record.id) {
            false
        } else {
            self.insert(record.clone());
            true
        }
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.records.iter()
    }

    pub fn ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(|r| r.id).collect()
    }
}
