// core/catalog/src/favorites.rs

use crate::types::ListingId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session-scoped set of bookmarked listing ids.
///
/// Completely independent of the query pipeline: a favorited listing
/// stays favorited while filtered out of view, and nothing here is
/// persisted past the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: HashSet<ListingId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id: removed if present, added if absent. Returns whether
    /// the id is favorited afterwards.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.ids.iter().copied()
    }
}
