// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::config::SparseSetConfig;
use crate::entry_id::EntryId;

/// The sparse half of a sparse set: maps an entry id to the index of its value in the
/// dense arrays.
///
/// Implementations don't validate ids, the owning set checks them against its config
/// before calling into the map.
pub trait SparseMap {
    /// Creates an empty map tuned by the config.
    fn with_config(config: &SparseSetConfig) -> Self
    where
        Self: Sized;

    /// Returns the dense index stored for the id.
    fn get(&self, id: EntryId) -> Option<usize>;

    /// Points the id at a dense index, overwriting any previous index.
    fn insert(&mut self, id: EntryId, dense_index: usize);

    /// Forgets the id and returns the dense index it pointed at.
    fn remove(&mut self, id: EntryId) -> Option<usize>;

    fn clear(&mut self);

    /// Number of slots currently backed by memory.
    fn allocated_slots(&self) -> usize;
}
