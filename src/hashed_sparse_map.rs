// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use hashbrown::HashMap;

use crate::config::SparseSetConfig;
use crate::entry_id::EntryId;
use crate::sparse_map::SparseMap;

/// Sparse map backed by a hash map. Costs a hash per lookup, but memory only grows with
/// the number of stored ids, no matter how far apart they are.
#[derive(Clone, Debug, Default)]
pub struct HashedSparseMap {
    slots: HashMap<EntryId, usize>,
}

impl SparseMap for HashedSparseMap {
    fn with_config(config: &SparseSetConfig) -> Self {
        Self {
            slots: HashMap::with_capacity(config.initial_capacity()),
        }
    }

    fn get(&self, id: EntryId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    fn insert(&mut self, id: EntryId, dense_index: usize) {
        self.slots.insert(id, dense_index);
    }

    fn remove(&mut self, id: EntryId) -> Option<usize> {
        self.slots.remove(&id)
    }

    fn clear(&mut self) {
        self.slots.clear();
    }

    fn allocated_slots(&self) -> usize {
        self.slots.capacity()
    }
}
