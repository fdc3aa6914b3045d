// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use log::trace;

use crate::config::SparseSetConfig;
use crate::entry_id::EntryId;
use crate::sparse_map::SparseMap;

/// SparseArrayStorage is a storage for sparse set, it is a combination of dense and sparse arrays.
/// Dense arrays store values and their ids, the sparse map stores indexes into the dense arrays.
///
/// Every method keeps the three in sync, so the set on top of it only has to validate ids.
#[derive(Clone)]
pub(crate) struct SparseArrayStorage<T, M> {
    // has as many values as elements stored in the set
    dense_values: Vec<T>,
    // same size as the dense array, owner id of each value
    dense_ids: Vec<EntryId>,
    // id -> index in the dense arrays
    sparse: M,
}

impl<T, M: SparseMap> SparseArrayStorage<T, M> {
    pub(crate) fn with_config(config: &SparseSetConfig) -> Self {
        Self {
            dense_values: Vec::with_capacity(config.initial_capacity()),
            dense_ids: Vec::with_capacity(config.initial_capacity()),
            sparse: M::with_config(config),
        }
    }

    pub(crate) fn push(&mut self, id: EntryId, value: T) {
        let dense_index = self.dense_values.len();

        // dense arrays stay untouched if the sparse insert fails
        self.sparse.insert(id, dense_index);
        self.dense_ids.push(id);
        self.dense_values.push(value);
    }

    // the last element takes the place of the removed one
    pub(crate) fn swap_remove_dense(&mut self, index: usize) -> T {
        let removed_id = self.dense_ids[index];
        let last_index = self.dense_ids.len() - 1;

        if index != last_index {
            let moved_id = self.dense_ids[last_index];
            trace!(
                "entry {} relocated from dense slot {} to {}",
                moved_id,
                last_index,
                index
            );
            self.sparse.insert(moved_id, index);
        }

        self.dense_ids.swap_remove(index);
        self.sparse.remove(removed_id);
        self.dense_values.swap_remove(index)
    }

    // every element after the removed one moves one slot to the left
    pub(crate) fn remove_dense(&mut self, index: usize) -> T {
        let removed_id = self.dense_ids[index];

        for (new_index, &id) in self.dense_ids.iter().enumerate().skip(index + 1) {
            self.sparse.insert(id, new_index - 1);
        }

        self.dense_ids.remove(index);
        self.sparse.remove(removed_id);
        self.dense_values.remove(index)
    }

    pub(crate) fn swap_dense(&mut self, index1: usize, index2: usize) {
        self.dense_values.swap(index1, index2);
        self.dense_ids.swap(index1, index2);

        self.sparse.insert(self.dense_ids[index1], index1);
        self.sparse.insert(self.dense_ids[index2], index2);
    }

    pub(crate) fn clear(&mut self) {
        self.dense_values.clear();
        self.dense_ids.clear();
        self.sparse.clear();
    }

    pub(crate) fn get_dense_values(&self) -> &[T] {
        &self.dense_values
    }

    pub(crate) fn get_dense_values_mut(&mut self) -> &mut [T] {
        &mut self.dense_values
    }

    pub(crate) fn get_dense_ids(&self) -> &[EntryId] {
        &self.dense_ids
    }

    pub(crate) fn get_dense_ids_and_values_mut(&mut self) -> (&[EntryId], &mut [T]) {
        (&self.dense_ids, &mut self.dense_values)
    }

    pub(crate) fn get_sparse(&self) -> &M {
        &self.sparse
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.dense_values.reserve(additional);
        self.dense_ids.reserve(additional);
    }
}
