// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

mod config;
mod entry_id;
mod erased;
mod error;
mod hashed_sparse_map;
mod paged_sparse_map;
mod registry;
mod sparse_map;
mod storage;

use log::debug;

pub use config::{
    SparseSetConfig, DEFAULT_ID_RANGE, DEFAULT_INITIAL_CAPACITY, DEFAULT_PAGE_SIZE,
};
pub use entry_id::{EntryId, NULL_ENTRY_ID};
pub use erased::ErasedSparseSet;
pub use error::{Result, SparseSetError};
pub use hashed_sparse_map::HashedSparseMap;
pub use paged_sparse_map::PagedSparseMap;
pub use registry::SparseSetRegistry;
pub use sparse_map::SparseMap;

/// A container based on Sparse Set, that associates caller-provided entry ids (usually
/// entity ids) with values and keeps the values packed in one contiguous array.
///
/// Adding, looking up and removing an entry is O(1). Iterating over the values never
/// touches empty slots, which makes it a good fit for component storage in an ECS.
///
/// Removal moves the last value into the freed slot, so the dense order is only
/// "whatever survived the removals". References returned by lookups are borrows of the
/// set, so they can't be held across `add` or `remove`.
///
/// The sparse side is pluggable: `PagedSparseMap` (the default) allocates fixed-size
/// pages on demand, `HashedSparseMap` hashes the ids and suits very spread out ids.
/// Ids must be below `SparseSetConfig::id_range` and can't be `NULL_ENTRY_ID`.
///
/// ```
/// use entity_sparse_set::SparseSet;
///
/// let mut healths = SparseSet::new();
/// healths.add(5, 10).unwrap();
/// healths.add(7, 20).unwrap();
///
/// healths.remove(5).unwrap();
///
/// assert!(!healths.contains(5));
/// assert_eq!(healths.get(7), Some(&20));
/// assert_eq!(healths.entries(), &[20]);
/// ```
#[derive(Clone)]
pub struct SparseSet<T, M = PagedSparseMap> {
    // storage of dense and sparse values
    storage: storage::SparseArrayStorage<T, M>,
    config: SparseSetConfig,
}

impl<T> SparseSet<T> {
    /// Creates a set with the default config, reserving the default initial capacity.
    pub fn new() -> Self {
        Self::with_config(SparseSetConfig::default())
    }

    /// Creates a new SparseSet with allocated memory for the given number of elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(SparseSetConfig::default().with_initial_capacity(capacity))
    }
}

impl<T, M: SparseMap> Default for SparseSet<T, M> {
    fn default() -> Self {
        Self::with_config(SparseSetConfig::default())
    }
}

impl<T, M: SparseMap> SparseSet<T, M> {
    /// Creates an empty set. No sparse page is allocated until the first `add`.
    pub fn with_config(config: SparseSetConfig) -> Self {
        Self {
            storage: storage::SparseArrayStorage::with_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &SparseSetConfig {
        &self.config
    }

    /// Adds a value for an id that is not in the set yet.
    ///
    /// Fails without changing the set if the id is `NULL_ENTRY_ID`, out of the configured
    /// range, or already present.
    ///
    /// O(1) amortized time complexity.
    pub fn add(&mut self, id: EntryId, value: T) -> Result<()> {
        self.add_with(id, || value)
    }

    /// Same as `add`, but the value is only constructed once the id is known to be free.
    pub fn add_with<F: FnOnce() -> T>(&mut self, id: EntryId, make_value: F) -> Result<()> {
        let vacancy = self.config.check_id(id).and_then(|()| {
            match self.storage.get_sparse().get(id) {
                Some(_) => Err(SparseSetError::IdAlreadyPresent(id)),
                None => Ok(()),
            }
        });
        if let Err(error) = vacancy {
            debug!("add of entry {} rejected: {}", id, error);
            return Err(error);
        }

        self.storage.push(id, make_value());
        Ok(())
    }

    /// Adds all pairs in order, stopping at the first one that is rejected.
    ///
    /// Pairs added before the failure stay in the set.
    pub fn try_extend<I: IntoIterator<Item = (EntryId, T)>>(&mut self, pairs: I) -> Result<()> {
        let pairs = pairs.into_iter();
        self.storage.reserve(pairs.size_hint().0);
        for (id, value) in pairs {
            self.add(id, value)?;
        }
        Ok(())
    }

    /// Returns a reference to the value of the id, or None if the id is not in the set.
    ///
    /// O(1) time complexity.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        let dense_index = self.dense_index(id)?;
        Some(&self.storage.get_dense_values()[dense_index])
    }

    /// Returns a mutable reference to the value of the id, or None if the id is not in the set.
    ///
    /// O(1) time complexity.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        let dense_index = self.dense_index(id)?;
        Some(&mut self.storage.get_dense_values_mut()[dense_index])
    }

    /// Removes the entry, moving the last value into its place, and returns the removed value.
    ///
    /// O(1) time complexity, however changes the order of elements.
    pub fn remove(&mut self, id: EntryId) -> Result<T> {
        let dense_index = self.present_index(id, "remove")?;
        Ok(self.storage.swap_remove_dense(dense_index))
    }

    /// Removes the entry, keeping the order of the remaining elements.
    ///
    /// O(n) time complexity, however doesn't change the order of elements.
    pub fn remove_ordered(&mut self, id: EntryId) -> Result<T> {
        let dense_index = self.present_index(id, "ordered remove")?;
        Ok(self.storage.remove_dense(dense_index))
    }

    /// Swaps the dense positions of two entries. Lookups by id are not affected.
    ///
    /// O(1) time complexity.
    pub fn swap_dense(&mut self, id1: EntryId, id2: EntryId) -> Result<()> {
        let index1 = self.present_index(id1, "swap")?;
        let index2 = self.present_index(id2, "swap")?;
        self.storage.swap_dense(index1, index2);
        Ok(())
    }

    /// Returns true if the id is in the set. Never fails, any id can be tested.
    ///
    /// O(1) time complexity.
    pub fn contains(&self, id: EntryId) -> bool {
        self.dense_index(id).is_some()
    }

    /// Current position of the id's value in `entries()`.
    ///
    /// Positions change when other entries are removed, prefer ids for anything long-lived.
    pub fn dense_index(&self, id: EntryId) -> Option<usize> {
        if !self.config.is_addressable(id) {
            return None;
        }
        self.storage.get_sparse().get(id)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.storage.get_dense_values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.get_dense_values().is_empty()
    }

    /// Removes every entry and releases the sparse pages.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// All values, packed, in dense order.
    pub fn entries(&self) -> &[T] {
        self.storage.get_dense_values()
    }

    pub fn entries_mut(&mut self) -> &mut [T] {
        self.storage.get_dense_values_mut()
    }

    /// All ids, in the same order as `entries()`.
    pub fn registered_ids(&self) -> &[EntryId] {
        self.storage.get_dense_ids()
    }

    /// Returns an iterator over the values of the set.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.storage.get_dense_values().iter()
    }

    /// Returns an iterator over the mutable values of the set.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator {
        self.storage.get_dense_values_mut().iter_mut()
    }

    /// Returns an iterator over the ids of the set.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = EntryId> + ExactSizeIterator + '_ {
        self.storage.get_dense_ids().iter().copied()
    }

    /// Returns an iterator over the id-value pairs of the set.
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage
            .get_dense_ids()
            .iter()
            .copied()
            .zip(self.storage.get_dense_values().iter())
    }

    /// Returns an iterator over the ids and mutable values of the set.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (EntryId, &mut T)> {
        let (ids, values) = self.storage.get_dense_ids_and_values_mut();
        ids.iter().copied().zip(values.iter_mut())
    }

    /// Number of sparse slots backed by memory, to keep an eye on the sparse side's footprint.
    pub fn allocated_sparse_slots(&self) -> usize {
        self.storage.get_sparse().allocated_slots()
    }

    fn present_index(&self, id: EntryId, operation: &str) -> Result<usize> {
        let present = self.config.check_id(id).and_then(|()| {
            self.storage
                .get_sparse()
                .get(id)
                .ok_or(SparseSetError::IdNotPresent(id))
        });
        if let Err(error) = &present {
            debug!("{} of entry {} rejected: {}", operation, id, error);
        }
        present
    }
}

/// Iterator over `(id, &value)` pairs in dense order.
pub type Iter<'a, T> = std::iter::Zip<
    std::iter::Copied<std::slice::Iter<'a, EntryId>>,
    std::slice::Iter<'a, T>,
>;

impl<'a, T, M: SparseMap> IntoIterator for &'a SparseSet<T, M> {
    type Item = (EntryId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug, M: SparseMap> std::fmt::Debug for SparseSet<T, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
