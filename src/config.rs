// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::entry_id::{EntryId, NULL_ENTRY_ID};
use crate::error::{Result, SparseSetError};

/// Ids from `0` up to (not including) this value are accepted by default.
pub const DEFAULT_ID_RANGE: u64 = 1_000_000;

/// Number of sparse slots in one lazily allocated page.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Number of dense entries reserved when a set is created.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1028;

// bigger pages defeat the point of paging
const MAX_PAGE_SIZE: usize = 1 << 20;

/// Tuning of a sparse set.
///
/// ```
/// use entity_sparse_set::{SparseSet, SparseSetConfig};
///
/// let config = SparseSetConfig::new()
///     .with_id_range(1 << 32)
///     .with_page_size(1024)
///     .with_initial_capacity(0);
/// let set: SparseSet<f32> = SparseSet::with_config(config);
/// assert_eq!(set.config().page_size(), 1024);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparseSetConfig {
    id_range: u64,
    page_size: usize,
    initial_capacity: usize,
}

impl Default for SparseSetConfig {
    fn default() -> Self {
        Self {
            id_range: DEFAULT_ID_RANGE,
            page_size: DEFAULT_PAGE_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl SparseSetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts every id except `NULL_ENTRY_ID`.
    ///
    /// Works with both sparse maps. `PagedSparseMap` still allocates a whole page for each
    /// far id, so `HashedSparseMap` uses less memory when ids are scattered one per page.
    pub fn unbounded() -> Self {
        Self::default().with_id_range(u64::MAX)
    }

    /// Sets the exclusive upper bound for ids.
    pub fn with_id_range(mut self, id_range: u64) -> Self {
        self.id_range = id_range;
        self
    }

    /// Sets the number of slots per sparse page, rounded up to a power of two.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE).next_power_of_two();
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn id_range(&self) -> u64 {
        self.id_range
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns true if the id can ever be stored in a set using this config.
    pub fn is_addressable(&self, id: EntryId) -> bool {
        id != NULL_ENTRY_ID && id < self.id_range
    }

    pub(crate) fn check_id(&self, id: EntryId) -> Result<()> {
        if id == NULL_ENTRY_ID {
            return Err(SparseSetError::NullIdentifierUsed);
        }
        if id >= self.id_range {
            return Err(SparseSetError::IdOutOfRange {
                id,
                id_range: self.id_range,
            });
        }
        Ok(())
    }
}
