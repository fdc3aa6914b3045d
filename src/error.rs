// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::entry_id::EntryId;

/// Misuse of a sparse set detected before any state was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseSetError {
    /// The id is not below the configured id range of the set.
    IdOutOfRange { id: EntryId, id_range: u64 },
    /// `add` was called for an id that is already in the set.
    IdAlreadyPresent(EntryId),
    /// The operation needs the id to be in the set, and it is not.
    IdNotPresent(EntryId),
    /// `NULL_ENTRY_ID` was passed where a real id is required.
    NullIdentifierUsed,
}

impl std::fmt::Display for SparseSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SparseSetError::IdOutOfRange { id, id_range } => {
                write!(f, "Entry id {} is out of the addressable range 0..{}", id, id_range)
            }
            SparseSetError::IdAlreadyPresent(id) => {
                write!(f, "Entry id {} is already present in the set", id)
            }
            SparseSetError::IdNotPresent(id) => write!(f, "Entry id {} is not present in the set", id),
            SparseSetError::NullIdentifierUsed => {
                write!(f, "The null entry id can't be used as a real id")
            }
        }
    }
}

impl std::error::Error for SparseSetError {}

/// Result type for sparse set operations
pub type Result<T> = core::result::Result<T, SparseSetError>;
