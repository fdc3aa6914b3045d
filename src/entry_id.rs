// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

/// Identifier of an entry in a sparse set, usually an entity id.
///
/// Ids are owned by the caller, the set never generates them.
pub type EntryId = u64;

/// Reserved id meaning "no entry". It can never be added to a set.
pub const NULL_ENTRY_ID: EntryId = EntryId::MAX;

// marks a sparse slot that doesn't point into the dense arrays
pub(crate) const NULL_INDEX: usize = usize::MAX;
