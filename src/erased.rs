// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use downcast_rs::{impl_downcast, Downcast};

use crate::entry_id::EntryId;
use crate::error::Result;
use crate::sparse_map::SparseMap;
use crate::SparseSet;

/// The part of a sparse set that doesn't depend on the stored type.
///
/// Lets code hold sets of different value types side by side as
/// `Box<dyn ErasedSparseSet>`, e.g. to drop an entity from every component storage.
/// A boxed set can be turned back into its concrete type with `downcast_ref` / `downcast_mut`.
pub trait ErasedSparseSet: Downcast {
    /// Removes the entry and drops its value.
    fn remove_entry(&mut self, id: EntryId) -> Result<()>;

    fn contains(&self, id: EntryId) -> bool;

    /// Ids of all entries, in dense order.
    fn registered_ids(&self) -> &[EntryId];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Name of the stored value type, for diagnostics.
    fn value_type_name(&self) -> &'static str;
}
impl_downcast!(ErasedSparseSet);

impl<T: 'static, M: SparseMap + 'static> ErasedSparseSet for SparseSet<T, M> {
    fn remove_entry(&mut self, id: EntryId) -> Result<()> {
        SparseSet::<T, M>::remove(self, id).map(drop)
    }

    fn contains(&self, id: EntryId) -> bool {
        SparseSet::<T, M>::contains(self, id)
    }

    fn registered_ids(&self) -> &[EntryId] {
        SparseSet::<T, M>::registered_ids(self)
    }

    fn len(&self) -> usize {
        SparseSet::<T, M>::len(self)
    }

    fn clear(&mut self) {
        SparseSet::<T, M>::clear(self)
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
