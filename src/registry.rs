// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use std::any::TypeId;

use hashbrown::HashMap;
use log::debug;

use crate::config::SparseSetConfig;
use crate::entry_id::EntryId;
use crate::erased::ErasedSparseSet;
use crate::paged_sparse_map::PagedSparseMap;
use crate::sparse_map::SparseMap;
use crate::SparseSet;

/// Holds one sparse set per stored type and applies id-level operations to all of them.
///
/// Sets are keyed by their full type, so `SparseSet<T>` and
/// `SparseSet<T, HashedSparseMap>` are two different registrations.
#[derive(Default)]
pub struct SparseSetRegistry {
    sets: HashMap<TypeId, Box<dyn ErasedSparseSet>>,
}

impl SparseSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set storing `T`, creating it with the default config if needed.
    pub fn register<T: 'static>(&mut self) -> &mut SparseSet<T> {
        self.register_with::<T, PagedSparseMap>(SparseSetConfig::default())
    }

    /// Returns the set storing `T` in a `M` sparse map, creating it from the config if
    /// needed. The config is ignored when the set already exists.
    pub fn register_with<T: 'static, M: SparseMap + 'static>(
        &mut self,
        config: SparseSetConfig,
    ) -> &mut SparseSet<T, M> {
        let set = self
            .sets
            .entry(TypeId::of::<SparseSet<T, M>>())
            .or_insert_with(|| {
                debug!("registering sparse set for {}", std::any::type_name::<T>());
                Box::new(SparseSet::<T, M>::with_config(config))
            });

        match set.downcast_mut::<SparseSet<T, M>>() {
            Some(set) => set,
            // sets are keyed by their own TypeId
            None => unreachable!(),
        }
    }

    /// Registers an already filled set, returning the one it replaces.
    pub fn insert_set<T: 'static, M: SparseMap + 'static>(
        &mut self,
        set: SparseSet<T, M>,
    ) -> Option<SparseSet<T, M>> {
        self.sets
            .insert(TypeId::of::<SparseSet<T, M>>(), Box::new(set))
            .and_then(|previous| previous.downcast::<SparseSet<T, M>>().ok())
            .map(|previous| *previous)
    }

    /// Unregisters the set and hands it back.
    pub fn take_set<T: 'static, M: SparseMap + 'static>(&mut self) -> Option<SparseSet<T, M>> {
        self.sets
            .remove(&TypeId::of::<SparseSet<T, M>>())
            .and_then(|set| set.downcast::<SparseSet<T, M>>().ok())
            .map(|set| *set)
    }

    pub fn get<T: 'static>(&self) -> Option<&SparseSet<T>> {
        self.get_with_map::<T, PagedSparseMap>()
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        self.get_with_map_mut::<T, PagedSparseMap>()
    }

    pub fn get_with_map<T: 'static, M: SparseMap + 'static>(&self) -> Option<&SparseSet<T, M>> {
        self.sets
            .get(&TypeId::of::<SparseSet<T, M>>())
            .and_then(|set| set.downcast_ref::<SparseSet<T, M>>())
    }

    pub fn get_with_map_mut<T: 'static, M: SparseMap + 'static>(
        &mut self,
    ) -> Option<&mut SparseSet<T, M>> {
        self.sets
            .get_mut(&TypeId::of::<SparseSet<T, M>>())
            .and_then(|set| set.downcast_mut::<SparseSet<T, M>>())
    }

    /// Removes the id from every set that contains it.
    ///
    /// Returns the number of sets the id was removed from.
    pub fn remove_all(&mut self, id: EntryId) -> usize {
        let mut removed = 0;
        for set in self.sets.values_mut() {
            if set.contains(id) && set.remove_entry(id).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    pub fn contains_in_any(&self, id: EntryId) -> bool {
        self.sets.values().any(|set| set.contains(id))
    }

    /// Number of registered sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ErasedSparseSet> {
        self.sets.values().map(|set| &**set)
    }
}
