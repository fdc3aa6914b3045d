// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use hashbrown::HashMap;
use log::trace;

use crate::config::SparseSetConfig;
use crate::entry_id::{EntryId, NULL_INDEX};
use crate::sparse_map::SparseMap;

/// Pages below this index live in a flat directory, the rest are looked up by hash.
pub const NEAR_PAGE_COUNT: u64 = 1 << 16;

/// Sparse map made of fixed-size pages that are allocated on the first write into them.
///
/// The first `NEAR_PAGE_COUNT` pages are indexed by a flat directory, so lookups of low
/// ids are a shift, a mask and two loads. Pages further out are kept in a hash map keyed
/// by page index, which lets any `u64` id be stored while memory stays proportional to
/// the number of distinct pages touched.
#[derive(Clone, Debug)]
pub struct PagedSparseMap {
    // None until an id from that page is inserted
    near_pages: Vec<Option<Box<[usize]>>>,
    far_pages: HashMap<u64, Box<[usize]>>,
    page_shift: u32,
    page_mask: u64,
    allocated_pages: usize,
}

impl PagedSparseMap {
    pub fn page_size(&self) -> usize {
        1 << self.page_shift
    }

    pub fn allocated_pages(&self) -> usize {
        self.allocated_pages
    }

    // page index and offset inside the page, the offset always fits a page
    fn locate(&self, id: EntryId) -> (u64, usize) {
        (id >> self.page_shift, (id & self.page_mask) as usize)
    }

    fn page(&self, page_index: u64) -> Option<&[usize]> {
        if page_index < NEAR_PAGE_COUNT {
            self.near_pages.get(page_index as usize)?.as_deref()
        } else {
            self.far_pages.get(&page_index).map(|page| &**page)
        }
    }

    fn page_mut(&mut self, page_index: u64) -> Option<&mut [usize]> {
        if page_index < NEAR_PAGE_COUNT {
            self.near_pages.get_mut(page_index as usize)?.as_deref_mut()
        } else {
            self.far_pages.get_mut(&page_index).map(|page| &mut **page)
        }
    }

    fn page_or_allocate(&mut self, page_index: u64) -> &mut [usize] {
        let page_size = self.page_size();
        let allocated_pages = &mut self.allocated_pages;
        let new_page = || {
            trace!("allocating sparse page {} ({} slots)", page_index, page_size);
            *allocated_pages += 1;
            vec![NULL_INDEX; page_size].into_boxed_slice()
        };

        if page_index < NEAR_PAGE_COUNT {
            let near_index = page_index as usize;
            if near_index >= self.near_pages.len() {
                self.near_pages.resize_with(near_index + 1, || None);
            }
            self.near_pages[near_index].get_or_insert_with(new_page)
        } else {
            self.far_pages.entry(page_index).or_insert_with(new_page)
        }
    }
}

impl SparseMap for PagedSparseMap {
    fn with_config(config: &SparseSetConfig) -> Self {
        // the config keeps page sizes a power of two
        let page_shift = config.page_size().trailing_zeros();
        Self {
            near_pages: Vec::new(),
            far_pages: HashMap::new(),
            page_shift,
            page_mask: (1u64 << page_shift) - 1,
            allocated_pages: 0,
        }
    }

    fn get(&self, id: EntryId) -> Option<usize> {
        let (page_index, offset) = self.locate(id);
        match self.page(page_index)?[offset] {
            NULL_INDEX => None,
            dense_index => Some(dense_index),
        }
    }

    fn insert(&mut self, id: EntryId, dense_index: usize) {
        debug_assert!(dense_index != NULL_INDEX);
        let (page_index, offset) = self.locate(id);
        self.page_or_allocate(page_index)[offset] = dense_index;
    }

    fn remove(&mut self, id: EntryId) -> Option<usize> {
        let (page_index, offset) = self.locate(id);
        let page = self.page_mut(page_index)?;
        match std::mem::replace(&mut page[offset], NULL_INDEX) {
            NULL_INDEX => None,
            dense_index => Some(dense_index),
        }
    }

    fn clear(&mut self) {
        self.near_pages.clear();
        self.far_pages.clear();
        self.allocated_pages = 0;
    }

    fn allocated_slots(&self) -> usize {
        self.allocated_pages * self.page_size()
    }
}
