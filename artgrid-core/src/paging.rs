//! Page state for the single page of records held in memory.

use crate::artwork::Artwork;
use serde::Serialize;

/// Rows per page. Every request asks for exactly this many.
pub const PAGE_SIZE: usize = 12;

/// Query sent to the API. `page` is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Build the wire request for a zero-based page index.
    pub fn for_index(index: usize, limit: usize) -> Self {
        Self {
            page: index + 1,
            limit,
        }
    }

    pub fn index(&self) -> usize {
        self.page.saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_records: u64,
    pub loading: bool,
    pub records: Vec<Artwork>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            current_page: 0,
            page_size: PAGE_SIZE,
            total_records: 0,
            loading: false,
            records: Vec::new(),
        }
    }

    /// Number of pages the paginator shows. Never zero.
    pub fn page_count(&self) -> usize {
        let size = self.page_size.max(1) as u64;
        let pages = self.total_records.div_ceil(size);
        (pages as usize).max(1)
    }

    /// Whether a zero-based page index holds any records.
    pub fn has_page(&self, index: usize) -> bool {
        (index as u64) * (self.page_size as u64) < self.total_records
    }

    pub fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    /// Zero-based index of the first record on the current page.
    pub fn first_record_index(&self) -> u64 {
        (self.current_page as u64) * (self.page_size as u64)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
