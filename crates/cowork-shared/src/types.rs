//! Common types

use serde::{Deserialize, Serialize};

/// Paging metadata carried by list envelopes (`pagination` in the backend JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Metadata for a collection that is always served as one page.
    pub fn single_page(total: u32, limit: u32) -> Self {
        Self { page: 1, limit, total, total_pages: 1 }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single_page(0, super::constants::DEFAULT_PAGE_SIZE)
    }
}
