use super::vendor::VendorSummary;
use serde::Serialize;

/// One page of catalog results.
///
/// Built fresh for every fetch and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult {
    items: Vec<VendorSummary>,
    current_page: u32,
    total_pages: u32,
}

impl ListingResult {
    pub fn new(items: Vec<VendorSummary>, current_page: u32, total_pages: u32) -> Self {
        Self {
            items,
            current_page: current_page.max(1),
            total_pages,
        }
    }

    pub fn items(&self) -> &[VendorSummary] {
        &self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Number of pages needed for `total_items` at `page_size` per page
pub fn page_count(total_items: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(page_size as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
