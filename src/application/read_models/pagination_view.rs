use crate::discovery::services::{QueryState, QueryStateCodec};
use serde::Serialize;

/// A link to one page of the current filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub page: u32,
    /// Full encoded query for this page
    pub query: String,
    pub current: bool,
}

/// Page links shown around the current page; first and last are always added
pub const PAGE_WINDOW: u32 = 10;

/// Pagination controls. Only built when there is more than one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
    pub pages: Vec<PageLink>,
}

impl PaginationView {
    pub fn build(state: &QueryState, current_page: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let link = |page: u32| {
            let target = QueryState::new(state.filter.with_page(page), state.view);
            PageLink {
                page,
                query: QueryStateCodec::encode_to_string(&target),
                current: page == current_page,
            }
        };

        Some(Self {
            current_page,
            total_pages,
            previous: (current_page > 1).then(|| link(current_page - 1)),
            next: (current_page < total_pages).then(|| link(current_page + 1)),
            pages: Self::page_numbers(current_page, total_pages)
                .into_iter()
                .map(link)
                .collect(),
        })
    }

    /// Ascending page numbers: a window of at most `PAGE_WINDOW` pages around
    /// `current_page`, plus the first and last page.
    fn page_numbers(current_page: u32, total_pages: u32) -> Vec<u32> {
        let anchor = current_page.clamp(1, total_pages);
        let mut start = anchor.saturating_sub(PAGE_WINDOW / 2).max(1);
        let end = start.saturating_add(PAGE_WINDOW - 1).min(total_pages);
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);

        let mut pages = Vec::with_capacity(PAGE_WINDOW as usize + 2);
        if start > 1 {
            pages.push(1);
        }
        pages.extend(start..=end);
        if end < total_pages {
            pages.push(total_pages);
        }
        pages
    }
}
