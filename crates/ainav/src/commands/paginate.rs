//! # Pagination
//!
//! [`paginate`] slices an already-filtered list into fixed-size pages.
//!
//! ## Contract
//!
//! - `total_pages = ceil(total_items / page_size)`, and `0` for an empty list.
//! - Page numbers are 1-based. Page `0` is read as page `1`.
//! - A page past the end yields an empty slice, never a panic.
//! - `page_size == 0` means "no paging": the whole list is page 1.
//!
//! [`page_links`] derives the compact page-number strip shown under a listing.

use serde::Serialize;
use tracing::debug;

/// Page metadata, independent of the item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl PageInfo {
    /// 1-based inclusive bounds of the items on this page, `None` when it is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.current_page == 0 || self.current_page > self.total_pages {
            return None;
        }
        if self.page_size == 0 {
            return Some((1, self.total_items));
        }
        let start = (self.current_page - 1) * self.page_size + 1;
        let end = (self.current_page * self.page_size).min(self.total_items);
        Some((start, end))
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    match (total_items, page_size) {
        (0, _) => 0,
        (_, 0) => 1,
        (n, size) => n.div_ceil(size),
    }
}

/// Returns page `page` of `items`. The input is cloned from, never reordered.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let slice: &[T] = if page_size == 0 {
        if page == 1 {
            items
        } else {
            &[]
        }
    } else {
        let start = (page - 1).saturating_mul(page_size).min(total_items);
        let end = page.saturating_mul(page_size).min(total_items);
        &items[start..end]
    };

    debug!(page, page_size, total_items, total_pages, "paginated");

    Page {
        items: slice.to_vec(),
        info: PageInfo {
            current_page: page,
            total_pages,
            total_items,
            page_size,
        },
    }
}

/// An entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

const MAX_VISIBLE_LINKS: usize = 7;

/// Builds the page-number strip: every page when there are at most seven, otherwise the
/// first and last page around a window at the current position, with ellipses for gaps.
/// Empty when there is nothing to page through.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Number};

    if total_pages <= 1 {
        return Vec::new();
    }
    if total_pages <= MAX_VISIBLE_LINKS {
        return (1..=total_pages).map(Number).collect();
    }

    let mut links = vec![Number(1)];
    if current <= 4 {
        links.extend((2..=5).map(Number));
        links.push(Ellipsis);
        links.push(Number(total_pages));
    } else if current >= total_pages - 3 {
        links.push(Ellipsis);
        links.extend((total_pages - 4..=total_pages).map(Number));
    } else {
        links.push(Ellipsis);
        links.extend((current - 1..=current + 1).map(Number));
        links.push(Ellipsis);
        links.push(Number(total_pages));
    }
    links
}
