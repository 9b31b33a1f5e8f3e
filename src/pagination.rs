//! Page-window computation for paged client listings.

use serde::Serialize;

/// Page size used when the caller does not choose one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Pages shown at the start and end of the window.
const EDGE_PAGES: usize = 2;
/// Pages shown before the current one.
const PAGES_BEFORE_CURRENT: usize = 2;
/// Pages shown after the current one.
const PAGES_AFTER_CURRENT: usize = 4;

/// Page numbers to render, with `None` marking a gap.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + EDGE_PAGES).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(PAGES_BEFORE_CURRENT));
    let mid_end = (current_page + PAGES_AFTER_CURRENT + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(EDGE_PAGES) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    /// Wraps one page of `total` matches split into pages of `per_page`.
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total.div_ceil(per_page.max(1));

        Self {
            items,
            pages: page_window(total_pages, current_page),
            page: current_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_empty_result() {
        let paginated = Paginated::<u8>::new(vec![], 1, 10, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn short_listing_shows_every_page() {
        let paginated = Paginated::new(vec![1, 2], 1, 2, 6);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn long_listing_inserts_gaps() {
        let paginated = Paginated::new(vec![0u8; 10], 10, 10, 300);
        assert_eq!(
            paginated.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(29),
                Some(30),
            ]
        );
    }

    #[test]
    fn zero_page_is_treated_as_first() {
        let paginated = Paginated::new(vec![1], 0, 10, 1);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![Some(1)]);
    }
}
