//! Pagination state and the page-number window.

use serde::{Deserialize, Serialize};

/// Page sizes offered by the per-page selector.
pub const PER_PAGE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Show every page number when there are at most this many pages.
const MAX_UNCOLLAPSED_PAGES: u32 = 7;

/// Caller-computed pagination values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    pub per_page: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Derive `total_pages` from a total item count.
    #[must_use]
    pub const fn for_total(page: u32, per_page: u32, total_items: u32) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page)
        };
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// The "previous" control is enabled past page 1.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// The "next" control is enabled before the last page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based indices of the first and last item on the current page,
    /// `(0, 0)` when there is nothing to show.
    #[must_use]
    pub fn showing_range(&self) -> (u32, u32) {
        if self.total_items == 0 || self.per_page == 0 || self.page == 0 {
            return (0, 0);
        }
        let first = (self.page - 1).saturating_mul(self.per_page).saturating_add(1);
        if first > self.total_items {
            return (0, 0);
        }
        let last = self
            .page
            .saturating_mul(self.per_page)
            .min(self.total_items);
        (first, last)
    }

    /// Page number list for the current page.
    #[must_use]
    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.page, self.total_pages)
    }
}

/// One entry in the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    /// The page number, or `None` for an ellipsis.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }
}

/// Page numbers to render for `current` out of `total_pages`.
///
/// All pages are listed when `total_pages <= 7`. Otherwise page 1 and the
/// last page are always shown around a window of `current - 1 ..= current + 1`.
/// Near either end the window widens to a fixed five pages (`1..=5` or
/// `total-4..=total`). An ellipsis marks any gap between the window and
/// the first or last page.
#[must_use]
pub fn page_items(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= MAX_UNCOLLAPSED_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let last = total_pages;
    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current >= last - 2 {
        (last - 4, last - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = Vec::with_capacity(9);
    items.push(PageItem::Page(1));
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < last - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(last));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page};

    #[test]
    fn test_middle_window() {
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_small_totals_list_every_page() {
        for current in 1..=5 {
            assert_eq!(
                page_items(current, 5),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
            );
        }
        assert_eq!(page_items(4, 7).len(), 7);
    }

    #[test]
    fn test_zero_pages() {
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn test_window_widens_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)];
        assert_eq!(page_items(1, 20), expected);
        assert_eq!(page_items(3, 20), expected);
        assert_eq!(
            page_items(4, 20),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_widens_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)];
        assert_eq!(page_items(20, 20), expected);
        assert_eq!(page_items(18, 20), expected);
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(
            page_items(5, 8),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn test_for_total() {
        let p = Pagination::for_total(1, 20, 41);
        assert_eq!(p.total_pages, 3);
        assert_eq!(Pagination::for_total(1, 20, 0).total_pages, 0);
        assert_eq!(Pagination::for_total(1, 0, 10).total_pages, 0);
    }

    #[test]
    fn test_previous_next_bounds() {
        let first = Pagination::for_total(1, 10, 30);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pagination::for_total(3, 10, 30);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let empty = Pagination::for_total(1, 10, 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
    }

    #[test]
    fn test_showing_range() {
        assert_eq!(Pagination::for_total(1, 20, 45).showing_range(), (1, 20));
        assert_eq!(Pagination::for_total(3, 20, 45).showing_range(), (41, 45));
        assert_eq!(Pagination::for_total(1, 20, 0).showing_range(), (0, 0));
        assert_eq!(Pagination::for_total(9, 20, 45).showing_range(), (0, 0));
    }
}
