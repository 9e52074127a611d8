//! Page arithmetic for the pagination control.

/// How many page links to show on each side of the current page.
const PAGE_RADIUS: u64 = 2;

/// The pages reachable from a result set.
///
/// Pages are 1-based. The window is only a view: picking a page turns into
/// an offset that goes through [`on_page_change`](super::on_page_change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub total: u64,
    pub limit: u32,
}

impl PageWindow {
    /// A zero `limit` is treated as one item per page.
    pub fn new(offset: u64, total: u64, limit: u32) -> Self {
        Self {
            offset,
            total,
            limit: limit.max(1),
        }
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit)).max(1)
    }

    /// 1-based page containing `offset`, clamped to the last page.
    pub fn current_page(&self) -> u64 {
        (self.offset / u64::from(self.limit))
            .saturating_add(1)
            .min(self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Offset of the first item on `page` (1-based; 0 is treated as 1).
    pub fn offset_for(&self, page: u64) -> u64 {
        page.saturating_sub(1).saturating_mul(u64::from(self.limit))
    }

    /// Page numbers to render around the current page.
    pub fn pages(&self) -> Vec<u64> {
        let current = self.current_page();
        let first = current.saturating_sub(PAGE_RADIUS).max(1);
        let last = current.saturating_add(PAGE_RADIUS).min(self.total_pages());
        (first..=last).collect()
    }
}
