//! Offset/limit page math and the pure pagination control.
//!
//! Everything here is a pure function of its inputs. The control never holds
//! state of its own: page changes are reported upward and the owning list
//! page is solely responsible for re-fetching.

/// One fetched page of a resource, plus the exact total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub total_pages: u32,
}

/// Zero-based inclusive row window for a one-based page number:
/// `[(page-1)*page_size, page*page_size - 1]`.
pub fn page_window(page: u32, page_size: u32) -> (usize, usize) {
    let from = (page - 1) as usize * page_size as usize;
    let to = page as usize * page_size as usize - 1;
    (from, to)
}

/// `ceil(total / page_size)`.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    let page_size = page_size as usize;
    ((total + page_size - 1) / page_size) as u32
}

/// Pure pagination control model.
///
/// `new` returns `None` when there is at most one page — the control is not
/// rendered at all in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self { current_page, total_pages })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The page numbers to render, in order.
    pub fn pages(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Target of the "previous" control, when enabled.
    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.current_page - 1)
    }

    /// Target of the "next" control, when enabled.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }
}
