//! Caller-side "load more" bookkeeping.
//!
//! The repository is stateless with respect to paging: callers track how many
//! events they have received and ask for the next window explicitly.

use serde::Serialize;

/// Number of events requested by the first-page fetch.
pub const FIRST_PAGE_SIZE: u32 = 10;

/// Number of events requested by each "load more" fetch.
pub const PAGE_SIZE: u32 = 20;

/// A remote window to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

/// Running offset and end-of-list detection for a paged list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    current_offset: u32,
    page_size: u32,
    has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_offset: 0,
            page_size,
            has_more: true,
        }
    }

    pub fn current_offset(&self) -> u32 {
        self.current_offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Restarts the cursor after a fresh first page of `len` events.
    pub fn reset(&mut self, len: usize) {
        self.current_offset = saturating_u32(len);
        self.has_more = true;
    }

    /// The next window to request, or None once the list is exhausted.
    pub fn next_request(&self) -> Option<PageRequest> {
        self.has_more.then_some(PageRequest {
            offset: self.current_offset,
            limit: self.page_size,
        })
    }

    /// Advances past a received page. A short page ends the list.
    pub fn record_page(&mut self, len: usize) {
        self.current_offset = self.current_offset.saturating_add(saturating_u32(len));
        self.has_more = len >= self.page_size as usize;
    }
}

fn saturating_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_page_size() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_size(), PAGE_SIZE);
        assert_eq!(pagination.current_offset(), 0);
        assert!(pagination.has_more());
    }

    #[test]
    fn test_reset_after_first_page() {
        let mut pagination = Pagination::new(20);
        pagination.reset(10);
        assert_eq!(
            pagination.next_request(),
            Some(PageRequest {
                offset: 10,
                limit: 20
            })
        );
    }

    #[test]
    fn test_full_page_keeps_going() {
        let mut pagination = Pagination::new(20);
        pagination.reset(10);
        pagination.record_page(20);
        assert!(pagination.has_more());
        assert_eq!(pagination.current_offset(), 30);
    }

    #[test]
    fn test_short_page_ends_list() {
        let mut pagination = Pagination::new(20);
        pagination.reset(10);
        pagination.record_page(5);
        assert!(!pagination.has_more());
        assert_eq!(pagination.current_offset(), 15);
        assert_eq!(pagination.next_request(), None);
    }

    #[test]
    fn test_reset_reopens_exhausted_list() {
        let mut pagination = Pagination::new(20);
        pagination.record_page(0);
        assert!(!pagination.has_more());
        pagination.reset(10);
        assert!(pagination.has_more());
        assert_eq!(pagination.current_offset(), 10);
    }
}
