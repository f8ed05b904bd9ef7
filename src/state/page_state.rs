//! Current-page and record-total state.
//!
//! This module encapsulates what the pager knows about the collection:
//! the page being viewed, the rows from that page's most recent fetch,
//! and the total record count once the source has reported it.

use crate::domain::total_pages;
use crate::traits::Row;

/// State for the currently viewed page of a lazily fetched collection.
///
/// Responsibilities:
/// - Tracking the current page index and fixed page size
/// - Holding the rows of the current page's latest fetch
/// - Tracking the collection total once known
#[derive(Debug, Clone)]
pub struct PageState {
    /// Currently viewed page (0-based)
    current_page: usize,
    /// Rows per page, fixed at construction
    page_size: usize,
    /// Rows from the most recent applied fetch of the current page
    rows: Vec<Row>,
    /// Total record count, None until the first successful fetch
    total_records: Option<usize>,
}

impl PageState {
    /// Creates page state positioned at page 0 with no rows fetched.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            current_page: 0,
            page_size,
            rows: Vec::new(),
            total_records: None,
        }
    }

    // ===== Queries =====

    /// Returns the currently viewed page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the rows of the current page's latest applied fetch.
    ///
    /// Empty while no fetch for the current page has been applied.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the collection's total record count, if known.
    pub fn total_records(&self) -> Option<usize> {
        self.total_records
    }

    /// Returns the collection's page count, or 0 while the total is unknown.
    pub fn total_pages(&self) -> usize {
        self.total_records
            .map(|total| total_pages(total, self.page_size))
            .unwrap_or(0)
    }

    // ===== Mutations =====

    /// Moves to a new page, dropping the previous page's rows.
    ///
    /// Rows stay empty until a fetch for the new page is applied.
    pub fn navigate_to(&mut self, page: usize) {
        self.current_page = page;
        self.rows.clear();
    }

    /// Applies a completed fetch for the current page.
    pub fn apply_fetch(&mut self, rows: Vec<Row>, total_records: usize) {
        self.rows = rows;
        self.total_records = Some(total_records);
    }

    /// Resets to the initial state: page 0, no rows, total unknown.
    pub fn clear(&mut self) {
        self.current_page = 0;
        self.rows.clear();
        self.total_records = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PageState::new(12);
        assert_eq!(state.current_page(), 0);
        assert!(state.rows().is_empty());
        assert_eq!(state.total_records(), None);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_apply_fetch_records_totals() {
        let mut state = PageState::new(12);
        state.apply_fetch(vec![Row::new(1), Row::new(2)], 30);

        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.total_records(), Some(30));
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_navigate_drops_stale_rows() {
        let mut state = PageState::new(12);
        state.apply_fetch(vec![Row::new(1)], 30);

        state.navigate_to(2);
        assert_eq!(state.current_page(), 2);
        assert!(state.rows().is_empty());
        // Totals survive navigation
        assert_eq!(state.total_records(), Some(30));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = PageState::new(12);
        state.apply_fetch(vec![Row::new(1)], 30);
        state.navigate_to(1);

        state.clear();
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.total_records(), None);
        assert!(state.rows().is_empty());
    }
}
