//! Centralized table state for the pagination controller.
//!
//! This module composes the focused state components that each manage
//! one aspect of the table's state. Keeping them separate keeps
//! invariants local and allows borrow-checker friendly access to
//! different aspects at once.

use crate::state::{PageState, SelectionStore};

/// Table state composed of focused state components.
///
/// Each component has private fields to enforce its invariants and
/// intent-revealing public methods; only the top-level error message
/// is a plain field.
#[derive(Debug, Clone)]
pub struct TableState {
    // ===== Focused State Components =====
    /// Current page, fetched rows, and record totals
    pub page: PageState,

    /// Per-page selection masks
    pub selection: SelectionStore,

    // ===== Top-Level State =====
    /// Current retryable error message to display (if any)
    pub error_message: Option<String>,
}

impl TableState {
    /// Creates table state for the given page size with nothing
    /// fetched and nothing selected.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: PageState::new(page_size),
            selection: SelectionStore::new(page_size),
            error_message: None,
        }
    }

    /// Resets all state, discarding rows, totals, and selection.
    pub fn clear(&mut self) {
        let page_size = self.page.page_size();
        self.page.clear();
        self.selection = SelectionStore::new(page_size);
        self.error_message = None;
    }
}
