//! Pagination controller: the boundary the UI layer talks to.
//!
//! The controller owns the table state and the async loader, and maps
//! the UI event contract (page change, selection edit, bulk submit)
//! onto the selection core. All state mutations happen synchronously
//! on the caller's thread, in event order; only the page fetch itself
//! runs in the background.

use crate::app::TableState;
use crate::domain::{derive_mask, project_selected, select_first_k, total_pages};
use crate::error::SelectionError;
use crate::io::{AsyncPageLoader, PageLoadResult};
use crate::traits::{PageSource, Row, RowId};
use std::collections::HashSet;
use std::sync::Arc;

/// Coordinates page fetching, selection state, and the render contract.
///
/// Lifecycle: construct with a data source, call `mount()` to start
/// the first fetch, then call `poll_fetch()` once per event-loop turn
/// and forward UI events to the `on_*` handlers.
pub struct PaginationController {
    state: TableState,
    loader: AsyncPageLoader,
    source: Arc<dyn PageSource>,
}

impl PaginationController {
    /// Creates a controller over the given source.
    ///
    /// Nothing is fetched until `mount()` or a page-change event.
    pub fn new(source: Arc<dyn PageSource>, page_size: usize) -> Self {
        Self {
            state: TableState::new(page_size),
            loader: AsyncPageLoader::new(),
            source,
        }
    }

    // ===== UI Event Contract =====

    /// Starts the initial fetch of the current page.
    pub fn mount(&mut self) {
        self.fetch_current_page();
    }

    /// Handles a page-change event from the pager.
    ///
    /// The previous page's rows are dropped immediately and a fetch of
    /// the new page starts; any fetch still in flight is abandoned via
    /// the loader's token discipline.
    pub fn on_page_change(&mut self, new_page: usize) {
        tracing::debug!(new_page, "page change");
        self.state.page.navigate_to(new_page);
        self.fetch_current_page();
    }

    /// Handles the UI reporting the full set of currently selected row
    /// ids for the current page.
    ///
    /// The set is projected onto a mask via first-match ordinal lookup
    /// and written through the store's bounds checks. Ids not found in
    /// the current rows (stale events) are dropped by the projection.
    ///
    /// # Errors
    /// Store rejections (e.g. no fetch applied yet, so no pages are
    /// addressable); the selection state is unchanged on error.
    pub fn on_selection_edit(
        &mut self,
        selected_ids: &HashSet<RowId>,
    ) -> Result<(), SelectionError> {
        let mask = derive_mask(self.state.page.rows(), selected_ids);
        self.state
            .selection
            .set_mask(self.state.page.current_page(), mask)
    }

    /// Handles a bulk "select the first `k` rows" submission.
    ///
    /// Non-positive `k` means nothing was requested and is a no-op.
    pub fn on_bulk_select_submit(&mut self, k: i64) {
        if k <= 0 {
            tracing::debug!(k, "ignoring empty bulk selection request");
            return;
        }
        self.state.selection = select_first_k(&self.state.selection, k);
    }

    /// Re-fetches the current page after a failed fetch.
    pub fn retry(&mut self) {
        self.fetch_current_page();
    }

    /// Applies a completed fetch, if one is ready.
    ///
    /// Call once per event-loop turn. Returns true if a fetch result
    /// (success or failure) was applied.
    pub fn poll_fetch(&mut self) -> bool {
        match self.loader.check_completion() {
            PageLoadResult::Success { page, fetch } => {
                // Token discipline guarantees this is the active fetch
                debug_assert_eq!(page, self.state.page.current_page());

                let total = fetch.total_records;
                self.state.page.apply_fetch(fetch.rows, total);
                self.state
                    .selection
                    .ensure_size(total_pages(total, self.state.page.page_size()));
                self.state.error_message = None;

                tracing::debug!(page, total, "applied page fetch");
                true
            }
            PageLoadResult::Error { page, message } => {
                tracing::warn!(page, %message, "page fetch failed");
                self.state.error_message = Some(format!("Error loading page {}: {}", page, message));
                true
            }
            PageLoadResult::None => false,
        }
    }

    // ===== UI Render Contract =====

    /// Returns the rows of the current page's latest applied fetch.
    pub fn rows(&self) -> &[Row] {
        self.state.page.rows()
    }

    /// Returns the currently visible selected rows, for checkbox
    /// rendering. Recomputed on every call, never stored.
    pub fn selected_rows(&self) -> Vec<Row> {
        let mask = self.state.selection.mask(self.state.page.current_page());
        project_selected(self.state.page.rows(), &mask)
    }

    /// Returns the currently viewed page index.
    pub fn current_page(&self) -> usize {
        self.state.page.current_page()
    }

    /// Returns the collection's total record count, if known.
    pub fn total_records(&self) -> Option<usize> {
        self.state.page.total_records()
    }

    /// Returns the collection's page count, or 0 while unknown.
    pub fn total_pages(&self) -> usize {
        self.state.page.total_pages()
    }

    /// Returns true while a fetch for the current page is in flight.
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Returns the retryable error message from the last failed fetch.
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    /// Returns the underlying table state, for inspection.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    fn fetch_current_page(&mut self) {
        self.state.error_message = None;
        self.loader.start_page_load(
            Arc::clone(&self.source),
            self.state.page.current_page(),
            self.state.page.page_size(),
        );
    }
}
