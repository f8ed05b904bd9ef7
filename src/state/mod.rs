//! State components for the lazy-pagination selection core.
//!
//! This module contains state-only logic (no fetching or rendering
//! concerns):
//! - Selection store (per-page selection masks)
//! - Page state (current page, fetched rows, record totals)

mod page_state;
mod selection_store;

pub use page_state::PageState;
pub use selection_store::SelectionStore;
