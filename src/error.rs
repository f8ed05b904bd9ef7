//! Error taxonomy for selection-store mutations.
//!
//! All of these are local, synchronous rejections: the offending
//! operation is a no-op and the store is left in its prior state.

use thiserror::Error;

/// Errors raised by bounds-checked selection-store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// An ordinal outside [0, page_size) was addressed.
    #[error("ordinal {ordinal} is out of range for page size {page_size}")]
    OrdinalOutOfBounds { ordinal: usize, page_size: usize },

    /// A page index at or beyond the known page count was addressed.
    #[error("page {page} is out of range for {total_pages} known pages")]
    PageOutOfBounds { page: usize, total_pages: usize },

    /// A supplied mask sets bits at or beyond the page size.
    #[error("mask spans {width} bits, which exceeds page size {page_size}")]
    MaskTooWide { width: usize, page_size: usize },
}
