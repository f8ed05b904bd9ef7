//! Per-page selection mask storage.
//!
//! This module encapsulates the sparse page-to-mask mapping that backs
//! row selection across a lazily fetched collection. Pages with no
//! stored mask read as "nothing selected."

use crate::error::SelectionError;
use crate::mask::SelectionMask;
use std::collections::HashMap;

/// Sparse mapping from page index to that page's selection mask.
///
/// Responsibilities:
/// - Tracking which ordinals are selected on each page
/// - Bounds-checking mutations against the page size and page count
/// - Rejecting invalid operations without mutating any state
///
/// The store is sized lazily: it starts with zero addressable pages and
/// grows via `ensure_size` once the collection's total is known.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStore {
    /// Number of rows per page; fixes the valid ordinal range
    page_size: usize,
    /// Number of addressable pages (grown as totals become known)
    total_pages: usize,
    /// Masks for pages with at least one selected ordinal
    masks: HashMap<usize, SelectionMask>,
}

impl SelectionStore {
    /// Creates an empty store for the given page size.
    ///
    /// No pages are addressable until `ensure_size` is called.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            page_size,
            total_pages: 0,
            masks: HashMap::new(),
        }
    }

    /// Grows the addressable page count to at least `total_pages`.
    ///
    /// Idempotent; never shrinks. Masks already stored are unaffected.
    pub fn ensure_size(&mut self, total_pages: usize) {
        self.total_pages = self.total_pages.max(total_pages);
    }

    // ===== Queries =====

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of addressable pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the mask for a page, or the empty mask if none is stored.
    ///
    /// Never fails, even for pages beyond the known page count.
    pub fn mask(&self, page: usize) -> SelectionMask {
        self.masks.get(&page).cloned().unwrap_or_default()
    }

    /// Returns true if the given ordinal on the given page is selected.
    pub fn is_selected(&self, page: usize, ordinal: usize) -> bool {
        self.masks
            .get(&page)
            .map(|m| m.is_set(ordinal))
            .unwrap_or(false)
    }

    /// Returns the total number of selected ordinals across all pages.
    pub fn selected_count(&self) -> usize {
        self.masks.values().map(|m| m.count_ones()).sum()
    }

    // ===== Mutations =====

    /// Replaces a page's mask.
    ///
    /// # Errors
    /// * `PageOutOfBounds` if `page` is at or beyond the known page count
    /// * `MaskTooWide` if the mask sets bits at or beyond the page size
    ///
    /// On error the store is unchanged.
    pub fn set_mask(&mut self, page: usize, mask: SelectionMask) -> Result<(), SelectionError> {
        self.check_page(page)?;
        if mask.width() > self.page_size {
            return Err(SelectionError::MaskTooWide {
                width: mask.width(),
                page_size: self.page_size,
            });
        }
        self.replace_mask(page, mask);
        Ok(())
    }

    /// Flips a single ordinal's bit on a page.
    ///
    /// # Errors
    /// * `PageOutOfBounds` if `page` is at or beyond the known page count
    /// * `OrdinalOutOfBounds` if `ordinal` is not within [0, page_size)
    pub fn toggle_ordinal(&mut self, page: usize, ordinal: usize) -> Result<(), SelectionError> {
        self.check_page(page)?;
        if ordinal >= self.page_size {
            return Err(SelectionError::OrdinalOutOfBounds {
                ordinal,
                page_size: self.page_size,
            });
        }
        let mut mask = self.mask(page);
        mask.toggle(ordinal);
        self.replace_mask(page, mask);
        Ok(())
    }

    /// Replaces a page's mask without bounds checks.
    ///
    /// Callers must have validated `page` and the mask width already.
    pub(crate) fn replace_mask(&mut self, page: usize, mask: SelectionMask) {
        // Empty masks are stored as absence so equality stays canonical
        if mask.is_empty() {
            self.masks.remove(&page);
        } else {
            self.masks.insert(page, mask);
        }
    }

    fn check_page(&self, page: usize) -> Result<(), SelectionError> {
        if page >= self.total_pages {
            return Err(SelectionError::PageOutOfBounds {
                page,
                total_pages: self.total_pages,
            });
        }
        Ok(())
    }
}
