//! Bulk range selection: "select the first K items overall."
//!
//! A single numeric request is expanded into per-page mask updates,
//! spanning pages whether or not they have ever been fetched. The
//! expansion is a pure function over a store snapshot, so it can be
//! tested and replayed without any UI or fetch machinery.

use crate::mask::SelectionMask;
use crate::state::SelectionStore;

/// Expands "select the first `k` items" into per-page mask updates.
///
/// Consumption starts at page 0 regardless of which page is currently
/// displayed. Each touched page's mask is overwritten with the low
/// `min(k remaining, page_size)` bits; pages past the point where `k`
/// is exhausted keep whatever masks they already had (bulk selection
/// composes with prior manual selections instead of resetting them).
///
/// Degenerate requests are no-ops, not errors: `k <= 0` means nothing
/// was requested, and `k` beyond the collection's total simply selects
/// every addressable page.
pub fn select_first_k(store: &SelectionStore, k: i64) -> SelectionStore {
    let mut out = store.clone();
    if k <= 0 {
        return out;
    }

    let page_size = store.page_size();
    let mut remaining = k as usize;
    let mut page = 0;
    while remaining > 0 && page < store.total_pages() {
        let take = remaining.min(page_size);
        // Bounds hold by construction: page < total_pages, take <= page_size
        out.replace_mask(page, SelectionMask::low_bits(take));
        remaining -= take;
        page += 1;
    }

    tracing::debug!(k, pages_touched = page, "expanded bulk range selection");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_store(page_size: usize, total_pages: usize) -> SelectionStore {
        let mut store = SelectionStore::new(page_size);
        store.ensure_size(total_pages);
        store
    }

    #[test]
    fn test_small_count_stays_on_first_page() {
        let store = select_first_k(&sized_store(12, 3), 5);

        assert_eq!(store.mask(0), SelectionMask::low_bits(5));
        assert_eq!(store.mask(0).count_ones(), 5);
        assert_eq!(store.mask(1), SelectionMask::empty());
        assert_eq!(store.mask(2), SelectionMask::empty());
    }

    #[test]
    fn test_count_spanning_pages() {
        let store = select_first_k(&sized_store(12, 3), 15);

        assert_eq!(store.mask(0), SelectionMask::low_bits(12));
        assert_eq!(store.mask(1), SelectionMask::low_bits(3));
        assert_eq!(store.mask(2), SelectionMask::empty());
    }

    #[test]
    fn test_untouched_pages_keep_prior_selection() {
        let mut store = sized_store(12, 3);
        store.toggle_ordinal(2, 0).unwrap();

        let store = select_first_k(&store, 12);

        assert_eq!(store.mask(0), SelectionMask::low_bits(12));
        assert_eq!(store.mask(1), SelectionMask::empty());
        // Page 2 is outside the touched range and stays as it was
        assert!(store.is_selected(2, 0));
        assert_eq!(store.mask(2).count_ones(), 1);
    }

    #[test]
    fn test_touched_pages_are_overwritten() {
        let mut store = sized_store(12, 3);
        store.toggle_ordinal(0, 11).unwrap();

        let store = select_first_k(&store, 5);

        // Bulk selection is authoritative for pages it touches
        assert_eq!(store.mask(0), SelectionMask::low_bits(5));
        assert!(!store.is_selected(0, 11));
    }

    #[test]
    fn test_nonpositive_count_is_a_noop() {
        let mut store = sized_store(12, 3);
        store.toggle_ordinal(1, 4).unwrap();

        assert_eq!(select_first_k(&store, 0), store);
        assert_eq!(select_first_k(&store, -7), store);
    }

    #[test]
    fn test_count_beyond_collection_selects_everything() {
        let store = select_first_k(&sized_store(12, 3), 1_000);

        for page in 0..3 {
            assert_eq!(store.mask(page), SelectionMask::low_bits(12));
        }
        assert_eq!(store.selected_count(), 36);
    }

    #[test]
    fn test_empty_store_is_unaffected() {
        // Total still unknown: no pages addressable, nothing to touch
        let store = SelectionStore::new(12);
        assert_eq!(select_first_k(&store, 25), store);
    }

    #[test]
    fn test_wide_pages_select_without_truncation() {
        let store = select_first_k(&sized_store(100, 2), 150);

        assert_eq!(store.mask(0), SelectionMask::low_bits(100));
        assert_eq!(store.mask(1), SelectionMask::low_bits(50));
        assert_eq!(store.selected_count(), 150);
    }
}
