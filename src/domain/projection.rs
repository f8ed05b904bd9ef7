//! Projection between selection masks and visible rows.
//!
//! A page's mask addresses rows by ordinal (position within the most
//! recent fetch). The UI deals in rows and row ids. These two
//! functions translate in each direction and are exact inverses up to
//! truncation of the mask to the fetched row count.

use crate::mask::SelectionMask;
use crate::traits::{Row, RowId};
use std::collections::HashSet;

/// Returns the rows whose ordinal bit is set in the mask.
///
/// Bits at or beyond `rows.len()` are ignored, so the result always
/// holds exactly `mask.truncated(rows.len()).count_ones()` rows.
pub fn project_selected(rows: &[Row], mask: &SelectionMask) -> Vec<Row> {
    rows.iter()
        .enumerate()
        .filter(|(ordinal, _)| mask.is_set(*ordinal))
        .map(|(_, row)| row.clone())
        .collect()
}

/// Builds a mask from the set of row ids the UI reports as selected.
///
/// Each id is resolved to an ordinal by first-match lookup in `rows`.
/// Ids not present in `rows` are silently dropped: they can only come
/// from a stale selection event, and tolerating them keeps the store
/// consistent with what is actually on screen.
pub fn derive_mask(rows: &[Row], selected_ids: &HashSet<RowId>) -> SelectionMask {
    let mut mask = SelectionMask::empty();
    for id in selected_ids {
        if let Some(ordinal) = rows.iter().position(|row| row.id == *id) {
            mask.set(ordinal);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with_ids(ids: &[RowId]) -> Vec<Row> {
        ids.iter().map(|&id| Row::new(id)).collect()
    }

    #[test]
    fn test_project_selected_picks_set_ordinals() {
        let rows = rows_with_ids(&[10, 20, 30, 40]);
        let mut mask = SelectionMask::empty();
        mask.set(0);
        mask.set(2);

        let selected = project_selected(&rows, &mask);
        let ids: Vec<RowId> = selected.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 30]);
    }

    #[test]
    fn test_projection_cardinality() {
        let rows = rows_with_ids(&[10, 20, 30]);

        // Mask wider than the row list: excess bits contribute nothing
        let mask = SelectionMask::low_bits(12);
        let selected = project_selected(&rows, &mask);
        assert_eq!(selected.len(), mask.truncated(rows.len()).count_ones());
        assert_eq!(selected.len(), 3);

        let empty = project_selected(&rows, &SelectionMask::empty());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_derive_mask_first_match_lookup() {
        let rows = rows_with_ids(&[10, 20, 30]);
        let selected: HashSet<RowId> = [30, 10].into_iter().collect();

        let mask = derive_mask(&rows, &selected);
        assert!(mask.is_set(0));
        assert!(!mask.is_set(1));
        assert!(mask.is_set(2));
        assert_eq!(mask.count_ones(), 2);
    }

    #[test]
    fn test_derive_mask_drops_unknown_ids() {
        let rows = rows_with_ids(&[10, 20]);
        let selected: HashSet<RowId> = [20, 999].into_iter().collect();

        let mask = derive_mask(&rows, &selected);
        assert!(mask.is_set(1));
        assert_eq!(mask.count_ones(), 1);
    }

    #[test]
    fn test_derive_mask_duplicate_ids_use_first_occurrence() {
        // Duplicate ids should not occur, but first-match keeps the
        // behavior deterministic if they do
        let rows = rows_with_ids(&[10, 20, 10]);
        let selected: HashSet<RowId> = [10].into_iter().collect();

        let mask = derive_mask(&rows, &selected);
        assert!(mask.is_set(0));
        assert!(!mask.is_set(2));
    }

    #[test]
    fn test_round_trip_law() {
        let rows = rows_with_ids(&[10, 20, 30, 40, 50]);

        for width in [0usize, 1, 3, 5, 9] {
            let mask = SelectionMask::low_bits(width);
            let selected = project_selected(&rows, &mask);
            let ids: HashSet<RowId> = selected.iter().map(|r| r.id).collect();
            assert_eq!(
                derive_mask(&rows, &ids),
                mask.truncated(rows.len()),
                "round trip failed for width {}",
                width
            );
        }

        // Scattered bits, including one beyond the row count
        let mut mask = SelectionMask::empty();
        mask.set(1);
        mask.set(4);
        mask.set(9);
        let selected = project_selected(&rows, &mask);
        let ids: HashSet<RowId> = selected.iter().map(|r| r.id).collect();
        assert_eq!(derive_mask(&rows, &ids), mask.truncated(rows.len()));
    }
}
