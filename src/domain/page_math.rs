//! Page arithmetic for fixed-size pagination.
//!
//! These functions are stateless and shared by the store sizing,
//! the bulk selector, and the virtual source.

/// Returns the number of pages needed to hold `total_records` rows.
///
/// # Arguments
/// * `total_records` - Total rows in the collection
/// * `page_size` - Rows per page; must be positive
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(page_size)
}

/// Returns how many rows the given page holds.
///
/// Full pages hold `page_size` rows; the final page holds the
/// remainder; pages past the end hold zero.
pub fn rows_on_page(page: usize, total_records: usize, page_size: usize) -> usize {
    let start = page.saturating_mul(page_size);
    total_records.saturating_sub(start).min(page_size)
}
