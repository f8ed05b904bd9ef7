//! Pure transformation functions over selection state.
//!
//! These functions are stateless and can be tested without any
//! fetching or rendering harness:
//! - Page math (record totals to page counts)
//! - Projection (mask to visible rows, reported rows to mask)
//! - Bulk range expansion ("select the first K items overall")

mod bulk;
mod page_math;
mod projection;

pub use bulk::select_first_k;
pub use page_math::{rows_on_page, total_pages};
pub use projection::{derive_mask, project_selected};
