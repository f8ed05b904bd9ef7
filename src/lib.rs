pub mod traits;
pub mod error;
pub mod mask;
pub mod state;
pub mod domain;
pub mod io;
pub mod app;
pub mod virtual_source;

// Export the data-source contract
pub use traits::{PageFetch, PageSource, Row, RowId};

// Export the selection core
pub use error::SelectionError;
pub use mask::SelectionMask;
pub use state::{PageState, SelectionStore};
pub use domain::{derive_mask, project_selected, select_first_k, total_pages};

// Export the async loading layer
pub use io::{AsyncPageLoader, LoadingState, PageLoadResult};

// Export the controller
pub use app::{PaginationController, TableState};

// Export the in-memory source implementation
pub use virtual_source::VirtualPageSource;
