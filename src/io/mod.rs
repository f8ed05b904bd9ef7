//! I/O modules for asynchronous page fetching.

pub mod page_loader;

// Re-export commonly used types
pub use page_loader::{AsyncPageLoader, PageLoadResult};

/// Flag describing the fetch in progress, if any.
///
/// A fetch counts as in progress from the moment it starts until its
/// result is surfaced to the caller, not merely until the background
/// thread finishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingState {
    /// Whether a fetch is awaiting application
    pub in_progress: bool,
    /// Token of the fetch the flag refers to
    pub token: u64,
}

impl LoadingState {
    /// Creates a loading state with no fetch in progress.
    pub fn new() -> Self {
        Self::default()
    }
}
