//! Asynchronous page fetching.
//!
//! This module fetches pages from a `PageSource` on background
//! threads, keeping the event loop responsive while a page is in
//! flight. Every fetch is tagged with a monotonically increasing
//! request token; results whose token is no longer current are
//! discarded, so navigating away from a page before its fetch resolves
//! can never apply stale rows to the wrong page.

use crate::io::LoadingState;
use crate::traits::{PageFetch, PageSource};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Result of a completed page fetch.
#[derive(Debug)]
pub enum PageLoadResult {
    /// Fetch completed successfully
    Success {
        /// The page that was fetched
        page: usize,
        /// The rows and collection total the source returned
        fetch: PageFetch,
    },
    /// Fetch failed with an error
    Error {
        /// The page whose fetch failed
        page: usize,
        /// Human-readable failure description
        message: String,
    },
    /// No result available (still loading or no fetch active)
    None,
}

type FetchMessage = (u64, usize, Result<PageFetch, String>);

/// Manages asynchronous fetching of pages from a data source.
///
/// This struct coordinates background-thread fetching with the single
/// event-loop thread that owns the selection state. Call
/// `check_completion()` regularly (e.g., once per event-loop turn) to
/// collect results; stale results are dropped internally.
pub struct AsyncPageLoader {
    /// Loading state flag; true from fetch start until the result is
    /// surfaced by `check_completion`
    loading_state: LoadingState,

    /// Channel for receiving fetch results from worker threads
    sender: Sender<FetchMessage>,
    receiver: Receiver<FetchMessage>,

    /// Token of the most recently started fetch; only results carrying
    /// this token are ever surfaced
    active_token: u64,
}

impl AsyncPageLoader {
    /// Creates a new loader with no active fetch.
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            loading_state: LoadingState::new(),
            sender,
            receiver,
            active_token: 0,
        }
    }

    /// Checks if a fetch is currently in progress.
    ///
    /// Stays true while a completed result is still waiting to be
    /// collected by `check_completion`, so a UI polling once per turn
    /// shows its loading indicator until the rows are actually applied.
    pub fn is_loading(&self) -> bool {
        self.loading_state.in_progress && self.loading_state.token == self.active_token
    }

    /// Starts fetching a page on a background thread.
    ///
    /// Any fetch already in flight is implicitly abandoned: its result
    /// will carry a stale token and be dropped by `check_completion`.
    ///
    /// # Arguments
    /// * `source` - The data source to fetch from
    /// * `page` - 0-based page index to fetch
    /// * `page_size` - Rows per page, fixed by the caller
    ///
    /// # Returns
    /// The token assigned to this fetch.
    pub fn start_page_load(
        &mut self,
        source: Arc<dyn PageSource>,
        page: usize,
        page_size: usize,
    ) -> u64 {
        self.active_token += 1;
        let token = self.active_token;

        self.loading_state.in_progress = true;
        self.loading_state.token = token;

        tracing::debug!(page, token, "starting page fetch");

        let sender = self.sender.clone();

        // Spawn background thread for the fetch
        thread::spawn(move || {
            let result = source
                .fetch_page(page, page_size)
                .map_err(|e| e.to_string());

            // Send result through channel; the loader may be gone
            let _ = sender.send((token, page, result));
        });

        token
    }

    /// Checks whether a fetch has completed and returns its result.
    ///
    /// Results from superseded fetches (stale tokens) are discarded
    /// here rather than surfaced.
    ///
    /// # Returns
    /// * `PageLoadResult::Success` - The active fetch completed
    /// * `PageLoadResult::Error` - The active fetch failed
    /// * `PageLoadResult::None` - Nothing to apply yet
    pub fn check_completion(&mut self) -> PageLoadResult {
        while let Ok((token, page, result)) = self.receiver.try_recv() {
            if token != self.active_token {
                tracing::debug!(page, token, "dropping stale page fetch result");
                continue;
            }

            // The active fetch is no longer in flight once its result
            // is handed to the caller
            self.loading_state.in_progress = false;

            return match result {
                Ok(fetch) => PageLoadResult::Success { page, fetch },
                Err(message) => PageLoadResult::Error { page, message },
            };
        }

        PageLoadResult::None
    }
}

impl Default for AsyncPageLoader {
    fn default() -> Self {
        Self::new()
    }
}
