use serde::{Deserialize, Serialize};

/// Type alias for row IDs (stable identifiers assigned by the data source)
pub type RowId = u64;

/// A single row returned by the data source.
///
/// The `id` is stable for a given backing dataset snapshot. The row's
/// position within its page (its ordinal) is ephemeral: it is only
/// meaningful relative to the most recent fetch of that page and is not
/// guaranteed to survive a refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identifier from the data source
    pub id: RowId,
    /// Display attributes keyed by column name, in source order
    #[serde(default)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl Row {
    /// Creates a row with an id and no attributes.
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            attrs: serde_json::Map::new(),
        }
    }

    /// Creates a row with an id and the given attribute map.
    pub fn with_attrs(id: RowId, attrs: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { id, attrs }
    }

    /// Gets an attribute value by column name.
    pub fn attr(&self, key: &str) -> Option<&serde_json::Value> {
        self.attrs.get(key)
    }
}

/// Result of fetching one page from a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFetch {
    /// Rows of the requested page, in the source's stable order
    pub rows: Vec<Row>,
    /// Total number of records in the whole collection
    pub total_records: usize,
}

/// Trait for paged data sources.
///
/// The caller fixes `page_size`; the source must return rows in a
/// stable, deterministic order for a given (page, dataset snapshot).
/// Implementations must be Send + Sync to support fetching from a
/// background thread.
pub trait PageSource: Send + Sync {
    /// Fetches one page of rows along with the collection's total record count.
    ///
    /// # Arguments
    /// * `page` - 0-based page index
    /// * `page_size` - Number of rows per page, fixed by the caller
    fn fetch_page(&self, page: usize, page_size: usize) -> anyhow::Result<PageFetch>;
}
