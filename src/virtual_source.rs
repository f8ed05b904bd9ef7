//! Deterministic in-memory page source.
//!
//! Generates a fixed catalogue of artwork-like records from a seeded
//! RNG, so demos and tests can exercise the full fetch/selection loop
//! without a network. The same seed always produces the same dataset,
//! and rows come back in the same order on every fetch of a page,
//! matching the data-source contract.

use crate::domain::rows_on_page;
use crate::traits::{PageFetch, PageSource, Row, RowId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

const DEFAULT_TOTAL_RECORDS: usize = 120;
const DEFAULT_SEED: u64 = 42; // Default seed for reproducibility

const SUBJECTS: &[&str] = &[
    "the Harbor",
    "a Garden",
    "the Procession",
    "a Bridge",
    "the Riverbank",
    "an Orchard",
    "the Cathedral",
    "a Dancer",
];

const KINDS: &[&str] = &[
    "Study of",
    "Composition with",
    "Portrait near",
    "Landscape at",
    "Still Life before",
    "Sketch of",
];

const PLACES: &[&str] = &[
    "France",
    "Japan",
    "Netherlands",
    "Italy",
    "United States",
    "Egypt",
    "Peru",
];

const ARTISTS: &[&str] = &[
    "Utagawa Hiroshige",
    "Claude Monet",
    "Rembrandt van Rijn",
    "Mary Cassatt",
    "Katsushika Hokusai",
    "Unknown artist",
];

/// In-memory `PageSource` over a seeded synthetic catalogue.
pub struct VirtualPageSource {
    records: Vec<Row>,
}

impl VirtualPageSource {
    /// Creates a source with the default catalogue size and seed.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_TOTAL_RECORDS, DEFAULT_SEED)
    }

    /// Creates a source with a specific catalogue size and seed.
    pub fn with_config(total_records: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = Vec::with_capacity(total_records);
        let mut next_id: RowId = 10_000;

        for _ in 0..total_records {
            // Sparse increasing ids, like a real catalogue's
            next_id += rng.gen_range(1..=9);
            records.push(generate_row(&mut rng, next_id));
        }

        Self { records }
    }

    /// Returns the size of the generated catalogue.
    pub fn total_records(&self) -> usize {
        self.records.len()
    }
}

impl Default for VirtualPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for VirtualPageSource {
    fn fetch_page(&self, page: usize, page_size: usize) -> anyhow::Result<PageFetch> {
        let count = rows_on_page(page, self.records.len(), page_size);
        let start = page.saturating_mul(page_size).min(self.records.len());

        Ok(PageFetch {
            rows: self.records[start..start + count].to_vec(),
            total_records: self.records.len(),
        })
    }
}

fn generate_row(rng: &mut StdRng, id: RowId) -> Row {
    let title = format!(
        "{} {}",
        KINDS[rng.gen_range(0..KINDS.len())],
        SUBJECTS[rng.gen_range(0..SUBJECTS.len())]
    );
    let date_start = rng.gen_range(1400..1900);
    let date_end = date_start + rng.gen_range(0..=50);

    let mut attrs = serde_json::Map::new();
    attrs.insert("title".to_string(), Value::String(title));
    attrs.insert(
        "place_of_origin".to_string(),
        Value::String(PLACES[rng.gen_range(0..PLACES.len())].to_string()),
    );
    attrs.insert(
        "artist_display".to_string(),
        Value::String(ARTISTS[rng.gen_range(0..ARTISTS.len())].to_string()),
    );
    attrs.insert(
        "inscriptions".to_string(),
        if rng.gen_bool(1.0 / 3.0) {
            Value::String("signed lower right".to_string())
        } else {
            Value::Null
        },
    );
    attrs.insert("date_start".to_string(), Value::from(date_start));
    attrs.insert("date_end".to_string(), Value::from(date_end));

    Row::with_attrs(id, attrs)
}
