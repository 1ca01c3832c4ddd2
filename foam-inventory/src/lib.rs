//! Café inventory snapshot core.
//!
//! A pure, stateless pipeline: raw sheet rows are normalized into typed
//! inventory items, aggregated into summaries and priority lists, and
//! assembled into a versioned JSON payload. Every snapshot is built fresh
//! from the current sheet contents; nothing is cached here. The HTTP
//! boundary (and any client-side caching) lives in the server crate.
//!
//! Pipeline flow:
//! 1. `sheet` reads a CSV export of the spreadsheet into raw rows
//! 2. `normalizer` converts each row into an `InventoryItem` (or skips it)
//! 3. `classifier` derives category and counting unit from the item name
//! 4. `aggregator` builds summary counts, category groups, priority lists
//! 5. `snapshot` wraps everything into the tagged success/failure payload

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod normalizer;
pub mod sheet;
pub mod snapshot;
pub mod types;

pub use error::SnapshotError;
pub use snapshot::{build_snapshot, ApiResponse};
