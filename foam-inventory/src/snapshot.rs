//! Snapshot assembly: the single entry point the boundary calls.
//!
//! `build_snapshot` is infallible once the sheet rows are in hand; the
//! only fatal class is a whole-source read failure, which the boundary
//! converts into the tagged error payload via [`ApiResponse::from`]. The
//! boundary always returns one of the two payload shapes, never a panic.

use std::error::Error as _;

use chrono::Utc;
use serde::Serialize;

use crate::aggregator::{build_priority_lists, group_by_category, summarize};
use crate::classifier::Classifier;
use crate::error::SnapshotError;
use crate::normalizer::{normalize_row, normalize_storage_row};
use crate::types::{InventorySnapshot, RawRow, SNAPSHOT_VERSION};

/// Build a fresh snapshot from the two sheet exports. Pass an empty slice
/// for `storage_rows` when the storage sheet is absent; absence is not an
/// error.
pub fn build_snapshot(main_rows: &[RawRow], storage_rows: &[RawRow]) -> InventorySnapshot {
    let classifier = Classifier::default();

    // Row 0 carries the column captions on both sheets.
    let items: Vec<_> = main_rows
        .iter()
        .skip(1)
        .filter_map(|row| normalize_row(row, &classifier))
        .collect();
    let storage: Vec<_> = storage_rows
        .iter()
        .skip(1)
        .filter_map(normalize_storage_row)
        .collect();

    let summary = summarize(&items);
    let categories = group_by_category(&items);
    let (order_list, in_progress_list) = build_priority_lists(&items);

    InventorySnapshot {
        success: true,
        timestamp: Utc::now().to_rfc3339(),
        version: SNAPSHOT_VERSION.to_string(),
        summary,
        items,
        categories,
        order_list,
        in_progress_list,
        storage,
    }
}

/// Failure payload: message plus optional diagnostic detail.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: String,
}

/// The tagged payload crossing the system boundary: either a full
/// snapshot (`success: true`) or an error body (`success: false`).
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Snapshot(InventorySnapshot),
    Error(ErrorBody),
}

impl From<Result<InventorySnapshot, SnapshotError>> for ApiResponse {
    fn from(result: Result<InventorySnapshot, SnapshotError>) -> Self {
        match result {
            Ok(snapshot) => ApiResponse::Snapshot(snapshot),
            Err(err) => ApiResponse::Error(ErrorBody {
                success: false,
                error: err.to_string(),
                detail: err.source().map(|source| source.to_string()),
                timestamp: Utc::now().to_rfc3339(),
            }),
        }
    }
}
