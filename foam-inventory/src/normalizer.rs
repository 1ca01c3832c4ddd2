//! Row normalization: one raw sheet row in, one typed record out.
//!
//! Normalization is total. A row either yields a fully populated item or
//! a skip (blank or header-like name); it never fails. Numeric cells
//! coerce to 0.0 when unparseable and unknown status labels coerce to
//! completed, so per-row data-entry problems cannot take down a snapshot.

use tracing::warn;

use crate::classifier::Classifier;
use crate::types::{InventoryItem, RawRow, StatusKind, StorageRecord};

/// Rows whose name cell repeats the column caption are header rows.
const HEADER_TOKEN: &str = "仕入れ品";

// Main sheet column layout.
const COL_NAME: usize = 0;
const COL_STATUS: usize = 1;
const COL_REMAINING: usize = 2;
const COL_IDEAL: usize = 3;
const COL_INITIAL: usize = 4;
const COL_ORDER_LINE: usize = 5;

// Storage sheet column layout.
const COL_BEFORE_OPEN: usize = 1;
const COL_AFTER_OPEN: usize = 2;
const COL_LOCATION: usize = 3;
const COL_EXPIRY: usize = 4;
const COL_NOTES: usize = 5;

/// Missing cells (short rows) read as empty text.
fn cell(row: &RawRow, idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Tolerant numeric parse: the longest leading numeric prefix of the
/// trimmed cell, or 0.0 when there is none. `"12個"` parses as 12.0;
/// blanks and garbage parse as 0.0. Never fails.
pub fn parse_number(cell: &str) -> f64 {
    let s = cell.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        let numeric = match ch {
            '+' | '-' => i == 0,
            '.' => !seen_dot,
            _ => ch.is_ascii_digit(),
        };
        if !numeric {
            break;
        }
        if ch == '.' {
            seen_dot = true;
        }
        end = i + ch.len_utf8();
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Convert one main-sheet row into an [`InventoryItem`].
///
/// Returns `None` (skip, not an error) for rows with an empty or
/// header-like name.
pub fn normalize_row(row: &RawRow, classifier: &Classifier) -> Option<InventoryItem> {
    let name = cell(row, COL_NAME).trim();
    if name.is_empty() || name.contains(HEADER_TOKEN) {
        return None;
    }

    let purchase_status = cell(row, COL_STATUS).trim().to_string();
    let status_kind = StatusKind::from_label(&purchase_status);
    if status_kind == StatusKind::Completed
        && !purchase_status.is_empty()
        && purchase_status != "完了"
    {
        // Default-branch coercion: a typo'd label would otherwise be
        // reported as resolved without a trace.
        warn!(
            item = name,
            status = %purchase_status,
            "unrecognized purchase status label, counting as completed"
        );
    }

    let remaining = parse_number(cell(row, COL_REMAINING));
    let ideal = parse_number(cell(row, COL_IDEAL));
    let initial = parse_number(cell(row, COL_INITIAL));
    let order_line = parse_number(cell(row, COL_ORDER_LINE));

    // No ideal set means "no target": report fully stocked rather than
    // divide by zero or signal a false shortage.
    let stock_ratio = if ideal > 0.0 {
        (remaining / ideal * 100.0).round() as i64
    } else {
        100
    };

    Some(InventoryItem {
        name: name.to_string(),
        category: classifier.categorize(name).to_string(),
        remaining,
        ideal,
        initial,
        order_line,
        purchase_status,
        status_kind,
        stock_ratio,
        unit: classifier.infer_unit(name).to_string(),
    })
}

/// Convert one storage-sheet row into a [`StorageRecord`]. Rows with an
/// empty name are skipped.
pub fn normalize_storage_row(row: &RawRow) -> Option<StorageRecord> {
    let name = cell(row, COL_NAME).trim();
    if name.is_empty() {
        return None;
    }
    Some(StorageRecord {
        name: name.to_string(),
        before_open: cell(row, COL_BEFORE_OPEN).trim().to_string(),
        after_open: cell(row, COL_AFTER_OPEN).trim().to_string(),
        location: cell(row, COL_LOCATION).trim().to_string(),
        expiry_days: cell(row, COL_EXPIRY).trim().to_string(),
        notes: cell(row, COL_NOTES).trim().to_string(),
    })
}
