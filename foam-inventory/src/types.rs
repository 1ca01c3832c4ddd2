//! Core data model for the inventory snapshot payload.
//!
//! JSON field names follow the original v2.x endpoint contract
//! (camelCase), since the browser client consumes the payload directly.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One raw sheet row: ordered free-text cells exactly as exported.
///
/// Main sheet columns: name, purchase-status label, remaining, ideal,
/// initial, order-line. Storage sheet columns: name, before-open handling,
/// after-open handling, location, expiry-days, notes.
pub type RawRow = Vec<String>;

/// Schema version tag carried in every snapshot.
pub const SNAPSHOT_VERSION: &str = "2.3";

// ---------------------------------------------------------------------------
// Purchase status
// ---------------------------------------------------------------------------

/// Closed three-state purchase status, derived once from the raw label.
///
/// All downstream logic switches on this enum; nothing re-parses the
/// free-text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Pending,
    InProgress,
    Completed,
}

impl StatusKind {
    /// Total classification of the raw sheet label.
    ///
    /// `未申請` → pending, `仕入れ申請中` → in-progress; `完了` and every
    /// other value (including blank cells) fall to the default branch and
    /// classify as completed. The normalizer logs a warning for labels
    /// outside the three recognized values so data-entry typos are not
    /// silently reported as resolved.
    pub fn from_label(label: &str) -> Self {
        match label {
            "未申請" => StatusKind::Pending,
            "仕入れ申請中" => StatusKind::InProgress,
            _ => StatusKind::Completed,
        }
    }

    /// Sort rank within a category group: the most urgent status first.
    pub fn urgency_rank(self) -> u8 {
        match self {
            StatusKind::Pending => 0,
            StatusKind::InProgress => 1,
            StatusKind::Completed => 2,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Pending => write!(f, "pending"),
            StatusKind::InProgress => write!(f, "in_progress"),
            StatusKind::Completed => write!(f, "completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A normalized inventory item, immutable once built.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    /// Derived from the name by the classifier; `その他` when no rule matches.
    pub category: String,
    pub remaining: f64,
    pub ideal: f64,
    pub initial: f64,
    pub order_line: f64,
    /// Raw status label as given by the sheet.
    pub purchase_status: String,
    pub status_kind: StatusKind,
    /// remaining/ideal as a rounded percentage; 100 when no ideal is set.
    /// Can exceed 100 when overstocked.
    pub stock_ratio: i64,
    /// Counting unit derived from the name (本, 袋, 箱, ...).
    pub unit: String,
}

/// Storage-location metadata from the optional secondary sheet.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRecord {
    pub name: String,
    pub before_open: String,
    pub after_open: String,
    /// Parsed from the sheet but not part of the payload contract.
    #[serde(skip)]
    pub location: String,
    pub expiry_days: String,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Status counts over the full item set.
///
/// Invariant: `total_items = needs_order + in_progress + completed`.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_items: usize,
    pub needs_order: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Reduced shape for the pending-order list.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub name: String,
    pub category: String,
    pub remaining: f64,
    pub order_line: f64,
    /// ideal − remaining; negative when overstocked, never clamped.
    pub shortage: f64,
    pub unit: String,
}

/// Reduced shape for the in-progress list. No shortage field: the gap is
/// not meaningful for items already requested.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InProgressItem {
    pub name: String,
    pub category: String,
    pub remaining: f64,
    pub order_line: f64,
    pub unit: String,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The complete point-in-time inventory payload.
///
/// `items`, `categories`, `order_list`, and `in_progress_list` are
/// independently consumable views of the same item set: every entry in a
/// derived list also appears in `items` with matching fields.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub success: bool,
    /// RFC 3339 build time.
    pub timestamp: String,
    pub version: String,
    pub summary: Summary,
    pub items: Vec<InventoryItem>,
    /// Items grouped by category, each group urgency-ordered.
    pub categories: BTreeMap<String, Vec<InventoryItem>>,
    pub order_list: Vec<OrderListItem>,
    pub in_progress_list: Vec<InProgressItem>,
    pub storage: Vec<StorageRecord>,
}
