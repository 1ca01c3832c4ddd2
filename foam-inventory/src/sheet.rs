//! CSV sheet loader.
//!
//! The spreadsheet is consumed as a CSV export. Cells stay untyped text
//! here: the normalizer owns all coercion, so the loader only fails when
//! the source itself is unreadable. That is the one fatal error class;
//! everything below it is a skip or a coercion.

use std::io::Read;

use crate::error::{SnapshotError, SnapshotResult};
use crate::types::RawRow;

/// Read every row of a sheet export, header row included (row 0 is
/// skipped downstream, not here).
pub fn load_sheet<R: Read>(reader: R) -> SnapshotResult<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        // Human-maintained sheets export ragged rows; short rows read as
        // blank cells downstream.
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Load a sheet export from a file path.
pub fn load_sheet_file(path: &str) -> SnapshotResult<Vec<RawRow>> {
    let file = std::fs::File::open(path).map_err(|source| SnapshotError::Source {
        path: path.to_string(),
        source,
    })?;
    load_sheet(file)
}
