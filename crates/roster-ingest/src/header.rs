//! Header location over ragged, human-edited sheets.
//!
//! Registration exports routinely carry preamble rows (titles, notes,
//! banner art) above the real header. The locator re-reads the grid
//! with an increasing row-skip offset and accepts the first offset
//! whose first data record carries a recognizable field name.

use roster_model::{Grid, RawRecord};

use crate::error::{IngestError, Result};

/// Maximum row-skip offset tried while searching for the header row.
pub const MAX_HEADER_OFFSET: usize = 10;

/// Field-name fragments that identify a registration header row.
pub const ROSTER_HEADER_TOKENS: &[&str] = &["兒童姓名", "報名序號", "姓名"];

/// Field-name fragments that identify a worker-roster header row.
pub const ATTENDANCE_HEADER_TOKENS: &[&str] = &["姓名"];

/// A located table: the accepted header offset and the materialized
/// data records.
#[derive(Debug, Clone)]
pub struct LocatedTable {
    /// Row index interpreted as the header row.
    pub header_offset: usize,
    /// One record per non-blank data row, in input order.
    pub records: Vec<RawRecord>,
}

/// Interprets row `offset` as the header and materializes the rows
/// below it into records.
///
/// Blank header cells are skipped; duplicated header labels (a merged
/// source cell split on export) are disambiguated with `_1`, `_2`, …
/// suffixes, matching what the source exporter produces. Entirely
/// blank data rows yield no record.
pub fn materialize_records(grid: &Grid, offset: usize) -> Vec<RawRecord> {
    let Some(header_row) = grid.get(offset) else {
        return Vec::new();
    };

    let mut labels: Vec<Option<String>> = Vec::with_capacity(header_row.len());
    let mut seen: Vec<String> = Vec::new();
    for cell in header_row {
        let label = cell.display();
        if label.trim().is_empty() {
            labels.push(None);
            continue;
        }
        let duplicates = seen.iter().filter(|existing| **existing == label).count();
        seen.push(label.clone());
        if duplicates == 0 {
            labels.push(Some(label));
        } else {
            labels.push(Some(format!("{label}_{duplicates}")));
        }
    }

    let mut records = Vec::new();
    for row in grid.iter().skip(offset + 1) {
        if row.iter().all(roster_model::CellValue::is_blank) {
            continue;
        }
        let mut record = RawRecord::new();
        for (index, cell) in row.iter().enumerate() {
            if cell.is_blank() {
                continue;
            }
            if let Some(Some(label)) = labels.get(index) {
                record.insert(label.clone(), cell.clone());
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    records
}

/// Locates the header row and returns the materialized data records.
///
/// Tries offsets `0..=MAX_HEADER_OFFSET` and accepts the first whose
/// first record has a key containing one of `tokens`. When no offset
/// matches, degrades to offset 0 unconditionally; only a sheet with
/// zero data rows is fatal.
pub fn locate_table(grid: &Grid, tokens: &[&str]) -> Result<LocatedTable> {
    for offset in 0..=MAX_HEADER_OFFSET {
        let records = materialize_records(grid, offset);
        let Some(first) = records.first() else {
            continue;
        };
        let recognized = first
            .keys()
            .any(|key| tokens.iter().any(|token| key.contains(token)));
        if recognized {
            tracing::debug!(offset, rows = records.len(), "located header row");
            return Ok(LocatedTable {
                header_offset: offset,
                records,
            });
        }
    }

    // Header shape unrecognized: treat row 0 as the header rather than
    // failing. An empty sheet is the only fatal condition here.
    let records = materialize_records(grid, 0);
    if records.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    tracing::warn!("no recognizable header row, falling back to offset 0");
    Ok(LocatedTable {
        header_offset: 0,
        records,
    })
}
