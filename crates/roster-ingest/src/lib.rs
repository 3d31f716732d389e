//! Workbook ingestion for the registration roster pipeline.
//!
//! This crate turns an uploaded spreadsheet into a batch of normalized
//! row records:
//!
//! - **Grid extraction**: decode the first worksheet into a row-major
//!   cell grid
//! - **Header location**: find the real header row under preamble rows
//! - **Field normalization**: clean header labels and correct known
//!   merged-cell corruptions
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{ROSTER_HEADER_TOKENS, load_grid, locate_table, normalize_batch};
//!
//! let grid = load_grid(Path::new("registrations.xlsx"))?;
//! let table = locate_table(&grid, ROSTER_HEADER_TOKENS)?;
//! let records = normalize_batch(&table.records);
//! ```

mod error;
mod header;
mod normalize;
mod workbook;

pub use error::{IngestError, Result};
pub use header::{
    ATTENDANCE_HEADER_TOKENS, LocatedTable, MAX_HEADER_OFFSET, ROSTER_HEADER_TOKENS, locate_table,
    materialize_records,
};
pub use normalize::{clean_field_name, normalize_batch, normalize_record};
pub use workbook::load_grid;
