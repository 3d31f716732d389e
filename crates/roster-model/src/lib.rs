//! Data model for the registration roster pipeline.
//!
//! Pure types shared by the ingest, transform, and output crates: raw
//! cell grids, row records with header-alias resolution, sibling sets,
//! processed records grouped by grade bucket, and processing options.

pub mod cell;
pub mod field;
pub mod options;
pub mod record;

pub use cell::{CellValue, Grid};
pub use field::{Field, markers};
pub use options::{ProcessOptions, SortBy};
pub use record::{GradeGroups, ProcessedRecord, RawRecord, SiblingSet, split_list};
