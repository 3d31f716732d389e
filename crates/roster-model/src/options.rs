//! Configuration options for batch processing.

use serde::{Deserialize, Serialize};

/// Sort order for the all-students summary sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    /// Numeric registration number; unparseable values sort as zero.
    #[default]
    RegistrationNumber,
    /// Position in the cleaned input, before filtering.
    OriginalIndex,
}

/// Options controlling filtering and summary ordering.
///
/// Filtering runs before grade bucketing and before group-local index
/// assignment, so suppressed rows never occupy a slot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Drop rows whose registration number contains the 取消 marker.
    pub hide_cancelled: bool,
    /// Drop rows whose registration number is blank or the 無 marker.
    pub hide_no_number: bool,
    /// Summary sheet ordering.
    pub sort_by: SortBy,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hide_cancelled(mut self, enable: bool) -> Self {
        self.hide_cancelled = enable;
        self
    }

    pub fn with_hide_no_number(mut self, enable: bool) -> Self {
        self.hide_no_number = enable;
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}
