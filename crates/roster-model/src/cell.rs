//! Cell values as read off an input worksheet.

use serde::{Deserialize, Serialize};

/// A single worksheet cell, already coerced to the three shapes the
/// pipeline cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Returns the display string for this cell.
    ///
    /// Whole numbers print without a decimal point so numeric phone and
    /// registration-number cells stringify as plain digit runs.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            Self::Empty => String::new(),
        }
    }

    /// Returns true when the cell holds no value or only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
            Self::Empty => true,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Row-major grid of raw cells, one per worksheet.
pub type Grid = Vec<Vec<CellValue>>;
