//! Sheet layout structures handed to the XLSX writer.

/// One laid-out cell. Formulas are static strings written into the
/// cell, never evaluated here.
#[derive(Debug, Clone, PartialEq)]
pub enum CellData {
    Text(String),
    Int(i64),
    Formula(String),
}

impl CellData {
    /// Display string used for width calculation. Formula results are
    /// unknown at layout time and count as empty.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Formula(_) => String::new(),
        }
    }
}

impl From<&str> for CellData {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellData {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<usize> for CellData {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

/// Inclusive row/column span of visually coalesced cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRegion {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergeRegion {
    /// Single-column vertical span.
    pub fn column(col: u16, first_row: u32, last_row: u32) -> Self {
        Self {
            first_row,
            first_col: col,
            last_row,
            last_col: col,
        }
    }

    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn is_anchor(&self, row: u32, col: u16) -> bool {
        self.first_row == row && self.first_col == col
    }
}

/// Which styling policy a sheet follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Sibling roster sheets and their summary.
    Roster,
    /// Team-divider sheets and their summary.
    Team,
    /// Team statistics sheet.
    TeamStats,
    /// Worker attendance sheet.
    Attendance,
}

/// One sheet ready for encoding: row 0 is the header row.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub name: String,
    pub kind: SheetKind,
    pub rows: Vec<Vec<CellData>>,
    pub merges: Vec<MergeRegion>,
}

impl SheetLayout {
    pub fn new(name: &str, kind: SheetKind) -> Self {
        Self {
            name: sheet_name(name),
            kind,
            rows: Vec::new(),
            merges: Vec::new(),
        }
    }

    /// Header labels, used by the styling policy.
    pub fn headers(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.iter().map(CellData::display).collect())
            .unwrap_or_default()
    }

    /// Number of data rows below the header.
    pub fn data_rows(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Worksheet names are capped at 31 characters by the file format.
pub fn sheet_name(label: &str) -> String {
    label.chars().take(31).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_truncated_by_characters() {
        let long = "年".repeat(40);
        assert_eq!(sheet_name(&long).chars().count(), 31);
        assert_eq!(sheet_name("三年級"), "三年級");
    }

    #[test]
    fn merge_region_membership() {
        let region = MergeRegion::column(2, 1, 3);
        assert!(region.contains(1, 2));
        assert!(region.contains(3, 2));
        assert!(!region.contains(4, 2));
        assert!(!region.contains(1, 3));
        assert!(region.is_anchor(1, 2));
        assert!(!region.is_anchor(2, 2));
    }

    #[test]
    fn formula_cells_have_no_display_width() {
        assert_eq!(CellData::Formula("SUM(A1:A2)".to_string()).display(), "");
        assert_eq!(CellData::Int(45).display(), "45");
    }
}
