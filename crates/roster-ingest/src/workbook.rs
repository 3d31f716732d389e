//! Workbook decoding into a raw cell grid.
//!
//! The first worksheet is the registration export; later sheets in the
//! source files are pivot tables and are ignored.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use roster_model::{CellValue, Grid};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of a workbook into a row-major grid.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let metadata = std::fs::metadata(path);
    if matches!(&metadata, Err(e) if e.kind() == std::io::ErrorKind::NotFound) {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let grid: Grid = range
        .rows()
        .map(|row| row.iter().map(coerce_cell).collect())
        .collect();

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = grid.len(),
        "loaded worksheet grid"
    );

    Ok(grid)
}

/// Coerces a decoded cell onto the three-valued model the pipeline uses.
fn coerce_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let result = load_grid(Path::new("/nonexistent/roster.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn cell_coercion() {
        assert_eq!(coerce_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            coerce_cell(&Data::String("王小明".to_string())),
            CellValue::Text("王小明".to_string())
        );
        assert_eq!(coerce_cell(&Data::Int(45)), CellValue::Number(45.0));
    }

    #[test]
    fn round_trips_a_written_workbook() {
        use rust_xlsxwriter::Workbook;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "報名序號").unwrap();
        sheet.write_string(0, 1, "兒童姓名").unwrap();
        sheet.write_number(1, 0, 45.0).unwrap();
        sheet.write_string(1, 1, "王小明").unwrap();
        workbook.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][1], CellValue::Text("兒童姓名".to_string()));
        assert_eq!(grid[1][0].display(), "45");
    }
}
