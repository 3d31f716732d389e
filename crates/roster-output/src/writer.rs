//! XLSX encoding of laid-out sheets.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::error::{OutputError, Result};
use crate::layout::{CellData, MergeRegion, SheetKind, SheetLayout};
use crate::style::{
    Align, column_widths, data_alignment, header_fill, is_text_column, wants_borders,
};

/// Encodes the sheets into one workbook at `path`.
pub fn write_workbook(path: &Path, sheets: &[SheetLayout]) -> Result<()> {
    if sheets.is_empty() {
        return Err(OutputError::NoSheets);
    }

    let mut workbook = Workbook::new();
    for layout in sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, layout).map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    }

    workbook.save(path).map_err(|source| OutputError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), sheets = sheets.len(), "workbook written");
    Ok(())
}

fn horizontal(format: Format, align: Align) -> Format {
    match align {
        Align::Left => format.set_align(FormatAlign::Left),
        Align::Center => format.set_align(FormatAlign::Center),
        Align::Right => format.set_align(FormatAlign::Right),
    }
}

fn header_format(kind: SheetKind, column: &str) -> Format {
    let mut format = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    if let Some(rgb) = header_fill(kind, column) {
        format = format.set_background_color(Color::RGB(rgb));
    }
    if wants_borders(kind) {
        format = format.set_border(FormatBorder::Thin);
    }
    format
}

fn data_format(kind: SheetKind, column: &str) -> Format {
    let mut format = horizontal(Format::new(), data_alignment(kind, column))
        .set_align(FormatAlign::VerticalCenter);
    if wants_borders(kind) {
        format = format.set_border(FormatBorder::Thin);
    }
    if is_text_column(column) {
        format = format.set_num_format("@");
    }
    format
}

fn region_at(merges: &[MergeRegion], row: u32, col: u16) -> Option<&MergeRegion> {
    merges.iter().find(|region| region.contains(row, col))
}

fn write_sheet(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(&layout.name)?;

    for (col, width) in column_widths(&layout.rows).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let headers = layout.headers();
    for (row_index, row) in layout.rows.iter().enumerate() {
        let row_index = row_index as u32;
        for (col_index, cell) in row.iter().enumerate() {
            let col_index = col_index as u16;
            let column = headers
                .get(usize::from(col_index))
                .map_or("", String::as_str);
            let format = if row_index == 0 {
                header_format(layout.kind, column)
            } else {
                data_format(layout.kind, column)
            };

            // Covered cells are represented by the anchor; the range is
            // declared once and the value written over its first cell.
            if let Some(region) = region_at(&layout.merges, row_index, col_index) {
                if !region.is_anchor(row_index, col_index) {
                    continue;
                }
                worksheet.merge_range(
                    region.first_row,
                    region.first_col,
                    region.last_row,
                    region.last_col,
                    "",
                    &format,
                )?;
            }

            match cell {
                CellData::Text(text) => {
                    worksheet.write_string_with_format(row_index, col_index, text, &format)?;
                }
                CellData::Int(value) => {
                    worksheet.write_number_with_format(
                        row_index,
                        col_index,
                        *value as f64,
                        &format,
                    )?;
                }
                CellData::Formula(formula) => {
                    worksheet.write_formula_with_format(
                        row_index,
                        col_index,
                        formula.as_str(),
                        &format,
                    )?;
                }
            }
        }
    }
    Ok(())
}
