//! Styling policy: column widths, alignment, and header fills.
//!
//! Widths are estimated from display strings because the file format
//! has no auto-fit: CJK and full-width glyphs render roughly twice as
//! wide as ASCII in the default font.

use crate::layout::{CellData, SheetKind};

/// Header fill colors, RGB.
pub const FILL_HEADER: u32 = 0x00FD_E49A;
pub const FILL_TEAM: u32 = 0x00D1_F1DA;
pub const FILL_REGISTRATION: u32 = 0x00D0_E2F3;

const WIDE_CHAR: f64 = 2.2;
const NARROW_CHAR: f64 = 1.1;
const BLANK_HEADER_WIDTH: f64 = 8.0;

/// Horizontal alignment of a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fa5}' | '\u{3000}'..='\u{303f}' | '\u{ff00}'..='\u{ffef}')
}

/// Estimated rendered width of a display string.
pub fn display_width(text: &str) -> f64 {
    text.chars()
        .map(|c| if is_wide(c) { WIDE_CHAR } else { NARROW_CHAR })
        .sum()
}

/// Per-column widths over a laid-out sheet: the wider of the header and
/// the widest data cell, rounded up with one character of padding. A
/// blank header falls back to a default width.
pub fn column_widths(rows: &[Vec<CellData>]) -> Vec<f64> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            let cell_width = |row: &Vec<CellData>| {
                row.get(col)
                    .map(|cell| display_width(&cell.display()))
                    .unwrap_or(0.0)
            };
            let header = rows.first().map(cell_width).unwrap_or(0.0);
            let header = if header == 0.0 { BLANK_HEADER_WIDTH } else { header };
            let content = rows
                .iter()
                .skip(1)
                .map(cell_width)
                .fold(0.0_f64, f64::max);
            header.max(content).ceil() + 1.0
        })
        .collect()
}

/// Alignment of data cells by sheet kind and column label.
pub fn data_alignment(kind: SheetKind, column: &str) -> Align {
    match kind {
        SheetKind::Roster => match column {
            "家長行動電話" | "家長姓名" => Align::Left,
            "項次" | "報名序號" | "兒童姓名" | "性別" | "年級" => Align::Center,
            _ => Align::Right,
        },
        SheetKind::Team | SheetKind::TeamStats => match column {
            "項次" | "報名序號" => Align::Center,
            _ => Align::Left,
        },
        SheetKind::Attendance => match column {
            "序號" => Align::Center,
            _ => Align::Left,
        },
    }
}

/// Header fill by sheet kind and column label, `None` for unfilled.
pub fn header_fill(kind: SheetKind, column: &str) -> Option<u32> {
    match kind {
        SheetKind::Team => match column {
            "小隊" => Some(FILL_TEAM),
            "報名序號" => Some(FILL_REGISTRATION),
            "備註" => None,
            _ => Some(FILL_HEADER),
        },
        SheetKind::Attendance => Some(FILL_HEADER),
        SheetKind::Roster | SheetKind::TeamStats => None,
    }
}

/// Phone columns are written as text so leading zeros survive.
pub fn is_text_column(column: &str) -> bool {
    matches!(column, "家長行動電話" | "聯絡電話")
}

/// Attendance sheets carry a full cell grid of thin borders.
pub fn wants_borders(kind: SheetKind) -> bool {
    kind == SheetKind::Attendance
}
