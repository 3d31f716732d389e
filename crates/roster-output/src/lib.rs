//! Output generation: sheet layouts, the styling policy, and XLSX
//! encoding.
//!
//! Layout construction is pure and fully testable; only [`writer`]
//! touches the filesystem.

mod attendance;
mod error;
mod layout;
mod roster;
mod style;
mod team;
mod writer;

pub use attendance::{ATTENDANCE_HEADERS, ATTENDANCE_SHEET, build_attendance_sheet};
pub use error::{OutputError, Result};
pub use layout::{CellData, MergeRegion, SheetKind, SheetLayout, sheet_name};
pub use roster::{ROSTER_HEADERS, SUMMARY_SHEET, build_grade_sheets, build_summary};
pub use style::{Align, column_widths, data_alignment, display_width, header_fill};
pub use team::{
    STATS_HEADERS, STATS_SHEET, TEAM_HEADERS, TEAM_SUMMARY_SHEET, build_stats_sheet,
    build_team_sheets, build_team_summary,
};
pub use writer::write_workbook;
