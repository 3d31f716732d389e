//! Roster sheet construction: one sheet per grade bucket plus the
//! all-students summary.
//!
//! A child with N resolved siblings occupies N rows, one sibling per
//! row, with the child's own columns merged vertically across the span.

use roster_model::{GradeGroups, ProcessedRecord, SortBy, split_list};
use roster_transform::sorted_summary;

use crate::layout::{CellData, MergeRegion, SheetKind, SheetLayout};

pub const ROSTER_HEADERS: [&str; 13] = [
    "項次",
    "報名序號",
    "兒童姓名",
    "性別",
    "年級",
    "學校",
    "手足稱謂",
    "手足名稱",
    "手足性別",
    "手足年級",
    "家長姓名",
    "家長行動電話",
    "備註",
];

/// Columns merged across a sibling span: everything that belongs to the
/// child, not the sibling.
const MERGE_COLUMNS: [u16; 8] = [0, 1, 2, 3, 4, 5, 10, 11];

pub const SUMMARY_SHEET: &str = "總表";

fn header_row() -> Vec<CellData> {
    ROSTER_HEADERS.iter().map(|h| CellData::from(*h)).collect()
}

fn pick(list: &[String], index: usize) -> String {
    list.get(index).cloned().unwrap_or_default()
}

fn push_record(sheet: &mut SheetLayout, record: &ProcessedRecord, display_index: usize) {
    let names = split_list(&record.sibling_names);
    let titles = split_list(&record.sibling_titles);
    let genders = split_list(&record.sibling_genders);
    let grades = split_list(&record.sibling_grades);

    let first_row = sheet.rows.len() as u32;
    let span = names.len().max(1);
    for sibling in 0..span {
        // Without siblings the joined display strings (the 無 marker)
        // go out as-is on the single row.
        let (title, name, gender, grade) = if names.is_empty() {
            (
                record.sibling_titles.clone(),
                record.sibling_names.clone(),
                record.sibling_genders.clone(),
                record.sibling_grades.clone(),
            )
        } else {
            (
                pick(&titles, sibling),
                pick(&names, sibling),
                pick(&genders, sibling),
                pick(&grades, sibling),
            )
        };
        sheet.rows.push(vec![
            CellData::from(display_index),
            CellData::from(record.registration_number.clone()),
            CellData::from(record.name.clone()),
            CellData::from(record.gender.clone()),
            CellData::from(record.grade.clone()),
            CellData::from(record.school.clone()),
            CellData::from(title),
            CellData::from(name),
            CellData::from(gender),
            CellData::from(grade),
            CellData::from(record.guardian_name.clone()),
            CellData::from(record.guardian_phone.clone()),
            CellData::from(record.note.clone()),
        ]);
    }

    if span > 1 {
        let last_row = sheet.rows.len() as u32 - 1;
        for col in MERGE_COLUMNS {
            sheet.merges.push(MergeRegion::column(col, first_row, last_row));
        }
    }
}

/// Builds one sheet per grade bucket, in first-appearance order.
pub fn build_grade_sheets(groups: &GradeGroups) -> Vec<SheetLayout> {
    groups
        .iter()
        .map(|(label, records)| {
            let mut sheet = SheetLayout::new(label, SheetKind::Roster);
            sheet.rows.push(header_row());
            for (position, record) in records.iter().enumerate() {
                push_record(&mut sheet, record, position + 1);
            }
            sheet
        })
        .collect()
}

/// Builds the all-students summary sheet. When sorting restores input
/// order the 項次 column shows the original input position; under the
/// registration-number sort it is a plain running index.
pub fn build_summary(all: &[ProcessedRecord], sort_by: SortBy) -> SheetLayout {
    let mut sheet = SheetLayout::new(SUMMARY_SHEET, SheetKind::Roster);
    sheet.rows.push(header_row());
    for (position, record) in sorted_summary(all, sort_by).iter().enumerate() {
        let display_index = match sort_by {
            SortBy::OriginalIndex => record.original_index,
            SortBy::RegistrationNumber => position + 1,
        };
        push_record(&mut sheet, record, display_index);
    }
    sheet
}
