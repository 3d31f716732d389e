//! Full pipeline runs over generated workbooks, verified by reading the
//! output back.

use calamine::{Data, Reader, open_workbook};
use rust_xlsxwriter::Workbook;
use std::path::Path;

use roster_cli::pipeline::{run_attendance, run_organize, run_teams};
use roster_model::{ProcessOptions, SortBy};

fn write_registrations(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    // Two preamble rows above the real header.
    sheet.write_string(0, 0, "2024 夏令營").unwrap();
    sheet.write_string(1, 0, "主辦單位").unwrap();

    let headers = [
        "報名序號",
        "兒童姓名",
        "性別",
        "年級",
        "學校",
        "家長姓名",
        "家長行動電話",
        "備註",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(2, col as u16, *header).unwrap();
    }

    let rows: [[&str; 8]; 4] = [
        ["2", "王大明", "男", "一", "某國小", "王小姐", "", ""],
        ["1", "王小明", "男", "五", "某國小", "王小姐", "", ""],
        ["3(取消)", "林小玉", "女", "三", "他校", "林先生", "", "取消"],
        ["4", "張小芳", "女", "大班", "", "張太太", "", ""],
    ];
    for (offset, row) in rows.iter().enumerate() {
        let row_index = 3 + offset as u32;
        for (col, value) in row.iter().enumerate() {
            sheet.write_string(row_index, col as u16, *value).unwrap();
        }
    }
    // A numeric phone cell that lost its leading zero.
    sheet.write_number(3, 6, 912_345_678.0).unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn organize_builds_grade_sheets_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.xlsx");
    write_registrations(&input);

    let options = ProcessOptions::new()
        .with_hide_cancelled(true)
        .with_sort_by(SortBy::RegistrationNumber);
    let result = run_organize(&input, output.clone(), &options).unwrap();

    assert_eq!(result.header_offset, 2);
    assert_eq!(result.input_rows, 4);
    assert_eq!(result.kept_rows, 3);

    let mut workbook: calamine::Xlsx<_> = open_workbook(&output).unwrap();
    let names = workbook.sheet_names().to_vec();
    assert_eq!(names, vec!["一", "五", "大班", "總表"]);

    // Guardian correlation fills the sibling columns.
    let first_grade = workbook.worksheet_range("一").unwrap();
    assert_eq!(
        first_grade.get_value((1, 2)),
        Some(&Data::String("王大明".into()))
    );
    assert_eq!(
        first_grade.get_value((1, 6)),
        Some(&Data::String("哥哥".into()))
    );
    assert_eq!(
        first_grade.get_value((1, 7)),
        Some(&Data::String("王小明".into()))
    );
    // The numeric phone cell got its leading zero restored.
    assert_eq!(
        first_grade.get_value((1, 11)),
        Some(&Data::String("0912345678".into()))
    );

    // Cancelled row is gone; summary sorts by registration number.
    let summary = workbook.worksheet_range("總表").unwrap();
    assert_eq!(summary.get_value((1, 2)), Some(&Data::String("王小明".into())));
    assert_eq!(summary.get_value((2, 2)), Some(&Data::String("王大明".into())));
    assert_eq!(summary.get_value((3, 2)), Some(&Data::String("張小芳".into())));
    assert_eq!(summary.get_value((4, 2)), None);
}

#[test]
fn teams_build_buckets_summary_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.xlsx");
    write_registrations(&input);

    let options = ProcessOptions::new().with_hide_cancelled(true);
    let result = run_teams(&input, output.clone(), &options).unwrap();
    assert_eq!(result.kept_rows, 3);

    let mut workbook: calamine::Xlsx<_> = open_workbook(&output).unwrap();
    let names = workbook.sheet_names().to_vec();
    // Bucket sheets follow the fixed order, preschool first.
    assert_eq!(names, vec!["學齡前", "一年級", "五年級", "總表", "統計"]);

    let stats = workbook.worksheet_range("統計").unwrap();
    assert_eq!(stats.get_value((1, 0)), Some(&Data::String("夢夢基地".into())));
    assert_eq!(stats.get_value((1, 2)), Some(&Data::Float(1.0)));
    assert_eq!(stats.get_value((4, 0)), Some(&Data::String("總計".into())));

    // The summary 小隊 column carries lookup formulas.
    let formulas = workbook.worksheet_formula("總表").unwrap();
    let formula = formulas.get_value((1, 1)).cloned().unwrap_or_default();
    assert!(formula.contains("IFERROR(INDEX("), "got formula {formula:?}");
}

#[test]
fn attendance_builds_checkin_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["同工姓名", "部門", "手機"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row, (name, group, phone)) in [("陳大文", "招待", "0911222333"), ("李小美", "音控", "")]
        .iter()
        .enumerate()
    {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        sheet.write_string(row, 1, *group).unwrap();
        sheet.write_string(row, 2, *phone).unwrap();
    }
    workbook.save(&input).unwrap();

    let result = run_attendance(&input, output.clone()).unwrap();
    assert_eq!(result.kept_rows, 2);

    let mut workbook: calamine::Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range("同工出席名單").unwrap();
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("序號".into())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::String("陳大文".into())));
    assert_eq!(range.get_value((1, 4)), Some(&Data::String("招待".into())));
    assert_eq!(
        range.get_value((1, 5)),
        Some(&Data::String("0911222333".into()))
    );
}
