//! Worker attendance sheet construction.

use roster_transform::AttendanceRow;

use crate::layout::{CellData, SheetKind, SheetLayout};

pub const ATTENDANCE_HEADERS: [&str; 8] = [
    "序號",
    "姓名",
    "到達時間",
    "已到",
    "組別",
    "聯絡電話",
    "性別",
    "所屬小組",
];

pub const ATTENDANCE_SHEET: &str = "同工出席名單";

/// Builds the check-in sheet. 到達時間 and 已到 stay blank for marking
/// at the door.
pub fn build_attendance_sheet(rows: &[AttendanceRow]) -> SheetLayout {
    let mut sheet = SheetLayout::new(ATTENDANCE_SHEET, SheetKind::Attendance);
    sheet.rows.push(
        ATTENDANCE_HEADERS
            .iter()
            .map(|h| CellData::from(*h))
            .collect(),
    );
    for row in rows {
        sheet.rows.push(vec![
            CellData::from(row.sequence),
            CellData::from(row.name.clone()),
            CellData::from(""),
            CellData::from(""),
            CellData::from(row.group.clone()),
            CellData::from(row.phone.clone()),
            CellData::from(row.gender.clone()),
            CellData::from(row.team.clone()),
        ]);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkin_columns_are_left_blank() {
        let rows = vec![AttendanceRow {
            sequence: 1,
            name: "陳大文".to_string(),
            group: "招待".to_string(),
            phone: "0912345678".to_string(),
            gender: "男".to_string(),
            team: "A隊".to_string(),
        }];
        let sheet = build_attendance_sheet(&rows);
        assert_eq!(sheet.name, "同工出席名單");
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][0], CellData::Int(1));
        assert_eq!(sheet.rows[1][2], CellData::from(""));
        assert_eq!(sheet.rows[1][3], CellData::from(""));
        assert_eq!(sheet.rows[1][5], CellData::from("0912345678"));
    }
}
