//! Team-divider sheet construction: one sheet per canonical bucket, an
//! all-students summary whose 小隊 column looks the team up from the
//! bucket sheets, and a statistics sheet.

use roster_model::{GradeGroups, ProcessedRecord, SortBy};
use roster_transform::{BucketStat, TEAM_BUCKET_ORDER, sorted_summary, team_bucket};

use crate::layout::{CellData, MergeRegion, SheetKind, SheetLayout};

pub const TEAM_HEADERS: [&str; 10] = [
    "項次",
    "小隊",
    "報名序號",
    "兒童姓名",
    "性別",
    "年級",
    "學校",
    "家長姓名",
    "家長行動電話",
    "備註",
];

pub const STATS_HEADERS: [&str; 6] = ["區", "年級", "人數", "隊數", "每隊人數", "尚未繳費"];

pub const TEAM_SUMMARY_SHEET: &str = "總表";
pub const STATS_SHEET: &str = "統計";

fn header_row() -> Vec<CellData> {
    TEAM_HEADERS.iter().map(|h| CellData::from(*h)).collect()
}

fn data_row(record: &ProcessedRecord, display_index: usize, team: CellData) -> Vec<CellData> {
    vec![
        CellData::from(display_index),
        team,
        CellData::from(record.registration_number.clone()),
        CellData::from(record.name.clone()),
        CellData::from(record.gender.clone()),
        CellData::from(record.grade.clone()),
        CellData::from(record.school.clone()),
        CellData::from(record.guardian_name.clone()),
        CellData::from(record.guardian_phone.clone()),
        CellData::from(record.note.clone()),
    ]
}

/// Builds one sheet per canonical bucket, in the fixed team order.
/// The 小隊 column is left blank for manual assignment.
pub fn build_team_sheets(groups: &GradeGroups) -> Vec<SheetLayout> {
    TEAM_BUCKET_ORDER
        .iter()
        .filter_map(|bucket| {
            let records = groups.get(bucket)?;
            let mut sheet = SheetLayout::new(bucket, SheetKind::Team);
            sheet.rows.push(header_row());
            for record in records {
                sheet
                    .rows
                    .push(data_row(record, record.group_index, CellData::from("")));
            }
            Some(sheet)
        })
        .collect()
}

/// Builds the team summary sheet. The 小隊 column carries a lookup
/// formula pulling the manually assigned team back from the child's
/// bucket sheet by name, so the summary stays current as teams are
/// filled in.
pub fn build_team_summary(all: &[ProcessedRecord], sort_by: SortBy) -> SheetLayout {
    let mut sheet = SheetLayout::new(TEAM_SUMMARY_SHEET, SheetKind::Team);
    sheet.rows.push(header_row());
    for (position, record) in sorted_summary(all, sort_by).iter().enumerate() {
        let display_index = match sort_by {
            SortBy::OriginalIndex => record.original_index,
            SortBy::RegistrationNumber => position + 1,
        };
        let bucket = team_bucket(&record.grade);
        // Buckets outside the fixed order have no sheet to look into.
        let team = if TEAM_BUCKET_ORDER.contains(&bucket.as_str()) {
            let row = position + 2;
            CellData::Formula(format!(
                "IFERROR(INDEX('{bucket}'!$B:$B,MATCH(D{row},'{bucket}'!$D:$D,0)),\"\")"
            ))
        } else {
            CellData::from("")
        };
        sheet.rows.push(data_row(record, display_index, team));
    }
    sheet
}

/// Builds the statistics sheet: one row per bucket plus a formula-backed
/// totals row. 隊數 and 每隊人數 are blank for manual planning; their
/// totals sum whatever gets filled in. Consecutive rows of the same camp
/// area get their 區 cells merged.
pub fn build_stats_sheet(stats: &[BucketStat]) -> SheetLayout {
    let mut sheet = SheetLayout::new(STATS_SHEET, SheetKind::TeamStats);
    sheet
        .rows
        .push(STATS_HEADERS.iter().map(|h| CellData::from(*h)).collect());

    for stat in stats {
        sheet.rows.push(vec![
            CellData::from(stat.area.clone()),
            CellData::from(stat.bucket.clone()),
            CellData::from(stat.headcount),
            CellData::from(""),
            CellData::from(""),
            CellData::from(stat.unpaid),
        ]);
    }

    let last_data_row = stats.len() + 1;
    sheet.rows.push(vec![
        CellData::from("總計"),
        CellData::from(""),
        CellData::Formula(format!("SUM(C2:C{last_data_row})")),
        CellData::Formula(format!("SUM(D2:D{last_data_row})")),
        CellData::from(""),
        CellData::Formula(format!("SUM(F2:F{last_data_row})")),
    ]);

    sheet.merges = area_merges(stats);
    sheet
}

/// Vertical merges over runs of equal, non-empty area labels. Row 0 is
/// the header, so data row `i` sits at sheet row `i + 1`.
fn area_merges(stats: &[BucketStat]) -> Vec<MergeRegion> {
    let mut merges = Vec::new();
    let mut run_start = 0;
    for end in 1..=stats.len() {
        let run_over = end == stats.len() || stats[end].area != stats[run_start].area;
        if run_over {
            if end - run_start > 1 && !stats[run_start].area.is_empty() {
                merges.push(MergeRegion::column(0, run_start as u32 + 1, end as u32));
            }
            run_start = end;
        }
    }
    merges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, grade: &str, number: &str, group_index: usize) -> ProcessedRecord {
        ProcessedRecord {
            original_index: 1,
            group_index,
            registration_number: number.to_string(),
            name: name.to_string(),
            gender: "男".to_string(),
            grade: grade.to_string(),
            school: String::new(),
            sibling_titles: String::new(),
            sibling_names: String::new(),
            sibling_genders: String::new(),
            sibling_grades: String::new(),
            guardian_name: String::new(),
            guardian_phone: String::new(),
            note: String::new(),
        }
    }

    fn stat(area: &str, bucket: &str, headcount: usize, unpaid: usize) -> BucketStat {
        BucketStat {
            area: area.to_string(),
            bucket: bucket.to_string(),
            headcount,
            unpaid,
        }
    }

    #[test]
    fn bucket_sheets_follow_fixed_order() {
        let mut groups = GradeGroups::new();
        groups.push("三年級", student("甲", "三年級", "1", 1));
        groups.push("學齡前", student("乙", "大班", "2", 1));
        let sheets = build_team_sheets(&groups);
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["學齡前", "三年級"]);
        // Team column stays blank on bucket sheets.
        assert_eq!(sheets[0].rows[1][1], CellData::from(""));
        assert_eq!(sheets[1].rows[1][0], CellData::Int(1));
    }

    #[test]
    fn summary_team_column_looks_up_the_bucket_sheet() {
        let all = vec![student("甲", "大班", "1", 1), student("乙", "三", "2", 1)];
        let sheet = build_team_summary(&all, SortBy::RegistrationNumber);
        // Pre-school labels redirect to the coalesced sheet.
        assert_eq!(
            sheet.rows[1][1],
            CellData::Formula(
                "IFERROR(INDEX('學齡前'!$B:$B,MATCH(D2,'學齡前'!$D:$D,0)),\"\")".to_string()
            )
        );
        assert_eq!(
            sheet.rows[2][1],
            CellData::Formula(
                "IFERROR(INDEX('三年級'!$B:$B,MATCH(D3,'三年級'!$D:$D,0)),\"\")".to_string()
            )
        );
    }

    #[test]
    fn unknown_bucket_gets_no_lookup_formula() {
        let all = vec![student("甲", "高一", "1", 1)];
        let sheet = build_team_summary(&all, SortBy::RegistrationNumber);
        assert_eq!(sheet.rows[1][1], CellData::from(""));
    }

    #[test]
    fn stats_sheet_totals_and_merges() {
        let stats = vec![
            stat("夢夢基地", "學齡前", 3, 1),
            stat("大衛區", "一年級", 5, 0),
            stat("大衛區", "二年級", 4, 2),
            stat("", "國一", 2, 0),
            stat("", "國二", 1, 0),
        ];
        let sheet = build_stats_sheet(&stats);
        assert_eq!(sheet.rows.len(), 7);
        assert_eq!(sheet.rows[6][0], CellData::from("總計"));
        assert_eq!(
            sheet.rows[6][2],
            CellData::Formula("SUM(C2:C6)".to_string())
        );
        assert_eq!(
            sheet.rows[6][5],
            CellData::Formula("SUM(F2:F6)".to_string())
        );
        // Only the two-row 大衛區 run merges; empty areas never do.
        // Its data rows sit at sheet rows 2 and 3 below the header.
        assert_eq!(sheet.merges, vec![MergeRegion::column(0, 2, 3)]);
    }
}
