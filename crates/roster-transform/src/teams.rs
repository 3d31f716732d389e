//! Team-divider bucket policy.
//!
//! A variant layered on top of the shared assembler: pre-primary
//! labels coalesce into one 學齡前 bucket, numeral-only labels are
//! canonicalized to the N年級 form, unpaid rows get a marker
//! registration number, and each bucket is re-sorted and renumbered.

use roster_model::{Field, GradeGroups, ProcessOptions, ProcessedRecord, RawRecord, markers};

use crate::assemble::{
    AssembledBatch, normalize_phone, normalize_registration_number, numeric_sort_key,
};

/// Fixed output order of team buckets. Buckets outside this list are
/// kept in the all-students sequence but get no per-grade sheet.
pub const TEAM_BUCKET_ORDER: &[&str] = &[
    "學齡前",
    "一年級",
    "二年級",
    "三年級",
    "四年級",
    "五年級",
    "六年級",
    "國一",
    "國二",
    "國三",
];

const PRESCHOOL_TOKENS: &[&str] = &["大班", "中班", "小班", "未就學"];

const NUMERAL_GRADES: &[(&str, &str)] = &[
    ("一", "一年級"),
    ("二", "二年級"),
    ("三", "三年級"),
    ("四", "四年級"),
    ("五", "五年級"),
    ("六", "六年級"),
    ("1", "一年級"),
    ("2", "二年級"),
    ("3", "三年級"),
    ("4", "四年級"),
    ("5", "五年級"),
    ("6", "六年級"),
];

/// Maps a raw grade label onto its team bucket.
pub fn team_bucket(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty()
        || PRESCHOOL_TOKENS
            .iter()
            .any(|token| trimmed.contains(token))
    {
        return markers::PRESCHOOL.to_string();
    }

    for (numeral, canonical) in NUMERAL_GRADES {
        if trimmed == *numeral {
            return (*canonical).to_string();
        }
    }

    if !trimmed.contains("年級") && !trimmed.contains('國') {
        return format!("{trimmed}年級");
    }
    trimmed.to_string()
}

/// Ranks pre-school labels for the 學齡前 in-bucket sort:
/// 未就學 < 小班 < 中班 < 大班, unknown labels first.
fn preschool_rank(label: &str) -> u8 {
    match label.trim() {
        "未就學" => 1,
        "小班" => 2,
        "中班" => 3,
        "大班" => 4,
        _ => 0,
    }
}

/// Assembles the batch under the team-divider policy.
///
/// Shares the filter and value-normalization rules with the roster
/// assembler but carries no sibling information; 學齡前 sorts by
/// pre-school rank then numeric registration number, every other
/// bucket by numeric registration number alone, and group-local
/// indices are renumbered after sorting.
pub fn assemble_teams(records: &[RawRecord], options: &ProcessOptions) -> AssembledBatch {
    let survivors: Vec<(usize, &RawRecord)> = records
        .iter()
        .enumerate()
        .map(|(position, record)| (position + 1, record))
        .filter(|(_, record)| crate::assemble::keep_row(record, options))
        .collect();

    let mut groups = GradeGroups::new();
    let mut all = Vec::new();
    for (original_index, record) in survivors {
        let grade = record.field(Field::Grade);
        let bucket = team_bucket(&grade);

        let mut registration_number =
            normalize_registration_number(&record.field(Field::RegistrationNumber));
        if registration_number.is_empty() {
            registration_number = markers::UNPAID.to_string();
        }

        let processed = ProcessedRecord {
            original_index,
            group_index: groups.bucket_len(&bucket) + 1,
            registration_number,
            name: record.field(Field::ChildName),
            gender: record.field(Field::Gender),
            grade,
            school: record.field(Field::School),
            sibling_titles: String::new(),
            sibling_names: String::new(),
            sibling_genders: String::new(),
            sibling_grades: String::new(),
            guardian_name: record.field(Field::GuardianName),
            guardian_phone: normalize_phone(&record.field(Field::GuardianPhone)),
            note: record.field(Field::Note),
        };

        groups.push(&bucket, processed.clone());
        all.push(processed);
    }

    for bucket in TEAM_BUCKET_ORDER {
        let Some(records) = groups.get_mut(bucket) else {
            continue;
        };
        if *bucket == markers::PRESCHOOL {
            records.sort_by_key(|record| {
                (
                    preschool_rank(&record.grade),
                    numeric_sort_key(&record.registration_number),
                )
            });
        } else {
            records.sort_by_key(|record| numeric_sort_key(&record.registration_number));
        }
        for (position, record) in records.iter_mut().enumerate() {
            record.group_index = position + 1;
        }
    }

    for label in groups.labels() {
        if !TEAM_BUCKET_ORDER.contains(&label) {
            tracing::warn!(bucket = label, "grade bucket outside the team order gets no sheet");
        }
    }

    AssembledBatch { groups, all }
}

/// Per-bucket statistics row for the 統計 sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStat {
    /// Camp area label; junior-secondary buckets have none.
    pub area: String,
    pub bucket: String,
    pub headcount: usize,
    /// Rows whose registration number carries the 尚未繳費 marker.
    pub unpaid: usize,
}

/// Camp area a bucket belongs to.
pub fn area_for(bucket: &str) -> &'static str {
    match bucket {
        "學齡前" => "夢夢基地",
        "一年級" | "二年級" | "三年級" => "大衛區",
        "四年級" | "五年級" | "六年級" => "約書亞區",
        _ => "",
    }
}

/// Computes per-bucket statistics in the fixed team order.
pub fn team_stats(groups: &GradeGroups) -> Vec<BucketStat> {
    TEAM_BUCKET_ORDER
        .iter()
        .filter_map(|bucket| {
            let records = groups.get(bucket)?;
            let unpaid = records
                .iter()
                .filter(|record| record.registration_number.contains(markers::UNPAID))
                .count();
            Some(BucketStat {
                area: area_for(bucket).to_string(),
                bucket: (*bucket).to_string(),
                headcount: records.len(),
                unpaid,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), CellValue::from(*value)))
            .collect()
    }

    #[test]
    fn bucket_canonicalization() {
        assert_eq!(team_bucket("一"), "一年級");
        assert_eq!(team_bucket("3"), "三年級");
        assert_eq!(team_bucket("五年級"), "五年級");
        assert_eq!(team_bucket("國一"), "國一");
        assert_eq!(team_bucket("大班"), "學齡前");
        assert_eq!(team_bucket("未就學"), "學齡前");
        assert_eq!(team_bucket(""), "學齡前");
    }

    #[test]
    fn preschool_bucket_sorts_by_rank_then_number() {
        let records = vec![
            record(&[("報名序號", "9"), ("兒童姓名", "甲"), ("年級", "大班")]),
            record(&[("報名序號", "5"), ("兒童姓名", "乙"), ("年級", "未就學")]),
            record(&[("報名序號", "2"), ("兒童姓名", "丙"), ("年級", "大班")]),
            record(&[("報名序號", "7"), ("兒童姓名", "丁"), ("年級", "中班")]),
        ];
        let batch = assemble_teams(&records, &ProcessOptions::new());
        let preschool = batch.groups.get("學齡前").unwrap();
        let names: Vec<&str> = preschool.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["乙", "丁", "丙", "甲"]);
        let indices: Vec<usize> = preschool.iter().map(|r| r.group_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn blank_registration_becomes_unpaid_marker() {
        let records = vec![record(&[("兒童姓名", "甲"), ("年級", "三")])];
        let batch = assemble_teams(&records, &ProcessOptions::new());
        assert_eq!(batch.all[0].registration_number, "尚未繳費");
    }

    #[test]
    fn buckets_sort_by_registration_number() {
        let records = vec![
            record(&[("報名序號", "12"), ("兒童姓名", "甲"), ("年級", "三")]),
            record(&[("報名序號", "3"), ("兒童姓名", "乙"), ("年級", "三")]),
        ];
        let batch = assemble_teams(&records, &ProcessOptions::new());
        let bucket = batch.groups.get("三年級").unwrap();
        assert_eq!(bucket[0].name, "乙");
        assert_eq!(bucket[1].name, "甲");
    }

    #[test]
    fn stats_count_headcount_and_unpaid() {
        let records = vec![
            record(&[("報名序號", "1"), ("兒童姓名", "甲"), ("年級", "三")]),
            record(&[("兒童姓名", "乙"), ("年級", "三")]),
            record(&[("報名序號", "2"), ("兒童姓名", "丙"), ("年級", "大班")]),
        ];
        let batch = assemble_teams(&records, &ProcessOptions::new());
        let stats = team_stats(&batch.groups);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].bucket, "學齡前");
        assert_eq!(stats[0].area, "夢夢基地");
        assert_eq!(stats[0].headcount, 1);
        assert_eq!(stats[1].bucket, "三年級");
        assert_eq!(stats[1].area, "大衛區");
        assert_eq!(stats[1].headcount, 2);
        assert_eq!(stats[1].unpaid, 1);
    }

    #[test]
    fn junior_secondary_has_no_area() {
        assert_eq!(area_for("國一"), "");
        assert_eq!(area_for("六年級"), "約書亞區");
    }
}
