//! Worker attendance roster derivation.
//!
//! Builds check-in rows from a worker name roster. Column lookup is by
//! priority-ordered aliases over whitespace-squashed header labels;
//! only the name column is hard-required.

use std::collections::BTreeMap;

use roster_model::RawRecord;

use crate::error::{Result, TransformError};

const NAME_ALIASES: &[&str] = &["姓名", "同工姓名", "名稱"];
const GENDER_ALIASES: &[&str] = &["性別"];
const GROUP_ALIASES: &[&str] = &["組別", "部門", "服事組別"];
const PHONE_ALIASES: &[&str] = &["聯絡電話", "手機", "電話", "行動電話"];
const TEAM_ALIASES: &[&str] = &["所屬小組", "小組", "所屬小隊"];

/// One attendance row. Arrival time and check-off are blank columns
/// filled in by hand at the door.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub sequence: usize,
    pub name: String,
    pub group: String,
    pub phone: String,
    pub gender: String,
    pub team: String,
}

/// Removes every whitespace character (the full-width space U+3000
/// included) for header lookup.
fn squash_key(key: &str) -> String {
    key.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Maps squashed header labels back to the first raw label that
/// produced them, across the whole batch.
fn column_map(records: &[RawRecord]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for record in records {
        for key in record.keys() {
            let squashed = squash_key(key);
            map.entry(squashed).or_insert_with(|| key.to_string());
        }
    }
    map
}

fn find_column<'a>(map: &'a BTreeMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|alias| map.get(*alias).map(String::as_str))
}

/// Builds attendance rows from a field-normalized worker batch.
///
/// # Errors
///
/// Returns [`TransformError::MissingColumn`] when no name-like column
/// exists under any accepted spelling.
pub fn build_attendance_rows(records: &[RawRecord]) -> Result<Vec<AttendanceRow>> {
    let columns = column_map(records);
    tracing::debug!(columns = ?columns.keys().collect::<Vec<_>>(), "worker roster columns");

    let name_column = find_column(&columns, NAME_ALIASES)
        .ok_or_else(|| TransformError::MissingColumn {
            column: "姓名".to_string(),
        })?
        .to_string();
    let gender_column = find_column(&columns, GENDER_ALIASES).map(str::to_string);
    let group_column = find_column(&columns, GROUP_ALIASES).map(str::to_string);
    let phone_column = find_column(&columns, PHONE_ALIASES).map(str::to_string);
    let team_column = find_column(&columns, TEAM_ALIASES).map(str::to_string);

    let value_of = |record: &RawRecord, column: &Option<String>| {
        column
            .as_deref()
            .map(|key| record.text(key))
            .unwrap_or_default()
    };

    Ok(records
        .iter()
        .enumerate()
        .map(|(position, record)| AttendanceRow {
            sequence: position + 1,
            name: record.text(&name_column),
            group: value_of(record, &group_column),
            phone: value_of(record, &phone_column),
            gender: value_of(record, &gender_column),
            team: value_of(record, &team_column),
        })
        .collect())
}
