//! Raw and processed row records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::field::{Field, markers};

/// One registrant row as read off the input sheet: cleaned header label
/// to cell value. Keys that map to no canonical field are preserved so
/// later stages can still probe historical spellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    cells: BTreeMap<String, CellValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: CellValue) {
        self.cells.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Display string for an exact key, empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.cells.get(key).map(CellValue::display).unwrap_or_default()
    }

    /// Resolves a canonical field through its alias list: the first
    /// alias present with a non-blank value wins, otherwise empty.
    pub fn field(&self, field: Field) -> String {
        self.resolve(field.aliases())
    }

    /// Ordered alias resolution over arbitrary header spellings.
    pub fn resolve(&self, aliases: &[&str]) -> String {
        for alias in aliases {
            if let Some(value) = self.cells.get(*alias)
                && !value.is_blank()
            {
                return value.display();
            }
        }
        String::new()
    }
}

impl FromIterator<(String, CellValue)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Inferred siblings for one child: four parallel sequences of equal
/// length. Titles are filled in by the kinship labeler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiblingSet {
    pub names: Vec<String>,
    pub genders: Vec<String>,
    pub grades: Vec<String>,
    pub titles: Vec<String>,
}

impl SiblingSet {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// One child's fully assembled output row. Sibling sequences are
/// flattened to comma-joined display strings, or the literal 無 marker
/// when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// 1-based position in the cleaned input, captured before
    /// filtering and never recomputed.
    pub original_index: usize,
    /// 1-based position within the grade bucket, restarting per bucket.
    pub group_index: usize,
    pub registration_number: String,
    pub name: String,
    pub gender: String,
    /// Raw grade label, uncoerced; ordinals are for comparison only.
    pub grade: String,
    pub school: String,
    pub sibling_titles: String,
    pub sibling_names: String,
    pub sibling_genders: String,
    pub sibling_grades: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub note: String,
}

/// Splits a flattened sibling display string back into entries.
/// The 無 marker and blank segments yield nothing.
pub fn split_list(value: &str) -> Vec<String> {
    if value.trim().is_empty() || value.trim() == markers::NONE {
        return Vec::new();
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Grade buckets in first-appearance order, each holding its records in
/// input order (or re-sorted order for the team flow).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeGroups {
    entries: Vec<(String, Vec<ProcessedRecord>)>,
}

impl GradeGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records already in a bucket, zero when absent.
    pub fn bucket_len(&self, bucket: &str) -> usize {
        self.entries
            .iter()
            .find(|(label, _)| label == bucket)
            .map_or(0, |(_, records)| records.len())
    }

    pub fn push(&mut self, bucket: &str, record: ProcessedRecord) {
        match self.entries.iter_mut().find(|(label, _)| label == bucket) {
            Some((_, records)) => records.push(record),
            None => self.entries.push((bucket.to_string(), vec![record])),
        }
    }

    pub fn get(&self, bucket: &str) -> Option<&[ProcessedRecord]> {
        self.entries
            .iter()
            .find(|(label, _)| label == bucket)
            .map(|(_, records)| records.as_slice())
    }

    pub fn get_mut(&mut self, bucket: &str) -> Option<&mut Vec<ProcessedRecord>> {
        self.entries
            .iter_mut()
            .find(|(label, _)| label == bucket)
            .map(|(_, records)| records)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProcessedRecord])> {
        self.entries
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, value: &str) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(key.to_string(), CellValue::from(value));
        raw
    }

    #[test]
    fn alias_resolution_prefers_earlier_spelling() {
        let mut raw = record("姓名", "舊欄位");
        raw.insert("兒童姓名".to_string(), CellValue::from("新欄位"));
        assert_eq!(raw.field(Field::ChildName), "新欄位");
    }

    #[test]
    fn alias_resolution_skips_blank_values() {
        let mut raw = record("兒童姓名", "  ");
        raw.insert("姓名".to_string(), CellValue::from("王小明"));
        assert_eq!(raw.field(Field::ChildName), "王小明");
    }

    #[test]
    fn split_list_handles_none_marker() {
        assert!(split_list("無").is_empty());
        assert!(split_list("  ").is_empty());
        assert_eq!(split_list("小明, 小華"), vec!["小明", "小華"]);
    }

    #[test]
    fn grade_groups_keep_first_appearance_order() {
        let template = ProcessedRecord {
            original_index: 1,
            group_index: 1,
            registration_number: String::new(),
            name: String::new(),
            gender: String::new(),
            grade: String::new(),
            school: String::new(),
            sibling_titles: String::new(),
            sibling_names: String::new(),
            sibling_genders: String::new(),
            sibling_grades: String::new(),
            guardian_name: String::new(),
            guardian_phone: String::new(),
            note: String::new(),
        };
        let mut groups = GradeGroups::new();
        groups.push("三", template.clone());
        groups.push("一", template.clone());
        groups.push("三", template);
        let labels: Vec<&str> = groups.labels().collect();
        assert_eq!(labels, vec!["三", "一"]);
        assert_eq!(groups.bucket_len("三"), 2);
    }
}
