//! Guardian indexing and sibling resolution.
//!
//! Siblings come from two sources, in priority order: an explicit
//! sibling-description field on the row, or correlation of rows that
//! share a guardian name. The explicit field wins when present.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use roster_model::{Field, RawRecord, SiblingSet, markers};

/// One co-registered child under a guardian, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredChild {
    pub name: String,
    pub gender: String,
    pub grade: String,
}

/// Guardian name (trimmed) to the children registered under it.
/// Built once per batch, read-only afterwards. Blank guardian names are
/// never indexed; such rows are sibling-less by construction.
#[derive(Debug, Default)]
pub struct GuardianIndex {
    children: BTreeMap<String, Vec<RegisteredChild>>,
}

impl GuardianIndex {
    /// Builds the index over a field-normalized batch.
    pub fn build(records: &[RawRecord]) -> Self {
        let mut children: BTreeMap<String, Vec<RegisteredChild>> = BTreeMap::new();
        for record in records {
            let guardian = record.field(Field::GuardianName);
            let guardian = guardian.trim();
            if guardian.is_empty() {
                continue;
            }
            children
                .entry(guardian.to_string())
                .or_default()
                .push(RegisteredChild {
                    name: record.field(Field::ChildName),
                    gender: record.field(Field::Gender),
                    grade: record.field(Field::Grade),
                });
        }
        Self { children }
    }

    pub fn children_of(&self, guardian: &str) -> &[RegisteredChild] {
        self.children
            .get(guardian.trim())
            .map_or(&[], Vec::as_slice)
    }

    pub fn guardian_count(&self) -> usize {
        self.children.len()
    }

    pub fn guardians(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

fn sibling_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // name(gender, grade) with ASCII or full-width parentheses and
    // comma, entries separated by 、 or commas.
    PATTERN.get_or_init(|| {
        Regex::new(r"([^、，,]+?)[（(]([^,，]+?)[,，]\s*([^）)]+?)[）)]").expect("sibling pattern")
    })
}

/// Parses an explicit sibling-description string.
///
/// Expected shape: `小明(男,三年級)、小華(女,五年級)`. Malformed
/// entries match nothing and are silently skipped; a blank or 無 value
/// yields an empty set. Titles are left empty for the kinship labeler.
pub fn parse_sibling_field(value: &str) -> SiblingSet {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == markers::NONE {
        return SiblingSet::default();
    }

    let mut set = SiblingSet::default();
    for captures in sibling_entry_pattern().captures_iter(trimmed) {
        set.names.push(captures[1].trim().to_string());
        set.genders.push(captures[2].trim().to_string());
        set.grades.push(captures[3].trim().to_string());
    }
    if set.is_empty() {
        tracing::debug!(value = trimmed, "sibling field matched no entries");
    }
    set
}

/// Resolves the siblings of one child.
///
/// An explicit sibling field (any accepted spelling) takes priority.
/// Otherwise co-registered children under the same guardian are taken,
/// excluding the entry whose name equals the child's own. Exclusion is
/// by exact name match only: same-named twins under one guardian would
/// collapse, and the source data carries no stable per-child id to do
/// better.
pub fn resolve_siblings(record: &RawRecord, index: &GuardianIndex) -> SiblingSet {
    let explicit = record.field(Field::SiblingField);
    let explicit = explicit.trim();
    if !explicit.is_empty() && explicit != markers::NONE {
        return parse_sibling_field(explicit);
    }

    let guardian = record.field(Field::GuardianName);
    if guardian.trim().is_empty() {
        return SiblingSet::default();
    }

    let own_name = record.field(Field::ChildName);
    let mut set = SiblingSet::default();
    for child in index.children_of(&guardian) {
        if child.name == own_name {
            continue;
        }
        set.names.push(child.name.clone());
        set.genders.push(child.gender.clone());
        set.grades.push(child.grade.clone());
    }
    set
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
    fn parses_mixed_width_punctuation() {
        let set = parse_sibling_field("小明(男,三年級)、小華(女,五年級)");
        assert_eq!(set.names, vec!["小明", "小華"]);
        assert_eq!(set.genders, vec!["男", "女"]);
        assert_eq!(set.grades, vec!["三年級", "五年級"]);

        let set = parse_sibling_field("小明（男，三年級）");
        assert_eq!(set.names, vec!["小明"]);
        assert_eq!(set.grades, vec!["三年級"]);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let set = parse_sibling_field("小明(男,三年級)、壞掉的資料");
        assert_eq!(set.names, vec!["小明"]);

        let set = parse_sibling_field("完全不符合格式");
        assert!(set.is_empty());
    }

    #[test]
    fn none_marker_yields_empty_set() {
        assert!(parse_sibling_field("無").is_empty());
        assert!(parse_sibling_field("  ").is_empty());
    }

    #[test]
    fn blank_guardians_are_never_indexed() {
        let records = vec![
            record(&[("兒童姓名", "王小明"), ("家長姓名", "  ")]),
            record(&[("兒童姓名", "王小華"), ("家長姓名", "王小姐")]),
        ];
        let index = GuardianIndex::build(&records);
        assert_eq!(index.guardian_count(), 1);
        assert!(index.guardians().all(|name| !name.trim().is_empty()));
    }

    #[test]
    fn guardian_correlation_excludes_self() {
        let records = vec![
            record(&[("兒童姓名", "王大明"), ("性別", "男"), ("年級", "五"), ("家長姓名", "王小姐")]),
            record(&[("兒童姓名", "王小明"), ("性別", "男"), ("年級", "三"), ("家長姓名", "王小姐")]),
        ];
        let index = GuardianIndex::build(&records);
        let set = resolve_siblings(&records[1], &index);
        assert_eq!(set.names, vec!["王大明"]);
        assert!(!set.names.contains(&"王小明".to_string()));
    }

    #[test]
    fn explicit_field_wins_over_guardian_index() {
        let records = vec![
            record(&[("兒童姓名", "王大明"), ("家長姓名", "王小姐")]),
            record(&[
                ("兒童姓名", "王小明"),
                ("家長姓名", "王小姐"),
                ("兄弟姊妹", "小華(女,五年級)"),
            ]),
        ];
        let index = GuardianIndex::build(&records);
        let set = resolve_siblings(&records[1], &index);
        assert_eq!(set.names, vec!["小華"]);
    }

    #[test]
    fn historical_sibling_spellings_are_probed() {
        let records = vec![record(&[("兒童姓名", "王小明"), ("手足", "小華(女,五年級)")])];
        let index = GuardianIndex::build(&records);
        let set = resolve_siblings(&records[0], &index);
        assert_eq!(set.names, vec!["小華"]);
    }

    #[test]
    fn no_guardian_and_no_field_yields_empty_set() {
        let records = vec![record(&[("兒童姓名", "王小明")])];
        let index = GuardianIndex::build(&records);
        assert!(resolve_siblings(&records[0], &index).is_empty());
    }
}
