//! Field-name normalization.
//!
//! Header text in the source exports is frequently wrapped across
//! lines, padded with whitespace, or corrupted by merged header cells:
//! the exporter splits a merged 報名序號 cell into 報名序號 plus a
//! suffixed 報名序號_1 column that actually holds the child name.
//! This pass is pure per-row key rewriting; values are untouched and
//! unknown keys are preserved so downstream alias probing still works.

use roster_model::RawRecord;

/// Cleans one header label: embedded line breaks removed, surrounding
/// whitespace trimmed, then the known merged-cell corruptions
/// retargeted onto the field they really hold.
pub fn clean_field_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    let cleaned = cleaned.trim();

    // A suffixed registration-number column is the child-name column
    // split off a merged header cell.
    if cleaned.contains("報名序號_1") {
        return "兒童姓名".to_string();
    }
    if cleaned == "(收費同工)報名序號" {
        return "報名序號".to_string();
    }
    cleaned.to_string()
}

/// Rewrites all keys of one record through [`clean_field_name`].
pub fn normalize_record(record: &RawRecord) -> RawRecord {
    record
        .iter()
        .map(|(key, value)| (clean_field_name(key), value.clone()))
        .collect()
}

/// Normalizes every record of a batch.
pub fn normalize_batch(records: &[RawRecord]) -> Vec<RawRecord> {
    records.iter().map(normalize_record).collect()
}
