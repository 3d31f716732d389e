//! Record assembly: filtering, value normalization, sibling resolution,
//! and grade bucketing.

use roster_model::{
    Field, GradeGroups, ProcessOptions, ProcessedRecord, RawRecord, SiblingSet, SortBy, markers,
};

use crate::kinship::kinship_title;
use crate::sibling::{GuardianIndex, resolve_siblings};

/// The assembled batch: records bucketed by grade label in
/// first-appearance order, plus the flat all-students sequence.
#[derive(Debug, Default)]
pub struct AssembledBatch {
    pub groups: GradeGroups,
    pub all: Vec<ProcessedRecord>,
}

/// Normalizes a guardian phone number.
///
/// A 9-digit value starting with 9 is a local mobile number whose
/// leading 0 was eaten by numeric cell coercion; the 0 is restored.
/// Everything else passes through trimmed. This is a local-format
/// heuristic, not general phone validation.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 9
        && trimmed.starts_with('9')
        && trimmed.chars().all(|c| c.is_ascii_digit())
    {
        return format!("0{trimmed}");
    }
    trimmed.to_string()
}

/// Normalizes a registration number.
///
/// Values carrying the fee-exempt marker keep their digits only;
/// everything else passes through trimmed.
pub fn normalize_registration_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains(markers::FEE_EXEMPT) {
        return trimmed.chars().filter(char::is_ascii_digit).collect();
    }
    trimmed.to_string()
}

/// Numeric sort key for registration numbers and indices: the leading
/// digit run, or zero when there is none.
pub fn numeric_sort_key(value: &str) -> i64 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Filter predicate applied before bucketing and index assignment.
pub(crate) fn keep_row(record: &RawRecord, options: &ProcessOptions) -> bool {
    let registration = record.field(Field::RegistrationNumber);
    let registration = registration.trim();
    if options.hide_cancelled && registration.contains(markers::CANCELLED) {
        return false;
    }
    if options.hide_no_number && (registration.is_empty() || registration == markers::NONE) {
        return false;
    }
    true
}

fn join_or_none(entries: &[String]) -> String {
    if entries.is_empty() {
        markers::NONE.to_string()
    } else {
        entries.join(", ")
    }
}

/// Computes kinship titles for a resolved sibling set, in place.
fn label_siblings(current_grade: &str, siblings: &mut SiblingSet) {
    siblings.titles = siblings
        .names
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            kinship_title(
                current_grade,
                siblings.grades.get(idx).map_or("", String::as_str),
                siblings.genders.get(idx).map_or("", String::as_str),
            )
            .to_string()
        })
        .collect();
}

/// Assembles a field-normalized batch into processed records.
///
/// Filtering happens first, so suppressed rows never occupy a grade
/// bucket slot; original input positions are captured on the full
/// batch before filtering and are never recomputed. The guardian index
/// is built over the surviving rows only, so cancelled registrations do
/// not resurface as inferred siblings.
pub fn assemble(records: &[RawRecord], options: &ProcessOptions) -> AssembledBatch {
    let survivors: Vec<(usize, &RawRecord)> = records
        .iter()
        .enumerate()
        .map(|(position, record)| (position + 1, record))
        .filter(|(_, record)| keep_row(record, options))
        .collect();

    let surviving_rows: Vec<RawRecord> = survivors
        .iter()
        .map(|(_, record)| (*record).clone())
        .collect();
    let index = GuardianIndex::build(&surviving_rows);

    tracing::debug!(
        input_rows = records.len(),
        surviving_rows = survivors.len(),
        guardians = index.guardian_count(),
        "assembling batch"
    );

    let mut batch = AssembledBatch::default();
    for (original_index, record) in survivors {
        let grade = record.field(Field::Grade);
        let bucket = if grade.trim().is_empty() {
            markers::UNCLASSIFIED.to_string()
        } else {
            grade.trim().to_string()
        };

        let mut siblings = resolve_siblings(record, &index);
        label_siblings(&grade, &mut siblings);

        let processed = ProcessedRecord {
            original_index,
            group_index: batch.groups.bucket_len(&bucket) + 1,
            registration_number: normalize_registration_number(
                &record.field(Field::RegistrationNumber),
            ),
            name: record.field(Field::ChildName),
            gender: record.field(Field::Gender),
            grade,
            school: record.field(Field::School),
            sibling_titles: join_or_none(&siblings.titles),
            sibling_names: join_or_none(&siblings.names),
            sibling_genders: join_or_none(&siblings.genders),
            sibling_grades: join_or_none(&siblings.grades),
            guardian_name: record.field(Field::GuardianName),
            guardian_phone: normalize_phone(&record.field(Field::GuardianPhone)),
            note: record.field(Field::Note),
        };

        batch.groups.push(&bucket, processed.clone());
        batch.all.push(processed);
    }
    batch
}

/// Orders the all-students sequence for the summary sheet.
pub fn sorted_summary(all: &[ProcessedRecord], sort_by: SortBy) -> Vec<ProcessedRecord> {
    let mut sorted = all.to_vec();
    match sort_by {
        SortBy::OriginalIndex => sorted.sort_by_key(|record| record.original_index),
        SortBy::RegistrationNumber => {
            sorted.sort_by_key(|record| numeric_sort_key(&record.registration_number));
        }
    }
    sorted
}
