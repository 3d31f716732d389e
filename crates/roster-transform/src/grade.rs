//! Grade-label to ordinal mapping.
//!
//! Free-text grade labels are mapped onto a signed ordinal scale used
//! only for comparison and sorting; the raw label is always what gets
//! displayed. The mapping is total: every input resolves to some
//! ordinal, unrecognized text falls into the lowest bucket.

/// Not yet enrolled, nursery class (小班), or unrecognized.
pub const ORDINAL_NURSERY: i8 = -3;
/// Pre-K middle class (中班).
pub const ORDINAL_MIDDLE: i8 = -2;
/// Pre-K senior class (大班).
pub const ORDINAL_SENIOR: i8 = -1;

/// Contains-scan token table. The junior-secondary entries come first:
/// 國一 contains 一, so the bare-numeral entries must not see it.
const GRADE_TOKENS: &[(&str, i8)] = &[
    ("國一", 7),
    ("國二", 8),
    ("國三", 9),
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

/// Maps a grade label onto the ordinal scale [-3, 9].
///
/// Never fails: an unparseable label is indistinguishable from
/// not-yet-enrolled. That conflation is inherited from the source data
/// policy; see the design notes before assuming it is intentional.
pub fn grade_ordinal(label: &str) -> i8 {
    let label = label.trim();

    if label.is_empty() || label.contains("未就學") || label.contains("小班") {
        return ORDINAL_NURSERY;
    }
    if label.contains("中班") {
        return ORDINAL_MIDDLE;
    }
    if label.contains("大班") {
        return ORDINAL_SENIOR;
    }

    for (token, ordinal) in GRADE_TOKENS {
        if label.contains(token) {
            return *ordinal;
        }
    }

    ORDINAL_NURSERY
}
