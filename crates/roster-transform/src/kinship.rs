//! Kinship title derivation.

use roster_model::markers;

use crate::grade::grade_ordinal;

/// Older brother (哥哥).
pub const OLDER_BROTHER: &str = "哥哥";
/// Older sister (姊姊).
pub const OLDER_SISTER: &str = "姊姊";
/// Younger brother (弟弟).
pub const YOUNGER_BROTHER: &str = "弟弟";
/// Younger sister (妹妹).
pub const YOUNGER_SISTER: &str = "妹妹";

/// Derives the relational title of one sibling as seen from the
/// current child.
///
/// Equal ordinals yield the same-age label regardless of gender. The
/// gender branch is binary: 男 selects brother, anything else
/// (including blank or unknown values) selects sister.
pub fn kinship_title(
    current_grade: &str,
    sibling_grade: &str,
    sibling_gender: &str,
) -> &'static str {
    let current = grade_ordinal(current_grade);
    let sibling = grade_ordinal(sibling_grade);

    if current == sibling {
        return markers::SAME_AGE;
    }

    let is_older = sibling > current;
    let is_male = sibling_gender == markers::MALE;
    match (is_older, is_male) {
        (true, true) => OLDER_BROTHER,
        (true, false) => OLDER_SISTER,
        (false, true) => YOUNGER_BROTHER,
        (false, false) => YOUNGER_SISTER,
    }
}
