//! Roster transformation core.
//!
//! Everything with actual decision logic lives here: the grade-ordinal
//! scale, the guardian index and sibling resolution, kinship titling,
//! record assembly with filtering and grade bucketing, the team-divider
//! bucket policy, and attendance row derivation.
//!
//! The pipeline is pure and batch-scoped: every index and intermediate
//! structure is built fresh per invocation, nothing is shared across
//! runs.

mod assemble;
mod attendance;
mod error;
mod grade;
mod kinship;
mod sibling;
mod teams;

pub use assemble::{
    AssembledBatch, assemble, normalize_phone, normalize_registration_number, numeric_sort_key,
    sorted_summary,
};
pub use attendance::{AttendanceRow, build_attendance_rows};
pub use error::{Result, TransformError};
pub use grade::{ORDINAL_MIDDLE, ORDINAL_NURSERY, ORDINAL_SENIOR, grade_ordinal};
pub use kinship::{
    OLDER_BROTHER, OLDER_SISTER, YOUNGER_BROTHER, YOUNGER_SISTER, kinship_title,
};
pub use sibling::{GuardianIndex, RegisteredChild, parse_sibling_field, resolve_siblings};
pub use teams::{BucketStat, TEAM_BUCKET_ORDER, area_for, assemble_teams, team_bucket, team_stats};
