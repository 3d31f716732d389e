//! Canonical field vocabulary and header alias lists.
//!
//! Registration exports are not schema-controlled: the same logical
//! column has shipped under several header spellings over the years.
//! Each canonical field carries a priority-ordered alias list that is
//! resolved once per record instead of being probed inline downstream.

use serde::{Deserialize, Serialize};

/// The fixed vocabulary of logical columns the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    RegistrationNumber,
    ChildName,
    Gender,
    Grade,
    School,
    GuardianName,
    GuardianPhone,
    Note,
    SiblingField,
}

impl Field {
    /// Accepted header spellings, most recent first. The first present,
    /// non-blank value wins.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::RegistrationNumber => &["報名序號"],
            Self::ChildName => &["兒童姓名", "姓名", "孩童姓名"],
            Self::Gender => &["性別"],
            Self::Grade => &["年級"],
            Self::School => &["學校"],
            Self::GuardianName => &["家長姓名"],
            Self::GuardianPhone => &["家長行動電話"],
            Self::Note => &["備註"],
            Self::SiblingField => &["兄弟姊妹", "手足", "兄弟姐妹"],
        }
    }

    /// The canonical header label used in output sheets.
    pub fn label(self) -> &'static str {
        self.aliases()[0]
    }
}

/// Display markers and filter tokens shared across the pipeline.
pub mod markers {
    /// Literal "none" marker shown for empty sibling columns.
    pub const NONE: &str = "無";
    /// Registration numbers containing this token mark cancelled rows.
    pub const CANCELLED: &str = "取消";
    /// Fee-exempt marker inside a registration number; digits are kept.
    pub const FEE_EXEMPT: &str = "不收費";
    /// Bucket label for rows with a blank grade.
    pub const UNCLASSIFIED: &str = "未分類";
    /// Coalesced pre-school bucket used by the team flow.
    pub const PRESCHOOL: &str = "學齡前";
    /// Substituted registration number for unpaid rows in the team flow.
    pub const UNPAID: &str = "尚未繳費";
    /// Kinship title for siblings in the same grade.
    pub const SAME_AGE: &str = "同年齡";
    /// Gender value that selects the brother branch of kinship titles.
    pub const MALE: &str = "男";
}
