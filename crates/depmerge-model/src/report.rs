use std::fmt;

use serde::{Serialize, Serializer};

use crate::group::GroupId;

/// Report header, in column order.
pub const REPORT_COLUMNS: [&str; 10] = [
    "Sr No",
    "Value ID",
    "Original Value Name",
    "Final Group Name",
    "Original Group ID",
    "Final Group ID",
    "Group Status",
    "Dependency Status",
    "Original Dependents",
    "Final Dependents",
];

/// Whether a value's group or dependents changed during canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeStatus {
    Modified,
    #[serde(rename = "Non-modified")]
    NonModified,
}

impl ChangeStatus {
    pub fn from_unchanged(unchanged: bool) -> Self {
        if unchanged {
            Self::NonModified
        } else {
            Self::Modified
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modified => "Modified",
            Self::NonModified => "Non-modified",
        }
    }

    pub fn is_modified(self) -> bool {
        matches!(self, Self::Modified)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the change report: a single value of a canonical group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Sr No")]
    pub serial: usize,
    #[serde(rename = "Value ID")]
    pub value: String,
    #[serde(rename = "Original Value Name")]
    pub original_name: String,
    #[serde(rename = "Final Group Name")]
    pub final_group_name: String,
    #[serde(rename = "Original Group ID", serialize_with = "serialize_optional_id")]
    pub original_group_id: Option<GroupId>,
    #[serde(rename = "Final Group ID")]
    pub final_group_id: GroupId,
    #[serde(rename = "Group Status")]
    pub group_status: ChangeStatus,
    #[serde(rename = "Dependency Status")]
    pub dependency_status: ChangeStatus,
    #[serde(rename = "Original Dependents")]
    pub original_dependents: String,
    #[serde(rename = "Final Dependents")]
    pub final_dependents: String,
}

impl ReportRow {
    /// Cell text in `REPORT_COLUMNS` order.
    pub fn cells(&self) -> [String; 10] {
        [
            self.serial.to_string(),
            self.value.clone(),
            self.original_name.clone(),
            self.final_group_name.clone(),
            self.original_group_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.final_group_id.to_string(),
            self.group_status.to_string(),
            self.dependency_status.to_string(),
            self.original_dependents.clone(),
            self.final_dependents.clone(),
        ]
    }
}

// Missing original ids are written as empty cells, never null.
fn serialize_optional_id<S: Serializer>(
    id: &Option<GroupId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.collect_str(id),
        None => serializer.serialize_str(""),
    }
}
