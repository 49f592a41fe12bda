//! Removal records: the only externally visible effect of a lay-off.
//!
//! A record is data. Turning it into the familiar log line is done by its
//! `Display` impl, so sinks decide whether to print, trace or collect.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cause::LayoffCause;
use super::ids::{EmployeeId, GroupId};

/// Which kind of group performed a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Department,
    Club,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Department => "Department",
            GroupKind::Club => "Club",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful removal of an employee from a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRecord {
    pub group: GroupKind,
    pub group_id: GroupId,
    pub employee: EmployeeId,
    pub cause: LayoffCause,
}

impl RemovalRecord {
    /// Reason text as it appears in the rendered line.
    ///
    /// Clubs only ever remove for a vacation deficit and phrase it as a
    /// condition rather than the cause name.
    pub fn reason(&self) -> &'static str {
        match self.group {
            GroupKind::Department => self.cause.as_str(),
            GroupKind::Club => "Vacation Stock < 0",
        }
    }
}

impl fmt::Display for RemovalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Removed Employee {} due to {}",
            self.group,
            self.employee,
            self.reason()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(group: GroupKind, cause: LayoffCause) -> RemovalRecord {
        RemovalRecord {
            group,
            group_id: GroupId(1),
            employee: EmployeeId(2),
            cause,
        }
    }

    #[rstest]
    #[case::vacation(LayoffCause::VacationStockNegative, "VacationStockNegative")]
    #[case::age(LayoffCause::AgeGreaterThan60, "AgeGreaterThan60")]
    #[case::target(LayoffCause::FailedToMeetTarget, "FailedToMeetTarget")]
    #[case::resigned(LayoffCause::Resigned, "Resigned")]
    fn department_line_names_the_cause(#[case] cause: LayoffCause, #[case] expected: &str) {
        let line = record(GroupKind::Department, cause).to_string();
        assert_eq!(line, format!("[Department] Removed Employee 2 due to {expected}"));
    }

    #[test]
    fn club_line_uses_condition_text() {
        let line = record(GroupKind::Club, LayoffCause::VacationStockNegative).to_string();
        assert_eq!(line, "[Club] Removed Employee 2 due to Vacation Stock < 0");
    }

    #[test]
    fn record_serializes_with_snake_case_group() {
        let v = serde_json::to_value(record(GroupKind::Club, LayoffCause::VacationStockNegative))
            .unwrap();
        assert_eq!(v["group"], "club");
        assert_eq!(v["employee"], 2);
        assert_eq!(v["cause"], "VacationStockNegative");
    }
}
