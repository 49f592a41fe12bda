//! Contract errors.
//!
//! Lay-offs themselves are events, not errors. These types only cover calls
//! that make no sense for the receiver (resigning a sales person, joining
//! a group twice).

use thiserror::Error;

use super::ids::{EmployeeId, GroupId};
use super::removal::GroupKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    #[error("employee {0} is not a sales person")]
    NotASalesPerson(EmployeeId),

    #[error("employee {0} is not a board member")]
    NotABoardMember(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("employee {employee} is already a member of {group} {group_id}")]
    AlreadyMember {
        group: GroupKind,
        group_id: GroupId,
        employee: EmployeeId,
    },

    #[error("employee {employee} was removed from {group} {group_id} and cannot rejoin")]
    PreviouslyRemoved {
        group: GroupKind,
        group_id: GroupId,
        employee: EmployeeId,
    },
}
