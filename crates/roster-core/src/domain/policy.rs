//! Membership policies: should a group drop the sender of a notice?
//!
//! Policies are pure: they look at the sender tag and the event and answer.
//! Checking whether the sender is actually a member, removing it and
//! reporting the removal is the membership engine's job.

use super::cause::{LayoffCause, LayoffEvent};
use super::notice::Sender;
use super::removal::GroupKind;

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipDecision {
    /// Keep the sender (or ignore the notice).
    Retain,
    /// Drop the sender if it is a member.
    Remove,
}

/// Removal rule of one kind of group.
pub trait MembershipPolicy {
    /// Group kind reported in removal records and errors.
    fn group_kind(&self) -> GroupKind;

    fn decide(&self, sender: &Sender, event: &LayoffEvent) -> MembershipDecision;
}

/// Departments drop the sender on any cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentPolicy;

impl MembershipPolicy for DepartmentPolicy {
    fn group_kind(&self) -> GroupKind {
        GroupKind::Department
    }

    fn decide(&self, _sender: &Sender, _event: &LayoffEvent) -> MembershipDecision {
        MembershipDecision::Remove
    }
}

/// Clubs drop the sender only for a vacation deficit, and never drop board
/// members.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClubPolicy;

impl MembershipPolicy for ClubPolicy {
    fn group_kind(&self) -> GroupKind {
        GroupKind::Club
    }

    fn decide(&self, sender: &Sender, event: &LayoffEvent) -> MembershipDecision {
        if sender.kind.is_board_member() {
            return MembershipDecision::Retain;
        }
        match event.cause() {
            LayoffCause::VacationStockNegative => MembershipDecision::Remove,
            _ => MembershipDecision::Retain,
        }
    }
}
