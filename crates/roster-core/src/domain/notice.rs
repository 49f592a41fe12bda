//! What a handler receives when a publisher raises.

use serde::{Deserialize, Serialize};

use super::cause::LayoffEvent;
use super::employee::EmployeeKind;
use super::ids::{EmployeeId, PublisherId};

/// Run-time variant of a publisher, carried with every notice so observers
/// never have to inspect the employee itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublisherKind {
    Staff,
    SalesPerson,
    BoardMember,
}

impl PublisherKind {
    pub fn is_board_member(&self) -> bool {
        matches!(self, PublisherKind::BoardMember)
    }
}

impl From<EmployeeKind> for PublisherKind {
    fn from(kind: EmployeeKind) -> Self {
        match kind {
            EmployeeKind::Staff => PublisherKind::Staff,
            EmployeeKind::SalesPerson { .. } => PublisherKind::SalesPerson,
            EmployeeKind::BoardMember => PublisherKind::BoardMember,
        }
    }
}

/// The raising employee, as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sender {
    pub publisher: PublisherId,
    pub employee: EmployeeId,
    pub kind: PublisherKind,
}

/// Sender plus event, passed by reference to every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoffNotice {
    pub sender: Sender,
    pub event: LayoffEvent,
}

impl LayoffNotice {
    pub fn new(sender: Sender, event: LayoffEvent) -> Self {
        Self { sender, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::staff(EmployeeKind::Staff, PublisherKind::Staff)]
    #[case::sales(EmployeeKind::SalesPerson { achieved_target: 40 }, PublisherKind::SalesPerson)]
    #[case::board(EmployeeKind::BoardMember, PublisherKind::BoardMember)]
    fn publisher_kind_drops_the_variant_data(#[case] kind: EmployeeKind, #[case] expected: PublisherKind) {
        assert_eq!(PublisherKind::from(kind), expected);
    }

    #[test]
    fn publisher_kind_serializes_in_snake_case() {
        let s = serde_json::to_string(&PublisherKind::SalesPerson).unwrap();
        assert_eq!(s, "\"sales_person\"");
    }
}
