//! Club: drops a member only when its vacation stock went negative.
//! Board members are never dropped.

use std::rc::Rc;

use crate::app::membership::Group;
use crate::domain::{ClubPolicy, Employee, EmployeeId, GroupId, MembershipError};
use crate::ports::RemovalSink;

pub struct Club {
    group: Group<ClubPolicy>,
}

impl Club {
    pub fn new(id: u32, name: impl Into<String>, sink: Rc<dyn RemovalSink>) -> Self {
        Self {
            group: Group::new(id, name, ClubPolicy, sink),
        }
    }

    pub fn add_member(&self, employee: &mut Employee) -> Result<(), MembershipError> {
        self.group.join(employee)
    }

    pub fn id(&self) -> GroupId {
        self.group.id()
    }

    pub fn name(&self) -> &str {
        self.group.name()
    }

    /// Member ids in join order.
    pub fn members(&self) -> Vec<EmployeeId> {
        self.group.member_ids()
    }

    pub fn contains(&self, employee: &Employee) -> bool {
        self.group.contains(employee)
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }
}
