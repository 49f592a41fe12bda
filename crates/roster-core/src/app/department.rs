//! Department: drops a member on any lay-off.

use std::rc::Rc;

use crate::app::membership::Group;
use crate::domain::{DepartmentPolicy, Employee, EmployeeId, GroupId, MembershipError};
use crate::ports::RemovalSink;

pub struct Department {
    group: Group<DepartmentPolicy>,
}

impl Department {
    pub fn new(id: u32, name: impl Into<String>, sink: Rc<dyn RemovalSink>) -> Self {
        Self {
            group: Group::new(id, name, DepartmentPolicy, sink),
        }
    }

    /// Add `employee` to the staff and listen for its lay-offs.
    pub fn add_staff(&self, employee: &mut Employee) -> Result<(), MembershipError> {
        self.group.join(employee)
    }

    pub fn id(&self) -> GroupId {
        self.group.id()
    }

    pub fn name(&self) -> &str {
        self.group.name()
    }

    /// Staff ids in join order.
    pub fn staff(&self) -> Vec<EmployeeId> {
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
