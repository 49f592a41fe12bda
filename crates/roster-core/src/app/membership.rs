//! Membership engine shared by departments and clubs.
//!
//! A [`Group`] keeps an ordered, duplicate-free list of members and attaches
//! one handler per member to that member's channel. On a notice the handler:
//!
//! 1. ignores senders that are not (or no longer) members, releasing itself;
//! 2. asks the group's [`MembershipPolicy`];
//! 3. on `Remove`, drops the member, emits a [`RemovalRecord`] and releases
//!    its subscription, so a removed employee stops calling into the group.
//!
//! The record is emitted after the membership borrow ends, so a sink may read
//! the group it is reporting for.
//!
//! The handler only holds a `Weak` reference: employees never keep a group
//! alive. If the group is gone, the handler releases itself on the next raise.
//!
//! Removal is terminal. A publisher that was removed cannot join again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::domain::{
    Delivery, Employee, EmployeeId, GroupId, GroupKind, LayoffNotice, MembershipDecision,
    MembershipError, MembershipPolicy, PublisherId, RemovalRecord, Sender, Subscription,
};
use crate::ports::RemovalSink;

#[derive(Debug, Clone, Copy)]
struct Member {
    sender: Sender,
    subscription: Subscription,
}

struct Membership<P> {
    id: GroupId,
    policy: P,
    members: Vec<Member>,
    removed: Vec<PublisherId>,
}

impl<P: MembershipPolicy> Membership<P> {
    fn position(&self, publisher: PublisherId) -> Option<usize> {
        self.members
            .iter()
            .position(|m| m.sender.publisher == publisher)
    }

    fn on_layoff(&mut self, notice: &LayoffNotice) -> (Delivery, Option<RemovalRecord>) {
        let Some(index) = self.position(notice.sender.publisher) else {
            return (Delivery::Release, None);
        };

        match self.policy.decide(&notice.sender, &notice.event) {
            MembershipDecision::Retain => (Delivery::Keep, None),
            MembershipDecision::Remove => {
                let member = self.members.remove(index);
                self.removed.push(member.sender.publisher);

                let record = RemovalRecord {
                    group: self.policy.group_kind(),
                    group_id: self.id,
                    employee: member.sender.employee,
                    cause: notice.event.cause(),
                };
                debug!(
                    group = %record.group,
                    group_id = %self.id,
                    employee = %record.employee,
                    subscription = %member.subscription.id(),
                    "member removed"
                );
                (Delivery::Release, Some(record))
            }
        }
    }
}

/// A named group whose membership reacts to lay-off notices.
pub struct Group<P> {
    id: GroupId,
    name: String,
    kind: GroupKind,
    sink: Rc<dyn RemovalSink>,
    state: Rc<RefCell<Membership<P>>>,
}

impl<P: MembershipPolicy + 'static> Group<P> {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        policy: P,
        sink: Rc<dyn RemovalSink>,
    ) -> Self {
        let id = GroupId(id);
        let kind = policy.group_kind();
        Self {
            id,
            name: name.into(),
            kind,
            sink,
            state: Rc::new(RefCell::new(Membership {
                id,
                policy,
                members: Vec::new(),
                removed: Vec::new(),
            })),
        }
    }

    /// Add `employee` and subscribe to its channel.
    pub fn join(&self, employee: &mut Employee) -> Result<(), MembershipError> {
        let publisher = employee.publisher_id();
        {
            let state = self.state.borrow();
            if state.position(publisher).is_some() {
                return Err(MembershipError::AlreadyMember {
                    group: self.kind,
                    group_id: self.id,
                    employee: employee.id(),
                });
            }
            if state.removed.contains(&publisher) {
                return Err(MembershipError::PreviouslyRemoved {
                    group: self.kind,
                    group_id: self.id,
                    employee: employee.id(),
                });
            }
        }

        let weak: Weak<RefCell<Membership<P>>> = Rc::downgrade(&self.state);
        let sink = Rc::clone(&self.sink);
        let subscription = employee.subscribe(move |notice| {
            let Some(state) = weak.upgrade() else {
                return Delivery::Release;
            };
            let (delivery, removed) = state.borrow_mut().on_layoff(notice);
            if let Some(record) = removed {
                sink.emit(&record);
            }
            delivery
        });

        self.state.borrow_mut().members.push(Member {
            sender: employee.sender(),
            subscription,
        });
        debug!(
            group = %self.kind,
            group_id = %self.id,
            employee = %employee.id(),
            "member joined"
        );
        Ok(())
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member ids in join order.
    pub fn member_ids(&self) -> Vec<EmployeeId> {
        self.state
            .borrow()
            .members
            .iter()
            .map(|m| m.sender.employee)
            .collect()
    }

    pub fn contains(&self, employee: &Employee) -> bool {
        self.state
            .borrow()
            .position(employee.publisher_id())
            .is_some()
    }

    /// True once `employee` has been removed by this group.
    pub fn has_removed(&self, employee: &Employee) -> bool {
        self.state
            .borrow()
            .removed
            .contains(&employee.publisher_id())
    }

    pub fn len(&self) -> usize {
        self.state.borrow().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartmentPolicy, LayoffCause};
    use crate::impls::MemorySink;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn staff(id: u32, stock: i32) -> Employee {
        Employee::staff(id, date(1980, 3, 20), stock).with_clock(FixedClock::on(date(2025, 1, 1)))
    }

    #[test]
    fn join_keeps_order_and_rejects_duplicates() {
        let sink = Rc::new(MemorySink::new());
        let group = Group::new(101, "Sales", DepartmentPolicy, sink);
        let mut a = staff(1, 0);
        let mut b = staff(2, 0);

        group.join(&mut b).unwrap();
        group.join(&mut a).unwrap();
        let err = group.join(&mut a).unwrap_err();

        assert!(matches!(err, MembershipError::AlreadyMember { employee, .. } if employee == EmployeeId(1)));
        assert_eq!(group.member_ids(), vec![EmployeeId(2), EmployeeId(1)]);
        assert_eq!(a.subscriber_count(), 1);
    }

    #[test]
    fn removal_releases_the_subscription() {
        let sink = Rc::new(MemorySink::new());
        let group = Group::new(101, "Sales", DepartmentPolicy, sink.clone());
        let mut e = staff(2, -5);
        group.join(&mut e).unwrap();

        e.end_of_year_operation();
        e.end_of_year_operation();

        assert!(!group.contains(&e));
        assert!(group.has_removed(&e));
        assert_eq!(e.subscriber_count(), 0);
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].cause, LayoffCause::VacationStockNegative);
    }

    #[test]
    fn removed_members_cannot_rejoin() {
        let sink = Rc::new(MemorySink::new());
        let group = Group::new(101, "Sales", DepartmentPolicy, sink);
        let mut e = staff(2, -5);
        group.join(&mut e).unwrap();
        e.end_of_year_operation();

        let err = group.join(&mut e).unwrap_err();

        assert!(matches!(err, MembershipError::PreviouslyRemoved { .. }));
        assert!(group.is_empty());
    }

    #[test]
    fn members_are_keyed_by_instance_not_business_id() {
        let sink = Rc::new(MemorySink::new());
        let group = Group::new(101, "Sales", DepartmentPolicy, sink.clone());
        let mut first = staff(7, -1);
        let mut twin = staff(7, 10);
        group.join(&mut first).unwrap();
        group.join(&mut twin).unwrap();

        first.end_of_year_operation();

        assert!(!group.contains(&first));
        assert!(group.contains(&twin));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn dropped_group_handlers_release_themselves() {
        let sink = Rc::new(MemorySink::new());
        let mut e = staff(2, -5);
        {
            let group = Group::new(101, "Sales", DepartmentPolicy, sink.clone());
            group.join(&mut e).unwrap();
        }
        assert_eq!(e.subscriber_count(), 1);

        e.end_of_year_operation();

        assert_eq!(e.subscriber_count(), 0);
        assert!(sink.is_empty());
    }

    /// Reports the group's size at the moment each record arrives.
    struct HeadcountSink {
        group: RefCell<Weak<Group<DepartmentPolicy>>>,
        seen: RefCell<Vec<(EmployeeId, usize, Vec<EmployeeId>)>>,
    }

    impl RemovalSink for HeadcountSink {
        fn emit(&self, record: &RemovalRecord) {
            if let Some(group) = self.group.borrow().upgrade() {
                self.seen
                    .borrow_mut()
                    .push((record.employee, group.len(), group.member_ids()));
            }
        }
    }

    #[test]
    fn sink_can_read_the_group_it_reports_for() {
        let sink = Rc::new(HeadcountSink {
            group: RefCell::new(Weak::new()),
            seen: RefCell::new(Vec::new()),
        });
        let group = Rc::new(Group::new(101, "Sales", DepartmentPolicy, sink.clone()));
        *sink.group.borrow_mut() = Rc::downgrade(&group);
        let mut leaving = staff(2, -1);
        let mut staying = staff(3, 5);
        group.join(&mut leaving).unwrap();
        group.join(&mut staying).unwrap();

        leaving.end_of_year_operation();

        assert_eq!(
            *sink.seen.borrow(),
            vec![(EmployeeId(2), 1, vec![EmployeeId(3)])]
        );
        assert!(!group.contains(&leaving));
    }
}
