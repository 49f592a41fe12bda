//! Employee: the publisher side.
//!
//! An employee owns a [`LayoffChannel`] and raises on it from a handful of
//! business operations. What the yearly evaluation raises depends on the
//! employee's [`EmployeeKind`]; that choice is a pure function so it can be
//! checked without any channel at all.

use std::rc::Rc;

use chrono::{Datelike, NaiveDate};

use super::cause::{LayoffCause, LayoffEvent};
use super::channel::{Delivery, LayoffChannel, Subscription};
use super::errors::EmployeeError;
use super::ids::{EmployeeId, PublisherId};
use super::notice::{LayoffNotice, Sender};
use crate::ports::{Clock, IdGenerator, SystemClock, UlidGenerator};

/// Age strictly above which the yearly evaluation lays an employee off.
pub const RETIREMENT_AGE: i32 = 60;

/// Employee variants and their variant-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeKind {
    Staff,
    SalesPerson { achieved_target: i32 },
    BoardMember,
}

impl EmployeeKind {
    /// Cause raised by the end-of-year evaluation, if any.
    ///
    /// - Staff: vacation deficit first, then age. Never both.
    /// - SalesPerson: age only; vacation stock is not checked.
    /// - BoardMember: nothing.
    pub fn end_of_year_cause(&self, vacation_stock: i32, age: i32) -> Option<LayoffCause> {
        match self {
            EmployeeKind::Staff if vacation_stock < 0 => Some(LayoffCause::VacationStockNegative),
            EmployeeKind::Staff | EmployeeKind::SalesPerson { .. } if age > RETIREMENT_AGE => {
                Some(LayoffCause::AgeGreaterThan60)
            }
            _ => None,
        }
    }
}

pub struct Employee {
    id: EmployeeId,
    publisher: PublisherId,
    birth_date: NaiveDate,
    vacation_stock: i32,
    kind: EmployeeKind,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
    channel: LayoffChannel,
}

impl Employee {
    pub fn new(
        id: u32,
        birth_date: NaiveDate,
        vacation_stock: i32,
        kind: EmployeeKind,
    ) -> Self {
        let ids: Rc<dyn IdGenerator> = Rc::new(UlidGenerator::new(SystemClock));
        let publisher = ids.generate_publisher_id();
        Self {
            id: EmployeeId(id),
            publisher,
            birth_date,
            vacation_stock,
            kind,
            clock: Rc::new(SystemClock),
            ids,
            channel: LayoffChannel::new(publisher),
        }
    }

    pub fn staff(id: u32, birth_date: NaiveDate, vacation_stock: i32) -> Self {
        Self::new(id, birth_date, vacation_stock, EmployeeKind::Staff)
    }

    pub fn sales_person(
        id: u32,
        birth_date: NaiveDate,
        vacation_stock: i32,
        achieved_target: i32,
    ) -> Self {
        Self::new(
            id,
            birth_date,
            vacation_stock,
            EmployeeKind::SalesPerson { achieved_target },
        )
    }

    pub fn board_member(id: u32, birth_date: NaiveDate, vacation_stock: i32) -> Self {
        Self::new(id, birth_date, vacation_stock, EmployeeKind::BoardMember)
    }

    /// Replace the clock used for age checks.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Share one clock between several employees.
    pub fn with_shared_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the generator used for subscription ids.
    pub fn with_id_generator(mut self, ids: Rc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn publisher_id(&self) -> PublisherId {
        self.publisher
    }

    pub fn kind(&self) -> EmployeeKind {
        self.kind
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn vacation_stock(&self) -> i32 {
        self.vacation_stock
    }

    /// Direct assignment. Negative values are allowed and only matter at
    /// the next evaluation.
    pub fn set_vacation_stock(&mut self, vacation_stock: i32) {
        self.vacation_stock = vacation_stock;
    }

    pub fn achieved_target(&self) -> Option<i32> {
        match self.kind {
            EmployeeKind::SalesPerson { achieved_target } => Some(achieved_target),
            _ => None,
        }
    }

    pub fn set_achieved_target(&mut self, value: i32) -> Result<(), EmployeeError> {
        match &mut self.kind {
            EmployeeKind::SalesPerson { achieved_target } => {
                *achieved_target = value;
                Ok(())
            }
            _ => Err(EmployeeError::NotASalesPerson(self.id)),
        }
    }

    /// Identity handed to observers with every notice.
    pub fn sender(&self) -> Sender {
        Sender {
            publisher: self.publisher,
            employee: self.id,
            kind: self.kind.into(),
        }
    }

    /// Year difference only; the birthday within the year is ignored.
    pub fn age(&self) -> i32 {
        self.age_on(self.clock.today())
    }

    pub fn age_on(&self, date: NaiveDate) -> i32 {
        date.year() - self.birth_date.year()
    }

    /// Deduct the requested days and raise if the stock went negative.
    ///
    /// The day count is not validated: `to` before `from` gives a negative
    /// count, which adds to the stock and returns true.
    pub fn request_vacation(&mut self, from: NaiveDate, to: NaiveDate) -> bool {
        let days = (to - from).num_days();
        self.vacation_stock = clamp_stock(i64::from(self.vacation_stock).saturating_sub(days));

        if self.vacation_stock < 0 {
            self.raise(LayoffCause::VacationStockNegative);
            return false;
        }
        true
    }

    /// Yearly evaluation; raises at most one cause, chosen by the kind.
    pub fn end_of_year_operation(&mut self) {
        if let Some(cause) = self.kind.end_of_year_cause(self.vacation_stock, self.age()) {
            self.raise(cause);
        }
    }

    /// Sales people only. Raises `FailedToMeetTarget` and returns false when
    /// the achieved target is below `quota`.
    pub fn check_target(&mut self, quota: i32) -> Result<bool, EmployeeError> {
        let achieved = self
            .achieved_target()
            .ok_or(EmployeeError::NotASalesPerson(self.id))?;

        if achieved < quota {
            self.raise(LayoffCause::FailedToMeetTarget);
            return Ok(false);
        }
        Ok(true)
    }

    /// Board members only. Always raises `Resigned`.
    pub fn resign(&mut self) -> Result<(), EmployeeError> {
        if self.kind != EmployeeKind::BoardMember {
            return Err(EmployeeError::NotABoardMember(self.id));
        }
        self.raise(LayoffCause::Resigned);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&LayoffNotice) -> Delivery + 'static,
    {
        let id = self.ids.generate_subscription_id();
        self.channel.subscribe(id, Box::new(handler))
    }

    pub fn unsubscribe(&mut self, subscription: &Subscription) -> bool {
        self.channel.unsubscribe(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.channel.len()
    }

    fn raise(&mut self, cause: LayoffCause) {
        let notice = LayoffNotice::new(self.sender(), LayoffEvent::new(cause));
        self.channel.raise(&notice);
    }
}

impl std::fmt::Debug for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("publisher", &self.publisher)
            .field("birth_date", &self.birth_date)
            .field("vacation_stock", &self.vacation_stock)
            .field("kind", &self.kind)
            .field("channel", &self.channel)
            .finish()
    }
}

fn clamp_stock(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
