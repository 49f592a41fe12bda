//! The fixed demonstration sequence.
//!
//! Five employees join the "Sales" department and the "Employee Club", all
//! five go through the yearly evaluation, then the board member resigns.

use std::rc::Rc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use roster_core::domain::{EmployeeError, MembershipError};
use roster_core::ports::{Clock, RemovalSink};
use roster_core::{Club, Department, Employee, EmployeeKind};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Membership(#[from] MembershipError),

    #[error(transparent)]
    Employee(#[from] EmployeeError),

    #[error("invalid fixture date {0}-{1:02}-{2:02}")]
    Fixture(i32, u32, u32),
}

/// Everything the demo built, for inspection after the run.
pub struct Organization {
    pub department: Department,
    pub club: Club,
    pub employees: Vec<Employee>,
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, DemoError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or(DemoError::Fixture(y, m, d))
}

/// Build the population and groups, wired but not yet evaluated.
pub fn build(clock: Rc<dyn Clock>, sink: Rc<dyn RemovalSink>) -> Result<Organization, DemoError> {
    let employees = vec![
        Employee::staff(1, date(1955, 5, 15)?, 10),
        Employee::staff(2, date(1980, 3, 20)?, -5),
        Employee::sales_person(3, date(1995, 7, 25)?, 20, 90),
        Employee::sales_person(4, date(1985, 10, 5)?, 10, 50),
        Employee::board_member(5, date(1970, 2, 14)?, 0),
    ];
    let mut employees: Vec<Employee> = employees
        .into_iter()
        .map(|e| e.with_shared_clock(Rc::clone(&clock)))
        .collect();

    let department = Department::new(101, "Sales", Rc::clone(&sink));
    let club = Club::new(1, "Employee Club", sink);

    for employee in employees.iter_mut() {
        department.add_staff(employee)?;
    }
    for employee in employees.iter_mut() {
        club.add_member(employee)?;
    }
    info!(
        department = department.name(),
        club = club.name(),
        members = employees.len(),
        "organization wired"
    );

    Ok(Organization {
        department,
        club,
        employees,
    })
}

/// Yearly evaluation for everyone, then every board member resigns.
pub fn run(org: &mut Organization) -> Result<(), DemoError> {
    for employee in org.employees.iter_mut() {
        employee.end_of_year_operation();
    }
    for employee in org.employees.iter_mut() {
        if employee.kind() == EmployeeKind::BoardMember {
            employee.resign()?;
        }
    }
    info!(
        department_left = org.department.len(),
        club_left = org.club.len(),
        "demo finished"
    );
    Ok(())
}
