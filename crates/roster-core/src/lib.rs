//! roster-core
//!
//! Lay-off notifications and group membership reconciliation.
//!
//! An [`Employee`](domain::Employee) owns a multicast channel. Departments
//! and clubs subscribe when an employee joins them; when the employee raises
//! a lay-off, every subscribed group decides on its own whether to drop it.
//!
//! # Modules
//! - **domain**: causes, employees, the channel, membership policies, records
//! - **ports**: `Clock`, `IdGenerator`, `RemovalSink`
//! - **app**: `Department`, `Club` and the shared membership engine
//! - **impls**: sinks (memory, tracing, console, fan-out)

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Club, Department};
pub use domain::{Employee, EmployeeKind, LayoffCause, LayoffEvent, RemovalRecord};
