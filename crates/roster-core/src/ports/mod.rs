//! Ports: seams where the core talks to the outside world.
//!
//! - `Clock`: "today", for age checks
//! - `IdGenerator`: instance ids for publishers and subscriptions
//! - `RemovalSink`: where removal records go

pub mod clock;
pub mod id_generator;
pub mod removal_sink;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::removal_sink::RemovalSink;
