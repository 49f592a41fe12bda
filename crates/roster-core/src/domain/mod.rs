//! Domain model: causes, publishers, the multicast channel, policies.

pub mod cause;
pub mod channel;
pub mod employee;
pub mod errors;
pub mod ids;
pub mod notice;
pub mod policy;
pub mod removal;

pub use cause::{LayoffCause, LayoffEvent};
pub use channel::{Delivery, LayoffChannel, LayoffHandler, Subscription};
pub use employee::{Employee, EmployeeKind, RETIREMENT_AGE};
pub use errors::{EmployeeError, MembershipError};
pub use ids::{EmployeeId, GroupId, PublisherId, SubscriptionId};
pub use notice::{LayoffNotice, PublisherKind, Sender};
pub use policy::{ClubPolicy, DepartmentPolicy, MembershipDecision, MembershipPolicy};
pub use removal::{GroupKind, RemovalRecord};
