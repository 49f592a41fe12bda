//! Identifiers.
//!
//! Two families live here:
//! - **Business ids** (`EmployeeId`, `GroupId`): plain integers assigned by
//!   whoever builds the organization. They are printed in removal records and
//!   are not checked for uniqueness.
//! - **Instance ids** (`PublisherId`, `SubscriptionId`): ULID-backed, generic
//!   over a marker type, so a publisher id can never be mixed up with a
//!   subscription id. Group membership is keyed by `PublisherId`, which makes
//!   two employees sharing a business id still distinct members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for instance id kinds.
pub trait IdMarker: Send + Sync + 'static {
    /// Display prefix, e.g. `"pub-"`.
    fn prefix() -> &'static str;
}

/// ULID-backed instance id. `T` only exists at compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Publisher (employee instance) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublisherMarker {}

impl IdMarker for PublisherMarker {
    fn prefix() -> &'static str {
        "pub-"
    }
}

/// Subscription marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubscriptionMarker {}

impl IdMarker for SubscriptionMarker {
    fn prefix() -> &'static str {
        "sub-"
    }
}

/// Identity of one employee instance.
pub type PublisherId = Id<PublisherMarker>;

/// Identity of one handler attached to one channel.
pub type SubscriptionId = Id<SubscriptionMarker>;

/// Business id of an employee. Printed as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Business id of a department or club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GroupId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
