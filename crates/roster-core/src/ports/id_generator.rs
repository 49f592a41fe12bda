//! IdGenerator port.
//!
//! Publishers and subscriptions get ULID instance ids. The timestamp part
//! comes from a `Clock`, so ids minted under a `FixedClock` share a
//! deterministic prefix.

use crate::domain::ids::{PublisherId, SubscriptionId};
use crate::ports::Clock;
use ulid::Ulid;

/// Mints instance ids.
pub trait IdGenerator {
    fn generate_publisher_id(&self) -> PublisherId;

    fn generate_subscription_id(&self) -> SubscriptionId;
}

/// ULID generator driven by a clock.
#[derive(Debug, Clone, Default)]
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_publisher_id(&self) -> PublisherId {
        PublisherId::from(self.next_ulid())
    }

    fn generate_subscription_id(&self) -> SubscriptionId {
        SubscriptionId::from(self.next_ulid())
    }
}
