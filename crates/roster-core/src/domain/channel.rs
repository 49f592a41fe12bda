//! Multicast lay-off channel.
//!
//! Each publisher owns one channel: an ordered list of handlers. Raising
//! calls every handler synchronously, in subscription order, before it
//! returns.
//!
//! ```text
//! raise(&notice)
//!     ├──► handler #1 ──► Keep     (stays attached)
//!     ├──► handler #2 ──► Release  (detached once it returns)
//!     └──► handler #N ──► Keep
//! ```
//!
//! Handlers cannot reach the channel while it is dispatching, so the only
//! way to detach during a raise is to return [`Delivery::Release`].

use tracing::debug;

use super::ids::{PublisherId, SubscriptionId};
use super::notice::LayoffNotice;

/// What a handler wants after seeing a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Stay subscribed.
    Keep,
    /// Detach this handler.
    Release,
}

/// Boxed handler stored on a channel.
pub type LayoffHandler = Box<dyn FnMut(&LayoffNotice) -> Delivery>;

/// Handle returned by `subscribe`; the only way to detach from outside a raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) publisher: PublisherId,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Publisher whose channel holds this handler.
    pub fn publisher(&self) -> PublisherId {
        self.publisher
    }
}

struct Entry {
    id: SubscriptionId,
    handler: LayoffHandler,
}

pub struct LayoffChannel {
    publisher: PublisherId,
    entries: Vec<Entry>,
}

impl LayoffChannel {
    pub fn new(publisher: PublisherId) -> Self {
        Self {
            publisher,
            entries: Vec::new(),
        }
    }

    /// Append a handler; it will run after every handler already attached.
    pub fn subscribe(&mut self, id: SubscriptionId, handler: LayoffHandler) -> Subscription {
        self.entries.push(Entry { id, handler });
        debug!(
            publisher = %self.publisher,
            subscription = %id,
            subscribers = self.entries.len(),
            "handler subscribed"
        );
        Subscription {
            id,
            publisher: self.publisher,
        }
    }

    /// Detach a handler. Returns false for handles of other channels or
    /// handlers already gone.
    pub fn unsubscribe(&mut self, subscription: &Subscription) -> bool {
        if subscription.publisher != self.publisher {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != subscription.id);
        self.entries.len() != before
    }

    /// Fan `notice` out to every handler in subscription order.
    pub fn raise(&mut self, notice: &LayoffNotice) {
        debug!(
            publisher = %self.publisher,
            employee = %notice.sender.employee,
            cause = %notice.event.cause(),
            subscribers = self.entries.len(),
            "raising lay-off"
        );
        let publisher = self.publisher;
        self.entries.retain_mut(|entry| match (entry.handler)(notice) {
            Delivery::Keep => true,
            Delivery::Release => {
                debug!(publisher = %publisher, subscription = %entry.id, "handler released");
                false
            }
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for LayoffChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoffChannel")
            .field("publisher", &self.publisher)
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cause::{LayoffCause, LayoffEvent};
    use crate::domain::ids::EmployeeId;
    use crate::domain::notice::{PublisherKind, Sender};
    use std::cell::RefCell;
    use std::rc::Rc;
    use ulid::Ulid;

    fn notice(publisher: PublisherId, cause: LayoffCause) -> LayoffNotice {
        LayoffNotice::new(
            Sender {
                publisher,
                employee: EmployeeId(1),
                kind: PublisherKind::Staff,
            },
            LayoffEvent::new(cause),
        )
    }

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, reply: Delivery) -> LayoffHandler {
        let log = Rc::clone(log);
        Box::new(move |_| {
            log.borrow_mut().push(name);
            reply
        })
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let publisher = PublisherId::from(Ulid::new());
        let mut channel = LayoffChannel::new(publisher);
        let log = Rc::new(RefCell::new(Vec::new()));

        channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "first", Delivery::Keep));
        channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "second", Delivery::Keep));
        channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "third", Delivery::Keep));

        channel.raise(&notice(publisher, LayoffCause::Resigned));

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn released_handlers_are_detached_after_the_raise() {
        let publisher = PublisherId::from(Ulid::new());
        let mut channel = LayoffChannel::new(publisher);
        let log = Rc::new(RefCell::new(Vec::new()));

        channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "once", Delivery::Release));
        channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "always", Delivery::Keep));

        channel.raise(&notice(publisher, LayoffCause::AgeGreaterThan60));
        channel.raise(&notice(publisher, LayoffCause::AgeGreaterThan60));

        assert_eq!(*log.borrow(), vec!["once", "always", "always"]);
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn unsubscribe_only_accepts_own_handles() {
        let publisher = PublisherId::from(Ulid::new());
        let mut channel = LayoffChannel::new(publisher);
        let mut other = LayoffChannel::new(PublisherId::from(Ulid::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let sub = channel.subscribe(SubscriptionId::from(Ulid::new()), recorder(&log, "a", Delivery::Keep));

        assert!(!other.unsubscribe(&sub));
        assert!(channel.unsubscribe(&sub));
        assert!(!channel.unsubscribe(&sub));
        assert!(channel.is_empty());

        channel.raise(&notice(publisher, LayoffCause::Resigned));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn raising_without_subscribers_is_a_no_op() {
        let publisher = PublisherId::from(Ulid::new());
        let mut channel = LayoffChannel::new(publisher);

        channel.raise(&notice(publisher, LayoffCause::FailedToMeetTarget));

        assert!(channel.is_empty());
    }
}
