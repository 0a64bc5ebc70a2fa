//! Synchronous in-process broadcast of color-mode changes.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use platform_host::GlobalEventDispatcher;

use crate::ChangeEvent;

type Subscriber = Rc<dyn Fn(&ChangeEvent)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, Subscriber)>,
}

impl BusInner {
    fn contains(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(existing, _)| *existing == id)
    }
}

struct Mirror {
    dispatcher: Rc<dyn GlobalEventDispatcher>,
    event_name: String,
}

/// Observer list delivering every [`ChangeEvent`] to subscribers in registration order, before
/// [`ChangeBus::broadcast`] returns.
///
/// Clones and [`ChangeBus::with_mirror`] handles share the subscriber list.
#[derive(Clone, Default)]
pub struct ChangeBus {
    inner: Rc<RefCell<BusInner>>,
    mirror: Option<Rc<Mirror>>,
}

impl std::fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeBus")
            .field("subscribers", &self.subscriber_count())
            .field(
                "mirror",
                &self.mirror.as_ref().map(|mirror| mirror.event_name.as_str()),
            )
            .finish()
    }
}

impl ChangeBus {
    /// Handle on the same subscriber list that also re-publishes each of its broadcasts as a
    /// page-level `event_name` event.
    pub fn with_mirror(
        &self,
        dispatcher: Rc<dyn GlobalEventDispatcher>,
        event_name: impl Into<String>,
    ) -> Self {
        Self {
            inner: self.inner.clone(),
            mirror: Some(Rc::new(Mirror {
                dispatcher,
                event_name: event_name.into(),
            })),
        }
    }

    /// Registers `subscriber`; delivery stops when the returned handle is unsubscribed or dropped.
    pub fn subscribe(&self, subscriber: impl Fn(&ChangeEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `event` to every current subscriber, then mirrors it to the page.
    ///
    /// Subscribers may subscribe or unsubscribe during delivery. A subscriber removed mid-delivery
    /// is not called; one added mid-delivery first hears the next broadcast.
    pub fn broadcast(&self, event: &ChangeEvent) {
        let snapshot: Vec<(u64, Subscriber)> = self.inner.borrow().subscribers.clone();
        for (id, subscriber) in snapshot {
            if self.inner.borrow().contains(id) {
                subscriber(event);
            }
        }

        if let Some(mirror) = &self.mirror {
            let detail = match serde_json::to_string(event) {
                Ok(detail) => detail,
                Err(err) => {
                    log::warn!("color-mode event serialization failed: {err}");
                    return;
                }
            };
            if let Err(err) = mirror.dispatcher.dispatch(&mirror.event_name, &detail) {
                log::debug!("color-mode page event skipped: {err}");
            }
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Handle for one [`ChangeBus`] subscriber.
#[must_use = "dropping a subscription unsubscribes it"]
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl Subscription {
    /// Stops delivery to this subscriber.
    pub fn unsubscribe(self) {}

    fn detach(&self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut()
                .subscribers
                .retain(|(existing, _)| *existing != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
