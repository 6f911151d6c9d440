//! Ordered listener registries.

use super::events::{ChangedEvent, ChangingEvent, FailureReason};

/// Pre-change listener; may set `cancel` on the event.
pub type ChangingListener<S> = Box<dyn Fn(&mut ChangingEvent<S>) + Send + Sync>;

/// Post-change listener.
pub type ChangedListener<S> = Box<dyn Fn(&ChangedEvent<S>) + Send + Sync>;

/// Single reason-carrying failure callback.
pub type FailureCallback = Box<dyn Fn(FailureReason) + Send + Sync>;

/// Handle returned on subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listeners kept in registration order.
pub(crate) struct Listeners<L> {
    entries: Vec<(ListenerId, L)>,
}

impl<L> Listeners<L> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, id: ListenerId, listener: L) {
        self.entries.push((id, listener));
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &L> {
        self.entries.iter().map(|(_, listener)| listener)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Hands out listener ids that are unique per manager.
#[derive(Debug, Default)]
pub(crate) struct IdSource {
    next: u64,
}

impl IdSource {
    pub(crate) fn next(&mut self) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        id
    }
}
