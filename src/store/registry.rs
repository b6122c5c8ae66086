//! Registry of live projections attached to a [`Store`](super::Store).
//!
//! The store never owns a projection. It keeps a handle -> `Weak` map and
//! pushes every successful mutation to the projections that are still
//! alive. Dead entries are pruned lazily while collecting subscribers, and
//! eagerly when a [`Registration`] guard is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

/// A successful mutation of the store, as seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    Inserted(i32),
    Deleted(i32),
}

/// Receiver of store mutations.
///
/// `elements` is the store content *after* the mutation, ascending.
pub(crate) trait Subscriber {
    fn apply(&mut self, mutation: Mutation, elements: &[i32]);
}

/// Identifies one registration inside a single registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(u64);

pub(crate) struct Registry {
    next_handle: u64,
    subscribers: FxHashMap<Handle, Weak<RefCell<dyn Subscriber>>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            next_handle: 0,
            subscribers: FxHashMap::default(),
        }
    }

    /// Allocates a handle without attaching anything to it yet.
    pub(crate) fn reserve(&mut self) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    pub(crate) fn attach(&mut self, handle: Handle, subscriber: Weak<RefCell<dyn Subscriber>>) {
        self.subscribers.insert(handle, subscriber);
    }

    pub(crate) fn detach(&mut self, handle: Handle) -> bool {
        self.subscribers.remove(&handle).is_some()
    }

    /// Upgrades every live subscriber, dropping entries whose target is gone.
    ///
    /// The returned strong references keep the projections alive for the
    /// duration of one notification round, after the registry borrow ends.
    pub(crate) fn live(&mut self) -> Vec<Rc<RefCell<dyn Subscriber>>> {
        let mut live = Vec::with_capacity(self.subscribers.len());
        self.subscribers.retain(|_, weak| match weak.upgrade() {
            Some(subscriber) => {
                live.push(subscriber);
                true
            }
            None => false,
        });
        live
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}

/// Guard tying a projection to its registry entry.
///
/// Dropping the guard detaches the entry. If the store is already gone,
/// or is in the middle of a notification round, nothing happens and the
/// dead `Weak` is pruned on the next round instead.
pub(crate) struct Registration {
    registry: Weak<RefCell<Registry>>,
    handle: Handle,
}

impl Registration {
    pub(crate) const fn new(registry: Weak<RefCell<Registry>>, handle: Handle) -> Self {
        Self { registry, handle }
    }

    pub(crate) const fn handle(&self) -> Handle {
        self.handle
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.try_borrow_mut()
            && registry.detach(self.handle)
        {
            log::trace!("detached projection {:?}", self.handle);
        }
    }
}
