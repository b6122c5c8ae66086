//! The authoritative sorted set of integers.
//!
//! [`Store`] keeps its elements strictly ascending at all times: `insert`
//! places the value at its binary-search position and `delete` removes it
//! in place, so no resort pass is ever needed.
//!
//! # Live views
//!
//! Every [`View`](crate::view::View) built over a store registers its
//! projection with that store. After each successful mutation the store
//! pushes the change to all projections that are still alive:
//!
//! - `insert` projects the new value into each view and shifts cursors at
//!   or after the insertion point, so they keep denoting the same element.
//! - `delete` removes the value from each view. Cursors that denoted it
//!   become stale; cursors after it shift back by one.
//!
//! The store holds only `Weak` references to projections. Dropping the
//! last cursor of a view deregisters it; dropping the store leaves its
//! views usable with their last projection.
//!
//! # Examples
//!
//! ```rust
//! use viewstore::Store;
//!
//! let mut store = Store::new();
//! store.insert(3).unwrap();
//! store.insert(1).unwrap();
//! assert_eq!(store.size(), 2);
//! assert_eq!(store.as_slice(), &[1, 3]);
//!
//! assert!(store.insert(3).is_err());
//! store.delete(1).unwrap();
//! assert_eq!(store.as_slice(), &[3]);
//! ```

pub(crate) mod registry;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, ViewStoreError};
use registry::{Handle, Mutation, Registration, Registry, Subscriber};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Store`] instance.
///
/// Cursors compare only when they were built from stores with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl StoreId {
    fn next() -> Self {
        Self(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "store#{}", self.0)
    }
}

/// A sorted, duplicate-free collection of `i32` with live views.
///
/// Access is single-threaded: `Store` is neither `Send` nor `Sync`.
pub struct Store {
    id: StoreId,
    elements: Vec<i32>,
    registry: Rc<RefCell<Registry>>,
}

static_assertions::assert_not_impl_any!(Store: Send, Sync);

impl Store {
    /// Creates an empty store with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: StoreId::next(),
            elements: Vec::new(),
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Inserts `value`, keeping the elements ascending.
    ///
    /// Every live view observes the insertion (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns [`ViewStoreError::DuplicateValue`] if `value` is already
    /// present; the store and its views are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewstore::{Store, ViewStoreError};
    ///
    /// let mut store = Store::new();
    /// assert_eq!(store.insert(2), Ok(()));
    /// assert_eq!(store.insert(2), Err(ViewStoreError::DuplicateValue(2)));
    /// assert_eq!(store.size(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<()> {
        let position = match self.elements.binary_search(&value) {
            Ok(_) => return Err(ViewStoreError::DuplicateValue(value)),
            Err(position) => position,
        };
        self.elements.insert(position, value);

        let notified = self.notify(Mutation::Inserted(value));
        log::debug!("{}: inserted {value}, notified {notified} view(s)", self.id);
        Ok(())
    }

    /// Deletes `value`.
    ///
    /// Cursors of live views that denoted `value` are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ViewStoreError::NotFound`] if `value` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewstore::{Store, ViewStoreError};
    ///
    /// let mut store = Store::new();
    /// store.insert(5).unwrap();
    /// assert_eq!(store.delete(5), Ok(()));
    /// assert_eq!(store.delete(5), Err(ViewStoreError::NotFound(5)));
    /// ```
    pub fn delete(&mut self, value: i32) -> Result<()> {
        let position = self
            .elements
            .binary_search(&value)
            .map_err(|_| ViewStoreError::NotFound(value))?;
        self.elements.remove(position);

        let notified = self.notify(Mutation::Deleted(value));
        log::debug!("{}: deleted {value}, notified {notified} view(s)", self.id);
        Ok(())
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Same as [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the store holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `true` if `value` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.elements.binary_search(&value).is_ok()
    }

    /// Elements in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Iterates the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.elements.iter().copied()
    }

    /// Identity of this store, shared by every view built over it.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> StoreId {
        self.id
    }

    /// Number of projections currently registered with this store.
    ///
    /// Views created through `begin`, `end` or `clone` share the
    /// projection of the view they came from and are not counted twice.
    #[must_use]
    pub fn live_views(&self) -> usize {
        self.registry.borrow_mut().live().len()
    }

    pub(crate) fn reserve_registration(&self) -> Registration {
        let handle = self.registry.borrow_mut().reserve();
        Registration::new(Rc::downgrade(&self.registry), handle)
    }

    pub(crate) fn attach(&self, handle: Handle, subscriber: &Rc<RefCell<dyn Subscriber>>) {
        self.registry
            .borrow_mut()
            .attach(handle, Rc::downgrade(subscriber));
        log::trace!("{}: attached projection {handle:?}", self.id);
    }

    fn notify(&self, mutation: Mutation) -> usize {
        let subscribers = self.registry.borrow_mut().live();
        for subscriber in &subscribers {
            subscriber.borrow_mut().apply(mutation, &self.elements);
        }
        subscribers.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Store")
            .field("id", &self.id)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
