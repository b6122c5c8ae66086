//! Traversal views over a [`Store`].
//!
//! A [`View`] is a projection of the store's contents plus a cursor into
//! it. The projection is computed when the view is built and owned by the
//! view, not borrowed from the store. Three policies are provided:
//!
//! - [`AscendingView`]: strictly ascending order.
//! - [`CrossView`]: smallest, largest, next-smallest, next-largest, ...
//! - [`PrimeView`]: ascending order restricted to prime values.
//!
//! # Cursors
//!
//! Every `View` value is also a cursor. [`View::begin`], [`View::end`] and
//! `clone` return further cursors over the *same* projection, each with an
//! independent position. Positions are logical indices, rebased whenever
//! the store reports a mutation:
//!
//! | Store mutation | Cursor before the change | Cursor on the changed element | Cursor after it |
//! |----------------|--------------------------|-------------------------------|-----------------|
//! | `insert`       | unchanged                | n/a                           | shifted forward |
//! | `delete`       | unchanged                | stale                         | shifted back    |
//!
//! An `end` cursor stays at `end`. For [`CrossView`] the projection is
//! recomputed and each cursor is moved onto the element it denoted.
//!
//! # Examples
//!
#![cfg_attr(feature = "ascending", doc = "```rust")]
#![cfg_attr(not(feature = "ascending"), doc = "```rust,ignore")]
//! use viewstore::{AscendingView, Store, ViewStoreError};
//!
//! let mut store = Store::new();
//! store.insert(2).unwrap();
//! store.insert(3).unwrap();
//!
//! let mut cursor = AscendingView::new(&store);
//! cursor.advance().unwrap();
//! assert_eq!(cursor.dereference(), Ok(3));
//!
//! // Inserting before the cursor does not move it off its element.
//! store.insert(1).unwrap();
//! assert_eq!(cursor.dereference(), Ok(3));
//!
//! // Deleting the element under the cursor invalidates it.
//! store.delete(3).unwrap();
//! assert_eq!(cursor.dereference(), Err(ViewStoreError::StaleCursor));
//! ```

#[cfg(feature = "ascending")]
mod ascending;
mod cursor;
#[cfg(feature = "cross")]
mod cross;
mod policy;
#[cfg(feature = "prime")]
mod prime;

#[cfg(feature = "ascending")]
pub use ascending::{Ascending, AscendingView};
#[cfg(feature = "cross")]
pub use cross::{Cross, CrossView};
pub use policy::{Edit, Policy, PolicyKind};
#[cfg(feature = "prime")]
pub use prime::{Prime, PrimeView, is_prime};

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{Result, ViewStoreError};
use crate::store::registry::{Mutation, Registration, Subscriber};
use crate::store::{Store, StoreId};
use cursor::Position;

/// Most projections are walked by a handful of cursors at once.
const INLINE_CURSORS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CursorSlot(u64);

/// A projection shared by all cursors derived from one `View::new` call.
struct ProjectionState<P: Policy> {
    store: StoreId,
    values: Vec<i32>,
    cursors: SmallVec<[(CursorSlot, Position); INLINE_CURSORS]>,
    next_slot: u64,
    // Dropped with the projection, which detaches it from the store.
    _registration: Registration,
    _policy: PhantomData<P>,
}

impl<P: Policy> ProjectionState<P> {
    fn new(store: StoreId, values: Vec<i32>, registration: Registration) -> Self {
        Self {
            store,
            values,
            cursors: SmallVec::new(),
            next_slot: 0,
            _registration: registration,
            _policy: PhantomData,
        }
    }

    fn open(&mut self, position: Position) -> CursorSlot {
        let slot = CursorSlot(self.next_slot);
        self.next_slot += 1;
        self.cursors.push((slot, position));
        slot
    }

    fn close(&mut self, slot: CursorSlot) {
        self.cursors.retain(|(open, _)| *open != slot);
    }

    fn position(&self, slot: CursorSlot) -> Position {
        self.cursors
            .iter()
            .find(|(open, _)| *open == slot)
            .map_or(Position::Stale, |(_, position)| *position)
    }

    fn set_position(&mut self, slot: CursorSlot, position: Position) {
        if let Some(entry) = self.cursors.iter_mut().find(|(open, _)| *open == slot) {
            entry.1 = position;
        }
    }

    fn value_at(&self, position: Position) -> Result<i32> {
        let index = position.index()?;
        self.values
            .get(index)
            .copied()
            .ok_or(ViewStoreError::StaleCursor)
    }
}

impl<P: Policy> Subscriber for ProjectionState<P> {
    fn apply(&mut self, mutation: Mutation, elements: &[i32]) {
        let edit = match mutation {
            Mutation::Inserted(value) => P::insert(&mut self.values, value, elements),
            Mutation::Deleted(value) => P::delete(&mut self.values, value, elements),
        };
        if edit == Edit::Unchanged {
            return;
        }
        if matches!(edit, Edit::Rebuilt(_)) {
            log::trace!("{}: rebuilt {:?} projection", self.store, P::KIND);
        }

        for (slot, position) in &mut self.cursors {
            let rebased = position.rebase(&edit, &self.values);
            if rebased == Position::Stale && *position != Position::Stale {
                log::trace!("{}: {:?} cursor {} invalidated", self.store, P::KIND, slot.0);
            }
            *position = rebased;
        }
    }
}

/// A projection of a [`Store`] together with a cursor into it.
///
/// See the [module documentation](self) for the consistency rules between
/// store mutations and live cursors.
pub struct View<P: Policy> {
    projection: Rc<RefCell<ProjectionState<P>>>,
    slot: CursorSlot,
}

impl<P: Policy> View<P> {
    /// Builds the projection of `store`'s current contents and registers
    /// it with the store. The returned cursor is at `begin`.
    #[must_use]
    pub fn new(store: &Store) -> Self {
        let registration = store.reserve_registration();
        let handle = registration.handle();
        let values = P::project(store.as_slice());
        let first = Position::first(values.len());

        let mut state = ProjectionState::<P>::new(store.id(), values, registration);
        let slot = state.open(first);
        let projection = Rc::new(RefCell::new(state));

        let subscriber: Rc<RefCell<dyn Subscriber>> = projection.clone();
        store.attach(handle, &subscriber);

        Self { projection, slot }
    }

    fn sibling(&self, position: Position) -> Self {
        let slot = self.projection.borrow_mut().open(position);
        Self {
            projection: Rc::clone(&self.projection),
            slot,
        }
    }

    fn current(&self) -> Position {
        self.projection.borrow().position(self.slot)
    }

    /// A new cursor on the first element of this projection, or at `end`
    /// if the projection is empty.
    #[must_use]
    pub fn begin(&self) -> Self {
        let len = self.projection.borrow().values.len();
        self.sibling(Position::first(len))
    }

    /// A new cursor one past the last element of this projection.
    #[must_use]
    pub fn end(&self) -> Self {
        self.sibling(Position::End)
    }

    /// Moves to the next element, or to `end` after the last one.
    ///
    /// # Errors
    ///
    /// [`ViewStoreError::ExhaustedCursor`] if already at `end`,
    /// [`ViewStoreError::StaleCursor`] if the current element was deleted.
    pub fn advance(&mut self) -> Result<&mut Self> {
        let mut projection = self.projection.borrow_mut();
        let next = projection
            .position(self.slot)
            .next(projection.values.len())?;
        projection.set_position(self.slot, next);
        drop(projection);
        Ok(self)
    }

    /// The value at the cursor.
    ///
    /// # Errors
    ///
    /// [`ViewStoreError::ExhaustedCursor`] at `end`,
    /// [`ViewStoreError::StaleCursor`] if the element was deleted.
    pub fn dereference(&self) -> Result<i32> {
        let projection = self.projection.borrow();
        projection.value_at(projection.position(self.slot))
    }

    /// `true` if the cursor is one past the last element.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current() == Position::End
    }

    /// `true` if the element under the cursor was deleted from the store.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.current() == Position::Stale
    }

    fn ensure_compatible<Q: Policy>(&self, other: &View<Q>) -> Result<()> {
        if P::KIND != Q::KIND || self.store_id() != other.store_id() {
            return Err(ViewStoreError::IncompatibleCursors);
        }
        Ok(())
    }

    /// Cursor equality.
    ///
    /// Two cursors are equal when both are at `end`, or both denote the
    /// same index holding the same value.
    ///
    /// # Errors
    ///
    /// [`ViewStoreError::IncompatibleCursors`] if the cursors come from
    /// different stores or policies, [`ViewStoreError::StaleCursor`] if
    /// either was invalidated.
    pub fn equals<Q: Policy>(&self, other: &View<Q>) -> Result<bool> {
        self.ensure_compatible(other)?;
        let left = self.projection.borrow();
        let right = other.projection.borrow();
        match (left.position(self.slot), right.position(other.slot)) {
            (Position::Stale, _) | (_, Position::Stale) => Err(ViewStoreError::StaleCursor),
            (Position::End, Position::End) => Ok(true),
            (Position::At(this), Position::At(that)) => {
                Ok(this == that && left.values.get(this) == right.values.get(that))
            }
            _ => Ok(false),
        }
    }

    /// Negation of [`equals`](Self::equals), with the same errors.
    ///
    /// # Errors
    ///
    /// See [`equals`](Self::equals).
    pub fn not_equals<Q: Policy>(&self, other: &View<Q>) -> Result<bool> {
        self.equals(other).map(|equal| !equal)
    }

    fn ordered_values<Q: Policy>(&self, other: &View<Q>) -> Result<(i32, i32)> {
        self.ensure_compatible(other)?;
        Ok((self.dereference()?, other.dereference()?))
    }

    /// `true` if this cursor's value is smaller than `other`'s.
    ///
    /// # Errors
    ///
    /// [`ViewStoreError::IncompatibleCursors`] for unrelated cursors, then
    /// [`ViewStoreError::ExhaustedCursor`] or [`ViewStoreError::StaleCursor`]
    /// if either side has no value.
    pub fn less_than<Q: Policy>(&self, other: &View<Q>) -> Result<bool> {
        self.ordered_values(other).map(|(this, that)| this < that)
    }

    /// `true` if this cursor's value is greater than `other`'s.
    ///
    /// # Errors
    ///
    /// Same as [`less_than`](Self::less_than).
    pub fn greater_than<Q: Policy>(&self, other: &View<Q>) -> Result<bool> {
        self.ordered_values(other).map(|(this, that)| this > that)
    }

    /// Makes this cursor a copy of `other`: same projection, same position.
    ///
    /// # Errors
    ///
    /// [`ViewStoreError::IncompatibleCursors`] if `other` was built from a
    /// different store; `self` is left unchanged.
    pub fn assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_compatible(other)?;
        if Rc::ptr_eq(&self.projection, &other.projection) {
            let position = other.current();
            self.projection
                .borrow_mut()
                .set_position(self.slot, position);
            return Ok(());
        }
        *self = other.clone();
        Ok(())
    }

    /// Length of the projection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projection.borrow().values.len()
    }

    /// `true` if the projection has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projection.borrow().values.is_empty()
    }

    /// A copy of the whole projection, in traversal order.
    #[must_use]
    pub fn values(&self) -> Vec<i32> {
        self.projection.borrow().values.clone()
    }

    /// Identity of the store this view was built from.
    #[must_use]
    pub fn store_id(&self) -> StoreId {
        self.projection.borrow().store
    }

    /// The policy tag of this view.
    #[must_use]
    pub const fn policy(&self) -> PolicyKind {
        P::KIND
    }

    /// Iterates the values from this cursor's position onward.
    ///
    /// The iterator walks its own cursor, so `self` is not advanced. It
    /// stops at `end`, or early if its element is deleted meanwhile.
    #[must_use]
    pub fn iter(&self) -> Values<P> {
        Values {
            cursor: self.clone(),
        }
    }
}

impl<P: Policy> Clone for View<P> {
    /// An independent cursor at the same position of the same projection.
    fn clone(&self) -> Self {
        self.sibling(self.current())
    }
}

impl<P: Policy> Drop for View<P> {
    fn drop(&mut self) {
        if let Ok(mut projection) = self.projection.try_borrow_mut() {
            projection.close(self.slot);
        }
    }
}

impl<P: Policy> fmt::Debug for View<P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = self.projection.borrow();
        formatter
            .debug_struct("View")
            .field("policy", &P::KIND)
            .field("store", &projection.store)
            .field("values", &projection.values)
            .field("position", &projection.position(self.slot))
            .finish()
    }
}

impl<'a, P: Policy> IntoIterator for &'a View<P> {
    type Item = i32;
    type IntoIter = Values<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`View::iter`].
pub struct Values<P: Policy> {
    cursor: View<P>,
}

impl<P: Policy> Iterator for Values<P> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.cursor.dereference().ok()?;
        self.cursor.advance().ok()?;
        Some(value)
    }
}

impl<P: Policy> fmt::Debug for Values<P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Values")
            .field("cursor", &self.cursor)
            .finish()
    }
}
