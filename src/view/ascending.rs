//! Strictly ascending traversal.

use super::policy::{Edit, Policy, PolicyKind, Sealed, delete_sorted, insert_sorted};
use super::View;

/// Ascending policy: the projection is the store's elements, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ascending {}

impl Sealed for Ascending {}

impl Policy for Ascending {
    const KIND: PolicyKind = PolicyKind::Ascending;

    fn project(elements: &[i32]) -> Vec<i32> {
        elements.to_vec()
    }

    fn insert(projection: &mut Vec<i32>, value: i32, _elements: &[i32]) -> Edit {
        insert_sorted(projection, value)
    }

    fn delete(projection: &mut Vec<i32>, value: i32, _elements: &[i32]) -> Edit {
        delete_sorted(projection, value)
    }
}

/// Cursor over the store's elements, smallest first.
///
/// # Examples
///
/// ```rust
/// use viewstore::{AscendingView, Store};
///
/// let mut store = Store::new();
/// for value in [3, 1, 2] {
///     store.insert(value).unwrap();
/// }
///
/// let view = AscendingView::new(&store);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub type AscendingView = View<Ascending>;

static_assertions::assert_not_impl_any!(AscendingView: Send, Sync);
