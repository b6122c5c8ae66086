//! Side-cross traversal: smallest, largest, next-smallest, next-largest, ...

use super::policy::{Edit, Policy, PolicyKind, Sealed};
use super::View;

/// Interleaves the two ends of an ascending slice, low end first.
///
/// For an odd length the middle element is emitted once, last.
fn side_cross(sorted: &[i32]) -> Vec<i32> {
    let mut interleaved = Vec::with_capacity(sorted.len());
    let mut ends = sorted.iter().copied();
    while let Some(low) = ends.next() {
        interleaved.push(low);
        if let Some(high) = ends.next_back() {
            interleaved.push(high);
        }
    }
    interleaved
}

/// Cross policy.
///
/// The interleaved order is not monotonic, so a mutation rebuilds the
/// projection from the store and cursors are relocated by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cross {}

impl Sealed for Cross {}

impl Policy for Cross {
    const KIND: PolicyKind = PolicyKind::Cross;

    fn project(elements: &[i32]) -> Vec<i32> {
        side_cross(elements)
    }

    fn insert(projection: &mut Vec<i32>, _value: i32, elements: &[i32]) -> Edit {
        Edit::Rebuilt(std::mem::replace(projection, side_cross(elements)))
    }

    fn delete(projection: &mut Vec<i32>, _value: i32, elements: &[i32]) -> Edit {
        Edit::Rebuilt(std::mem::replace(projection, side_cross(elements)))
    }
}

/// Cursor alternating between the smallest and largest remaining elements.
///
/// # Examples
///
/// ```rust
/// use viewstore::{CrossView, Store};
///
/// let mut store = Store::new();
/// for value in [1, 2, 3, 5, 6] {
///     store.insert(value).unwrap();
/// }
///
/// let view = CrossView::new(&store);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 6, 2, 5, 3]);
/// ```
pub type CrossView = View<Cross>;

static_assertions::assert_not_impl_any!(CrossView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[])]
    #[case(&[7], &[7])]
    #[case(&[1, 2], &[1, 2])]
    #[case(&[1, 2, 3], &[1, 3, 2])]
    #[case(&[1, 2, 3, 4], &[1, 4, 2, 3])]
    #[case(&[1, 2, 3, 5, 6], &[1, 6, 2, 5, 3])]
    fn test_side_cross(#[case] sorted: &[i32], #[case] expected: &[i32]) {
        assert_eq!(side_cross(sorted), expected);
    }

    #[rstest]
    fn test_insert_relocates_cursor_by_value() {
        let mut store = Store::new();
        for value in [1, 2, 3, 5, 6] {
            store.insert(value).unwrap();
        }
        let mut view = CrossView::new(&store);
        for _ in 0..3 {
            view.advance().unwrap();
        }
        assert_eq!(view.dereference(), Ok(5));

        store.insert(7).unwrap();
        assert_eq!(view.values(), vec![1, 7, 2, 6, 3, 5]);
        assert_eq!(view.dereference(), Ok(5));
    }

    #[rstest]
    fn test_delete_of_current_invalidates() {
        let mut store = Store::new();
        for value in [1, 2, 3] {
            store.insert(value).unwrap();
        }
        let mut view = CrossView::new(&store);
        view.advance().unwrap();
        assert_eq!(view.dereference(), Ok(3));

        store.delete(3).unwrap();
        assert!(view.is_stale());
    }
}
