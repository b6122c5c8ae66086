//! The capability each traversal policy supplies to [`View`](super::View).

/// Tag naming a view policy at runtime.
///
/// Cursors of different policies never compare; the tag lets the generic
/// comparison methods detect that case and report it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Strictly ascending order.
    Ascending,
    /// Alternating smallest-remaining / largest-remaining order.
    Cross,
    /// Ascending order of the prime elements only.
    Prime,
}

/// How a projection changed in response to one store mutation.
///
/// Cursor positions are rebased from this description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The projection is unaffected.
    Unchanged,
    /// A value was inserted at this index; later elements moved up by one.
    Inserted(usize),
    /// The value at this index was removed; later elements moved down by one.
    Removed(usize),
    /// The projection was recomputed; carries the previous projection so
    /// cursors can be relocated onto the element they denoted.
    Rebuilt(Vec<i32>),
}

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Projection construction and update for one traversal policy.
///
/// `elements` is always the full store content in ascending order, taken
/// *after* the mutation being applied.
pub trait Policy: Sealed + 'static {
    /// The runtime tag of this policy.
    const KIND: PolicyKind;

    /// Builds the projection of `elements`.
    fn project(elements: &[i32]) -> Vec<i32>;

    /// Brings `projection` up to date after `value` was inserted into the store.
    fn insert(projection: &mut Vec<i32>, value: i32, elements: &[i32]) -> Edit;

    /// Brings `projection` up to date after `value` was deleted from the store.
    fn delete(projection: &mut Vec<i32>, value: i32, elements: &[i32]) -> Edit;
}

/// Inserts into an ascending projection at the binary-search position.
#[cfg_attr(not(any(feature = "ascending", feature = "prime")), allow(dead_code))]
pub(crate) fn insert_sorted(projection: &mut Vec<i32>, value: i32) -> Edit {
    match projection.binary_search(&value) {
        Ok(_) => Edit::Unchanged,
        Err(index) => {
            projection.insert(index, value);
            Edit::Inserted(index)
        }
    }
}

/// Removes from an ascending projection, if present.
#[cfg_attr(not(any(feature = "ascending", feature = "prime")), allow(dead_code))]
pub(crate) fn delete_sorted(projection: &mut Vec<i32>, value: i32) -> Edit {
    match projection.binary_search(&value) {
        Ok(index) => {
            projection.remove(index);
            Edit::Removed(index)
        }
        Err(_) => Edit::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 4, vec![4], Edit::Inserted(0))]
    #[case(vec![1, 5], 3, vec![1, 3, 5], Edit::Inserted(1))]
    #[case(vec![1, 5], 9, vec![1, 5, 9], Edit::Inserted(2))]
    #[case(vec![1, 5], 5, vec![1, 5], Edit::Unchanged)]
    fn test_insert_sorted(
        #[case] mut projection: Vec<i32>,
        #[case] value: i32,
        #[case] expected: Vec<i32>,
        #[case] edit: Edit,
    ) {
        assert_eq!(insert_sorted(&mut projection, value), edit);
        assert_eq!(projection, expected);
    }

    #[rstest]
    #[case(vec![1, 3, 5], 3, vec![1, 5], Edit::Removed(1))]
    #[case(vec![1, 3, 5], 1, vec![3, 5], Edit::Removed(0))]
    #[case(vec![1, 3, 5], 4, vec![1, 3, 5], Edit::Unchanged)]
    fn test_delete_sorted(
        #[case] mut projection: Vec<i32>,
        #[case] value: i32,
        #[case] expected: Vec<i32>,
        #[case] edit: Edit,
    ) {
        assert_eq!(delete_sorted(&mut projection, value), edit);
        assert_eq!(projection, expected);
    }
}
