//! Ascending traversal restricted to prime values.

use super::policy::{Edit, Policy, PolicyKind, Sealed, delete_sorted, insert_sorted};
use super::View;

/// `true` if `number` is prime: greater than one with no divisor in
/// `2..=floor(sqrt(number))`.
///
/// # Examples
///
/// ```rust
/// use viewstore::view::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(91));
/// ```
#[must_use]
pub fn is_prime(number: i32) -> bool {
    if number <= 1 {
        return false;
    }
    let number = i64::from(number);
    (2_i64..)
        .take_while(|divisor| divisor * divisor <= number)
        .all(|divisor| number % divisor != 0)
}

/// Prime policy: an ascending projection that ignores non-prime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prime {}

impl Sealed for Prime {}

impl Policy for Prime {
    const KIND: PolicyKind = PolicyKind::Prime;

    fn project(elements: &[i32]) -> Vec<i32> {
        elements.iter().copied().filter(|value| is_prime(*value)).collect()
    }

    fn insert(projection: &mut Vec<i32>, value: i32, _elements: &[i32]) -> Edit {
        if is_prime(value) {
            insert_sorted(projection, value)
        } else {
            Edit::Unchanged
        }
    }

    fn delete(projection: &mut Vec<i32>, value: i32, _elements: &[i32]) -> Edit {
        if is_prime(value) {
            delete_sorted(projection, value)
        } else {
            Edit::Unchanged
        }
    }
}

/// Cursor over the store's prime elements, smallest first.
///
/// # Examples
///
/// ```rust
/// use viewstore::{PrimeView, Store};
///
/// let mut store = Store::new();
/// for value in [4, 5, 2] {
///     store.insert(value).unwrap();
/// }
///
/// let view = PrimeView::new(&store);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![2, 5]);
/// ```
pub type PrimeView = View<Prime>;

static_assertions::assert_not_impl_any!(PrimeView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use rstest::rstest;

    #[rstest]
    #[case(i32::MIN, false)]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, true)]
    #[case(4, false)]
    #[case(25, false)]
    #[case(29, true)]
    #[case(2_147_483_647, true)]
    #[case(2_147_395_600, false)]
    fn test_is_prime(#[case] number: i32, #[case] expected: bool) {
        assert_eq!(is_prime(number), expected);
    }

    #[rstest]
    fn test_project_filters_and_keeps_order() {
        assert_eq!(Prime::project(&[1, 2, 3, 4, 5, 9, 11]), vec![2, 3, 5, 11]);
    }

    #[rstest]
    fn test_non_prime_mutations_leave_cursor_alone() {
        let mut store = Store::new();
        for value in [2, 3, 5] {
            store.insert(value).unwrap();
        }
        let mut view = PrimeView::new(&store);
        view.advance().unwrap();

        store.insert(1).unwrap();
        store.insert(4).unwrap();
        store.delete(4).unwrap();

        assert_eq!(view.dereference(), Ok(3));
        assert_eq!(view.values(), vec![2, 3, 5]);
    }
}
