//! Integration tests for AscendingView traversal.

#![cfg(feature = "ascending")]

use rstest::rstest;
use viewstore::{AscendingView, PolicyKind, Store, ViewStoreError};

fn store_of(values: &[i32]) -> Store {
    let mut store = Store::new();
    for &value in values {
        store.insert(value).unwrap();
    }
    store
}

#[rstest]
fn test_traverses_in_ascending_order_then_end() {
    let store = store_of(&[3, 1, 2]);
    let mut view = AscendingView::new(&store);

    assert!(view.equals(&view.begin()).unwrap());
    assert_eq!(view.dereference(), Ok(1));

    view.advance().unwrap();
    assert_eq!(view.dereference(), Ok(2));

    view.advance().unwrap();
    assert_eq!(view.dereference(), Ok(3));

    view.advance().unwrap();
    assert!(view.equals(&view.end()).unwrap());
    assert!(view.is_end());
    assert_eq!(view.dereference(), Err(ViewStoreError::ExhaustedCursor));
    assert_eq!(
        view.advance().map(|_| ()),
        Err(ViewStoreError::ExhaustedCursor)
    );
}

#[rstest]
fn test_view_on_empty_store_is_at_end() {
    let store = Store::new();
    let view = AscendingView::new(&store);

    assert!(view.equals(&view.begin()).unwrap());
    assert!(view.equals(&view.end()).unwrap());
    assert!(view.is_empty());
    assert_eq!(view.dereference(), Err(ViewStoreError::ExhaustedCursor));
}

#[rstest]
fn test_view_built_on_empty_store_sees_later_inserts_from_begin() {
    let mut store = Store::new();
    let view = AscendingView::new(&store);

    store.insert(3).unwrap();
    store.insert(1).unwrap();
    store.insert(2).unwrap();

    assert_eq!(view.len(), 3);
    // The original cursor stays at end; a fresh begin sees the new values.
    assert!(view.is_end());
    let begin = view.begin();
    assert_eq!(begin.dereference(), Ok(1));
    assert_eq!(begin.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn test_single_element() {
    let store = store_of(&[42]);
    let mut view = AscendingView::new(&store);

    assert_eq!(view.dereference(), Ok(42));
    view.advance().unwrap();
    assert!(view.equals(&view.end()).unwrap());
}

#[rstest]
fn test_clone_is_independent() {
    let store = store_of(&[3, 1, 2]);
    let mut view = AscendingView::new(&store);
    let mut copy = view.clone();

    assert_eq!(view.dereference(), copy.dereference());

    view.advance().unwrap();
    copy.advance().unwrap();
    assert_eq!(view.dereference(), copy.dereference());

    view.advance().unwrap();
    assert_ne!(view.dereference(), copy.dereference());
    assert_eq!(copy.dereference(), Ok(2));
}

#[rstest]
fn test_assign_copies_position() {
    let store = store_of(&[3, 1, 2]);
    let mut source = AscendingView::new(&store);
    let mut target = AscendingView::new(&store);
    source.advance().unwrap();

    target.assign(&source).unwrap();
    assert_eq!(target.dereference(), Ok(2));

    source.advance().unwrap();
    assert_eq!(source.dereference(), Ok(3));
    assert_eq!(target.dereference(), Ok(2));
}

#[rstest]
fn test_assign_across_stores_fails() {
    let first = store_of(&[1, 2]);
    let second = store_of(&[1, 2]);
    let source = AscendingView::new(&first);
    let mut target = AscendingView::new(&second);
    target.advance().unwrap();

    assert_eq!(target.assign(&source), Err(ViewStoreError::IncompatibleCursors));
    assert_eq!(target.dereference(), Ok(2));
    assert_eq!(target.store_id(), second.id());
}

#[rstest]
fn test_iter_starts_at_cursor_and_does_not_move_it() {
    let store = store_of(&[10, 20, 30]);
    let mut view = AscendingView::new(&store);
    view.advance().unwrap();

    let rest: Vec<i32> = (&view).into_iter().collect();
    assert_eq!(rest, vec![20, 30]);
    assert_eq!(view.dereference(), Ok(20));
}

#[rstest]
fn test_metadata() {
    let store = store_of(&[1, 2]);
    let view = AscendingView::new(&store);
    assert_eq!(view.policy(), PolicyKind::Ascending);
    assert_eq!(view.store_id(), store.id());
    assert_eq!(view.values(), vec![1, 2]);
    assert_eq!(view.len(), 2);
}
