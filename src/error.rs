//! Error type shared by the store and every view.
//!
//! All failures are caller-visible and none is retried internally: they
//! signal misuse (duplicate insert, comparing unrelated cursors) or an
//! exhausted/invalidated traversal.

use thiserror::Error;

/// Unified error type for store mutations and cursor operations.
///
/// # Examples
///
/// ```rust
/// use viewstore::{Store, ViewStoreError};
///
/// let mut store = Store::new();
/// store.insert(7).unwrap();
/// assert_eq!(store.insert(7), Err(ViewStoreError::DuplicateValue(7)));
/// assert_eq!(store.delete(8), Err(ViewStoreError::NotFound(8)));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ViewStoreError {
    /// The value is already present in the store.
    #[error("value {0} is already present in the store")]
    DuplicateValue(i32),
    /// The value is not present in the store.
    #[error("value {0} is not present in the store")]
    NotFound(i32),
    /// The cursor is at `end` and cannot be advanced, dereferenced or ordered.
    #[error("cursor is past the last element")]
    ExhaustedCursor,
    /// The element under the cursor was deleted from the store.
    #[error("cursor was invalidated by a deletion")]
    StaleCursor,
    /// The cursors come from different stores or different view policies.
    #[error("cursors belong to different stores or view policies")]
    IncompatibleCursors,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViewStoreError>;
