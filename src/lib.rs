//! # viewstore
//!
//! A sorted, duplicate-free store of integers with live traversal views.
//!
//! ## Overview
//!
//! A [`Store`] holds distinct `i32` values in ascending order. Any number
//! of views can be built over it at the same time, each with its own
//! projection of the contents and its own cursor:
//!
//! - [`AscendingView`]: strictly ascending order
//! - [`CrossView`]: alternating smallest/largest remaining ("side-cross")
//! - [`PrimeView`]: ascending order restricted to primes
//!
//! Views stay consistent with later store mutations: an insert is
//! projected into every live view without moving any cursor off the
//! element it denotes, and a delete invalidates exactly the cursors that
//! denoted the removed value.
//!
//! ## Feature Flags
//!
//! - `ascending`: [`AscendingView`]
//! - `cross`: [`CrossView`]
//! - `prime`: [`PrimeView`] and [`view::is_prime`]
//! - `full`: all of the above (also the default)
//!
//! ## Example
//!
#![cfg_attr(all(feature = "cross", feature = "prime"), doc = "```rust")]
#![cfg_attr(not(all(feature = "cross", feature = "prime")), doc = "```rust,ignore")]
//! use viewstore::prelude::*;
//!
//! let mut store = Store::new();
//! for value in [1, 2, 3, 5, 6] {
//!     store.insert(value).unwrap();
//! }
//!
//! let cross = CrossView::new(&store);
//! assert_eq!(cross.iter().collect::<Vec<_>>(), vec![1, 6, 2, 5, 3]);
//!
//! let mut primes = PrimeView::new(&store);
//! assert_eq!(primes.dereference(), Ok(2));
//! primes.advance().unwrap();
//! assert_eq!(primes.dereference(), Ok(3));
//!
//! // A prime inserted later shows up in the live view.
//! store.insert(7).unwrap();
//! assert_eq!(primes.values(), vec![2, 3, 5, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use viewstore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ViewStoreError;
    pub use crate::store::{Store, StoreId};
    pub use crate::view::{Policy, PolicyKind, View};

    #[cfg(feature = "ascending")]
    pub use crate::view::AscendingView;

    #[cfg(feature = "cross")]
    pub use crate::view::CrossView;

    #[cfg(feature = "prime")]
    pub use crate::view::PrimeView;
}

pub mod error;
pub mod store;
pub mod view;

pub use error::{Result, ViewStoreError};
pub use store::{Store, StoreId};
pub use view::{Policy, PolicyKind, View};

#[cfg(feature = "ascending")]
pub use view::AscendingView;

#[cfg(feature = "cross")]
pub use view::CrossView;

#[cfg(feature = "prime")]
pub use view::PrimeView;
