//! # linked-collections
//!
//! Owned, index-linked container types with a checked error model.
//!
//! ## Overview
//!
//! - **Deque**: doubly-linked double-ended queue with positional access,
//!   in-place reversal, stable sorting, concatenation (`+`) and repetition
//!   (`*`)
//! - **Cursors**: one cursor type for both directions and both access
//!   capabilities, borrow-checked against structural mutation
//! - **`LinkedList`**: singly-linked list with a tracked tail
//! - **`NonHashMap`**: insertion-ordered map over `PartialEq` keys
//! - **Merge sort**: stable top-down merge sort over `Vec`
//!
//! ## Feature Flags
//!
//! - `sort`: Merge sort algorithms
//! - `deque`: `Deque` and cursors (enables `sort`)
//! - `list`: `LinkedList`
//! - `map`: `NonHashMap` (enables `deque`)
//! - `serde`: `Serialize` / `Deserialize` for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use linked_collections::prelude::*;
//!
//! let mut deque = Deque::from_slice(&[5, 3, 4]);
//! deque.append_left(9);
//! deque.sort();
//! assert_eq!(deque.as_vec(), vec![3, 4, 5, 9]);
//!
//! let error = deque.get(10).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Index 10 in iterable of type Deque is out of bounds."
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the error types, and the sort functions.
///
/// # Usage
///
/// ```rust
/// use linked_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "sort")]
    pub use crate::algorithms::*;

    #[cfg(any(feature = "deque", feature = "list", feature = "map"))]
    pub use crate::structures::*;
}

pub mod error;

#[cfg(any(feature = "deque", feature = "list"))]
mod arena;

#[cfg(feature = "sort")]
pub mod algorithms;

#[cfg(any(feature = "deque", feature = "list", feature = "map"))]
pub mod structures;
