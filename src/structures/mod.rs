//! Linked containers.
//!
//! - [`Deque`]: doubly-linked double-ended queue with cursors in both
//!   directions
//! - [`LinkedList`]: singly-linked list with O(1) append at either end
//! - [`NonHashMap`]: insertion-ordered map that only needs `PartialEq` keys
//!
//! All containers keep their nodes in an index-linked arena, own every
//! element they hold, and report failures through the types in
//! [`crate::error`].
//!
//! # Examples
//!
//! ## `Deque`
//!
//! ```rust
//! use linked_collections::structures::Deque;
//!
//! let deque = Deque::from_slice(&[3, 1, 2]);
//! let sorted = deque.sorted();
//! assert_eq!(format!("{sorted}"), "{1, 2, 3}");
//! assert_eq!((sorted * 2).len(), 6);
//! ```
//!
//! ## `LinkedList`
//!
//! ```rust
//! use linked_collections::structures::LinkedList;
//!
//! let list: LinkedList<i32> = (1..=3).collect();
//! assert_eq!(list.tail(), Ok(&3));
//! ```
//!
//! ## `NonHashMap`
//!
//! ```rust
//! use linked_collections::structures::NonHashMap;
//!
//! let map = NonHashMap::try_from_pairs([(1.5, "a"), (2.5, "b")]).unwrap();
//! assert_eq!(map.get(&2.5), Ok(&"b"));
//! ```

#[cfg(feature = "deque")]
pub mod cursor;
#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "deque")]
pub use cursor::{Cursor, Direction};
#[cfg(feature = "deque")]
pub use deque::Deque;
#[cfg(feature = "list")]
pub use list::LinkedList;
#[cfg(feature = "map")]
pub use map::NonHashMap;
