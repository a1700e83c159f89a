//! Sorting algorithms used by the containers.
//!
//! - [`merge_sort`]: stable in-place merge sort over a `Vec`
//! - [`merge_sort_by`] / [`merge_sort_by_key`]: the same with a custom order
//! - [`merge_sorted`]: copying variant that leaves the input untouched
//!
//! [`Deque::sort`](crate::structures::Deque::sort) and
//! [`Deque::sorted`](crate::structures::Deque::sorted) delegate here.

mod merge_sort;

pub use merge_sort::merge_sort;
pub use merge_sort::merge_sort_by;
pub use merge_sort::merge_sort_by_key;
pub use merge_sort::merge_sorted;
