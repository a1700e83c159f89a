//! Stable top-down merge sort.
//!
//! # Overview
//!
//! The sort recursively splits the input in half, sorts each half, and
//! merges the sorted runs. When the heads of the two runs compare equal the
//! element from the left run is taken first, so equal elements keep their
//! original relative order.
//!
//! - O(n log n) comparisons
//! - O(n) auxiliary storage
//! - Stable
//!
//! # Examples
//!
//! ```rust
//! use linked_collections::algorithms::{merge_sort, merge_sort_by_key, merge_sorted};
//!
//! let mut values = vec![3, 5, 2, 1, 4];
//! merge_sort(&mut values);
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//!
//! // The copying variant leaves its input untouched
//! let input = [9, 7, 8];
//! assert_eq!(merge_sorted(&input), vec![7, 8, 9]);
//! assert_eq!(input, [9, 7, 8]);
//!
//! // Equal keys keep their relative order
//! let mut pairs = vec![(1, "a"), (1, "b"), (0, "c")];
//! merge_sort_by_key(&mut pairs, |pair| pair.0);
//! assert_eq!(pairs, vec![(0, "c"), (1, "a"), (1, "b")]);
//! ```

use std::cmp::Ordering;

/// Sorts `values` in place by their natural order.
///
/// # Complexity
///
/// O(n log n) time, O(n) auxiliary space
pub fn merge_sort<T: Ord>(values: &mut Vec<T>) {
    merge_sort_by(values, Ord::cmp);
}

/// Sorts `values` in place with a comparator.
///
/// The comparator must describe a total order. Elements for which it
/// returns [`Ordering::Equal`] keep their relative order. The comparator only
/// ever sees the elements in place; if it panics, `values` is unchanged.
///
/// # Arguments
///
/// * `values` - The sequence to sort
/// * `compare` - Returns the ordering of its first argument relative to the second
///
/// # Examples
///
/// ```rust
/// use linked_collections::algorithms::merge_sort_by;
///
/// let mut words = vec!["pear", "fig", "apple"];
/// merge_sort_by(&mut words, |left, right| left.len().cmp(&right.len()));
/// assert_eq!(words, vec!["fig", "pear", "apple"]);
/// ```
pub fn merge_sort_by<T, F>(values: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() < 2 {
        return;
    }
    tracing::trace!(length = values.len(), "merge sort");
    let elements: &[T] = values;
    let mut compare_positions =
        |left: &usize, right: &usize| compare(&elements[*left], &elements[*right]);
    let order = sort_run((0..elements.len()).collect(), &mut compare_positions);
    let mut slots: Vec<Option<T>> = std::mem::take(values).into_iter().map(Some).collect();
    *values = order
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect();
}

/// Sorts `values` in place by the key extracted from each element.
///
/// The key function is called twice per comparison.
pub fn merge_sort_by_key<T, K, F>(values: &mut Vec<T>, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(values, |left, right| key(left).cmp(&key(right)));
}

/// Returns a sorted copy of `values`, leaving the input untouched.
///
/// # Examples
///
/// ```rust
/// use linked_collections::algorithms::merge_sorted;
///
/// let original = vec![3, 1, 2];
/// let sorted = merge_sorted(&original);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert_eq!(original, vec![3, 1, 2]);
/// ```
#[must_use]
pub fn merge_sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    merge_sort(&mut copy);
    copy
}

fn sort_run<T, F>(mut values: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() < 2 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    let left = sort_run(values, compare);
    let right = sort_run(right, compare);
    merge(left, right, compare)
}

/// Merges two sorted runs, preferring `left` on ties.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(left_head), Some(right_head)) => {
                compare(left_head, right_head) != Ordering::Greater
            }
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![2, 1], vec![1, 2])]
    #[case(vec![3, 5, 2, 1, 4], vec![1, 2, 3, 4, 5])]
    #[case(vec![5, 4, 3, 2, 1, 0], vec![0, 1, 2, 3, 4, 5])]
    #[case(vec![1, 1, 1], vec![1, 1, 1])]
    fn test_merge_sort(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut values = input;
        merge_sort(&mut values);
        assert_eq!(values, expected);
    }

    #[rstest]
    fn test_merge_sort_is_stable() {
        let mut values = vec![(1, "a"), (1, "b"), (0, "c")];
        merge_sort_by_key(&mut values, |pair| pair.0);
        assert_eq!(values, vec![(0, "c"), (1, "a"), (1, "b")]);
    }

    #[rstest]
    fn test_merge_prefers_left_run_on_ties() {
        let left = vec![(1, 'l'), (2, 'l')];
        let right = vec![(1, 'r'), (2, 'r')];
        let merged = merge(left, right, &mut |a: &(i32, char), b: &(i32, char)| {
            a.0.cmp(&b.0)
        });
        assert_eq!(merged, vec![(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r')]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    fn test_panicking_comparator_leaves_values_untouched(#[case] failing_call: usize) {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let mut values = vec![
            "delta".to_string(),
            "alpha".to_string(),
            "charlie".to_string(),
            "bravo".to_string(),
        ];
        let mut calls = 0;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            merge_sort_by(&mut values, |left, right| {
                calls += 1;
                assert!(calls < failing_call, "comparator failed");
                left.cmp(right)
            });
        }));
        assert!(outcome.is_err());
        assert_eq!(values, vec!["delta", "alpha", "charlie", "bravo"]);
    }

    #[rstest]
    fn test_merge_sort_by_descending() {
        let mut values = vec![1, 4, 2, 3];
        merge_sort_by(&mut values, |left, right| right.cmp(left));
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[rstest]
    fn test_merge_sorted_leaves_input_untouched() {
        let input = vec![3, 5, 2, 1, 4];
        let sorted = merge_sorted(&input);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(input, vec![3, 5, 2, 1, 4]);
    }

    #[rstest]
    fn test_merge_sort_counts_comparisons_within_bound() {
        let mut values: Vec<i32> = (0..64).rev().collect();
        let mut comparisons = 0usize;
        merge_sort_by(&mut values, |left, right| {
            comparisons += 1;
            left.cmp(right)
        });
        assert_eq!(values, (0..64).collect::<Vec<_>>());
        // n * log2(n) for n = 64
        assert!(comparisons <= 64 * 6);
    }
}
