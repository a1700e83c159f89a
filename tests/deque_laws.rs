//! Property-based tests for Deque.
//!
//! These tests check the structural laws every deque must satisfy
//! regardless of its contents or the order of operations applied to it.

use linked_collections::structures::Deque;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates a `Deque<i32>` with up to `max_size` elements.
fn deque_strategy(max_size: usize) -> impl Strategy<Value = Deque<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(Deque::from)
}

fn small_deque() -> impl Strategy<Value = Deque<i32>> {
    deque_strategy(32)
}

#[derive(Debug, Clone)]
enum Operation {
    Append(i32),
    AppendLeft(i32),
    Insert(usize, i32),
    Remove(usize),
    PopHead,
    PopTail,
    Reverse,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i32>().prop_map(Operation::Append),
        any::<i32>().prop_map(Operation::AppendLeft),
        (0..40usize, any::<i32>()).prop_map(|(index, value)| Operation::Insert(index, value)),
        (0..40usize).prop_map(Operation::Remove),
        Just(Operation::PopHead),
        Just(Operation::PopTail),
        Just(Operation::Reverse),
    ]
}

/// Applies `operation` to both the deque and a `Vec` model.
fn apply(deque: &mut Deque<i32>, model: &mut Vec<i32>, operation: &Operation) {
    match *operation {
        Operation::Append(value) => {
            deque.append(value);
            model.push(value);
        }
        Operation::AppendLeft(value) => {
            deque.append_left(value);
            model.insert(0, value);
        }
        Operation::Insert(index, value) => {
            if deque.insert(index, value).is_ok() {
                model.insert(index, value);
            }
        }
        Operation::Remove(index) => {
            if deque.remove(index).is_ok() {
                model.remove(index);
            }
        }
        Operation::PopHead => {
            if deque.pop_head().is_ok() {
                model.remove(0);
            }
        }
        Operation::PopTail => {
            if deque.pop_tail().is_ok() {
                model.pop();
            }
        }
        Operation::Reverse => {
            deque.reverse();
            model.reverse();
        }
    }
}

proptest! {
    // =========================================================================
    // Size and Shape
    // =========================================================================

    #[test]
    fn prop_operations_match_vec_model(
        operations in prop::collection::vec(operation_strategy(), 0..64)
    ) {
        let mut deque = Deque::new();
        let mut model = Vec::new();
        for operation in &operations {
            apply(&mut deque, &mut model, operation);
            prop_assert_eq!(deque.is_empty(), deque.len() == 0);
            prop_assert_eq!(deque.len(), model.len());
        }
        prop_assert_eq!(deque.as_vec(), model);
    }

    #[test]
    fn prop_len_matches_iter_count(deque in small_deque()) {
        prop_assert_eq!(deque.len(), deque.iter().count());
        prop_assert_eq!(deque.len(), deque.iter().rev().count());
    }

    // =========================================================================
    // Round-trips and Copies
    // =========================================================================

    #[test]
    fn prop_vec_round_trip(deque in deque_strategy(32).prop_filter("non-empty", |deque| !deque.is_empty())) {
        let snapshot = deque.to_vec().unwrap();
        prop_assert_eq!(Deque::from_slice(&snapshot), deque);
    }

    #[test]
    fn prop_copy_is_independent(
        deque in deque_strategy(32).prop_filter("non-empty", |deque| !deque.is_empty()),
        seed: usize,
        value: i32,
    ) {
        let index = seed % deque.len();
        let original = deque[index];
        let mut copy = deque.clone();
        copy[index] = value;
        prop_assert_eq!(deque[index], original);
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    #[test]
    fn prop_reverse_is_an_involution(deque in small_deque()) {
        prop_assert_eq!(deque.reversed().reversed(), deque);
    }

    #[test]
    fn prop_reverse_iteration_mirrors_forward(deque in small_deque()) {
        let mut forward: Vec<&i32> = deque.iter().collect();
        forward.reverse();
        let backward: Vec<&i32> = deque.iter().rev().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_indexing_matches_linear_scan(deque in small_deque()) {
        let scanned: Vec<&i32> = deque.iter().collect();
        for (index, expected) in scanned.into_iter().enumerate() {
            prop_assert_eq!(deque.get(index), Ok(expected));
        }
    }

    #[test]
    fn prop_sort_matches_stable_std_sort(
        pairs in prop::collection::vec((0..4i32, any::<u8>()), 0..48)
    ) {
        let mut deque = Deque::from(pairs.clone());
        deque.sort_by_key(|pair| pair.0);
        let mut expected = pairs;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(deque.as_vec(), expected);
    }

    // =========================================================================
    // Algebra
    // =========================================================================

    #[test]
    fn prop_concatenation_law(left in small_deque(), right in small_deque()) {
        let combined = left.clone() + right.clone();
        prop_assert_eq!(combined.len(), left.len() + right.len());
        for index in 0..combined.len() {
            let expected = if index < left.len() {
                left[index]
            } else {
                right[index - left.len()]
            };
            prop_assert_eq!(combined[index], expected);
        }
    }

    #[test]
    fn prop_repetition_law(deque in deque_strategy(8), count in 0..6usize) {
        let repeated = deque.clone() * count;
        if count <= 1 {
            prop_assert_eq!(repeated, deque);
        } else {
            prop_assert_eq!(repeated.len(), count * deque.len());
        }
    }

    #[test]
    fn prop_equality_is_elementwise(left in small_deque(), right in small_deque()) {
        prop_assert_eq!(left == right, left.as_vec() == right.as_vec());
    }
}
