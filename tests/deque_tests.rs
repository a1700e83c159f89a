//! Scenario tests for Deque.
//!
//! These tests drive the public API the way a caller would and check the
//! observable results, including the error values and rendered output.

use linked_collections::error::{CollectionError, EmptyContainerError};
use linked_collections::structures::{Deque, Direction};
use rstest::{fixture, rstest};

#[fixture]
fn one_to_five() -> Deque<i32> {
    Deque::from_slice(&[1, 2, 3, 4, 5])
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_default_is_empty() {
    let deque: Deque<String> = Deque::default();
    assert!(deque.is_empty());
    assert_eq!(format!("{deque}"), "{}");
}

#[rstest]
fn test_from_array_and_vec_agree(one_to_five: Deque<i32>) {
    assert_eq!(Deque::from([1, 2, 3, 4, 5]), one_to_five);
    assert_eq!(Deque::from(vec![1, 2, 3, 4, 5]), one_to_five);
    assert_eq!((1..=5).collect::<Deque<i32>>(), one_to_five);
}

#[rstest]
fn test_copy_then_mutate_either_side(one_to_five: Deque<i32>) {
    let mut original = one_to_five;
    let mut copy = original.clone();

    copy[0] = 100;
    assert_eq!(original[0], 1);

    original[4] = 500;
    assert_eq!(copy[4], 5);
}

#[rstest]
fn test_assignment_replaces_previous_contents(one_to_five: Deque<i32>) {
    let mut target = Deque::from_slice(&[9, 9]);
    assert_eq!(target.len(), 2);
    target.clone_from(&one_to_five);
    assert_eq!(target, one_to_five);
    assert!(!target.contains(&9));
}

#[rstest]
fn test_owned_strings_move_without_cloning() {
    let mut deque = Deque::new();
    deque.append("b".to_string());
    deque.append_left("a".to_string());
    let moved = std::mem::take(&mut deque);
    assert!(deque.is_empty());
    assert_eq!(moved.as_vec(), vec!["a".to_string(), "b".to_string()]);
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[rstest]
fn test_insert_in_the_middle(one_to_five: Deque<i32>) {
    let mut deque = one_to_five;
    deque.insert(3, 7).unwrap();
    assert_eq!(deque.len(), 6);
    assert_eq!(deque[3], 7);
    assert_eq!(deque[2], 3);
    assert_eq!(deque[4], 4);
}

#[rstest]
fn test_pop_on_empty_reports_empty_container() {
    let mut deque: Deque<i32> = Deque::new();
    assert_eq!(
        deque.pop_head(),
        Err(CollectionError::EmptyContainer(EmptyContainerError {
            container_type: "Deque"
        }))
    );
}

#[rstest]
fn test_pop_first_position(one_to_five: Deque<i32>) {
    let mut deque = one_to_five;
    assert_eq!(deque.pop(0), Ok(1));
    assert_eq!(deque.len(), 4);
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(usize::MAX)]
fn test_failed_operations_leave_deque_untouched(one_to_five: Deque<i32>, #[case] index: usize) {
    let mut deque = one_to_five.clone();
    assert!(deque.get(index).is_err());
    assert!(deque.pop(index).is_err());
    assert!(deque.remove(index).is_err());
    if index > deque.len() {
        assert!(deque.insert(index, 0).is_err());
    }
    assert_eq!(deque, one_to_five);
}

#[rstest]
fn test_error_names_offending_index(one_to_five: Deque<i32>) {
    match one_to_five.get(42) {
        Err(CollectionError::IndexOutOfBounds(error)) => {
            assert_eq!(error.index, 42);
            assert_eq!(error.container_type, "Deque");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

// =============================================================================
// Snapshots
// =============================================================================

#[rstest]
fn test_as_vec_and_to_vec_differ_on_empty() {
    let empty: Deque<i32> = Deque::new();
    assert_eq!(empty.as_vec(), Vec::<i32>::new());
    assert_eq!(
        empty.to_vec(),
        Err(CollectionError::empty_container("Deque"))
    );
}

#[rstest]
fn test_snapshot_is_independent(one_to_five: Deque<i32>) {
    let mut deque = one_to_five;
    let mut snapshot = deque.to_vec().unwrap();
    snapshot[0] = 10;
    deque[1] = 20;
    assert_eq!(snapshot, vec![10, 2, 3, 4, 5]);
    assert_eq!(deque.as_vec(), vec![1, 20, 3, 4, 5]);
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_forward_and_reverse_iteration(one_to_five: Deque<i32>) {
    let forward: Vec<i32> = one_to_five.iter().copied().collect();
    let reverse: Vec<i32> = one_to_five.iter().rev().copied().collect();
    assert_eq!(forward, vec![1, 2, 3, 4, 5]);
    assert_eq!(reverse, vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn test_reverse_mutable_iteration(one_to_five: Deque<i32>) {
    let mut deque = one_to_five;
    for (offset, element) in deque.iter_mut().rev().enumerate() {
        *element += i32::try_from(offset).unwrap() * 10;
    }
    assert_eq!(deque.as_vec(), vec![41, 32, 23, 14, 5]);
}

#[rstest]
fn test_cursor_walks_until_end_sentinel(one_to_five: Deque<i32>) {
    let end = one_to_five.cursor_end(Direction::Backward);
    let mut cursor = one_to_five.cursor_back();
    let mut visited = Vec::new();
    while cursor != end {
        visited.push(*cursor.get().unwrap());
        cursor.advance();
    }
    assert_eq!(visited, vec![5, 4, 3, 2, 1]);
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_add_assign_appends_in_order() {
    let mut deque = Deque::from_slice(&['a', 'b']);
    deque += Deque::from_slice(&['c']);
    assert_eq!(format!("{deque}"), "{a, b, c}");
}

#[rstest]
fn test_repetition_keeps_identity_for_zero_and_one(one_to_five: Deque<i32>) {
    assert_eq!(one_to_five.clone() * 0, one_to_five);
    assert_eq!(one_to_five.clone() * 1, one_to_five);
    assert_eq!((one_to_five.clone() * 4).len(), 20);
}

#[rstest]
fn test_sorted_leaves_original(one_to_five: Deque<i32>) {
    let shuffled = Deque::from_slice(&[4, 1, 5, 3, 2]);
    assert_eq!(shuffled.sorted(), one_to_five);
    assert_eq!(shuffled.as_vec(), vec![4, 1, 5, 3, 2]);
}

#[rstest]
fn test_sort_by_descending() {
    let mut deque = Deque::from_slice(&["bb", "a", "ccc"]);
    deque.sort_by(|left, right| right.len().cmp(&left.len()));
    assert_eq!(deque.as_vec(), vec!["ccc", "bb", "a"]);
}

#[rstest]
fn test_nested_display() {
    let inner = Deque::from_slice(&[1, 2]);
    let outer = Deque::from_slice(&[inner.clone(), inner]);
    assert_eq!(format!("{outer}"), "{{1, 2}, {1, 2}}");
}
