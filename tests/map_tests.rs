//! Unit tests for NonHashMap.

use linked_collections::error::{KeyError, KeyErrorKind};
use linked_collections::structures::NonHashMap;
use rstest::{fixture, rstest};

#[fixture]
fn greetings() -> NonHashMap<i32, String> {
    let mut map = NonHashMap::new();
    map.add(5, "hello".to_string()).unwrap();
    map.add(6, "hi".to_string()).unwrap();
    map
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_constructor() {
    let map: NonHashMap<i32, String> = NonHashMap::new();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[rstest]
fn test_copy_is_independent(greetings: NonHashMap<i32, String>) {
    let mut map = greetings;
    let copy = map.clone();
    map.add(7, "bye".to_string()).unwrap();
    assert_ne!(copy.len(), map.len());
}

#[rstest]
fn test_swap(greetings: NonHashMap<i32, String>) {
    let mut first = NonHashMap::new();
    first.add(1, "one".to_string()).unwrap();
    let mut second = greetings;
    std::mem::swap(&mut first, &mut second);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
}

#[rstest]
fn test_try_from_pairs_reports_first_duplicate() {
    let error = NonHashMap::try_from_pairs([(1, 'a'), (2, 'b'), (2, 'c'), (1, 'd')]).unwrap_err();
    assert_eq!(error, KeyError::duplicate(2, "NonHashMap"));
}

// =============================================================================
// Keys that only implement PartialEq
// =============================================================================

#[rstest]
fn test_float_keys() {
    let mut map = NonHashMap::new();
    map.add(0.5, "half").unwrap();
    map.add(0.25, "quarter").unwrap();
    assert_eq!(map[&0.25], "quarter");
    assert!(!map.contains(&0.75));
}

// =============================================================================
// Lookup and update
// =============================================================================

#[rstest]
fn test_add_value_present(greetings: NonHashMap<i32, String>) {
    let mut map = greetings;
    let error = map.add(5, "goodbye".to_string()).unwrap_err();
    assert_eq!(error.kind, KeyErrorKind::Duplicate);
    assert_eq!(error.into_key(), 5);
}

#[rstest]
fn test_missing_key_message(greetings: NonHashMap<i32, String>) {
    let error = greetings.get(&42).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Key 42 is missing from mapping type NonHashMap"
    );
}

#[rstest]
fn test_update_then_remove(greetings: NonHashMap<i32, String>) {
    let mut map = greetings;
    let previous = map.update(6, "hey".to_string()).unwrap();
    assert_eq!(previous, "hi");
    assert_eq!(map.remove(&6), Ok("hey".to_string()));
    assert_eq!(map.remove(&6), Err(KeyError::missing(6, "NonHashMap")));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_keys_and_values_in_insertion_order(greetings: NonHashMap<i32, String>) {
    assert_eq!(greetings.keys().as_vec(), vec![5, 6]);
    assert_eq!(
        greetings.values().as_vec(),
        vec!["hello".to_string(), "hi".to_string()]
    );
}

#[rstest]
fn test_iteration_yields_pairs(greetings: NonHashMap<i32, String>) {
    let pairs: Vec<(i32, &str)> = greetings
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    assert_eq!(pairs, vec![(5, "hello"), (6, "hi")]);
    assert_eq!((&greetings).into_iter().len(), 2);
}

#[rstest]
fn test_display(greetings: NonHashMap<i32, String>) {
    assert_eq!(format!("{greetings}"), "{5: hello, 6: hi}");
    assert_eq!(format!("{}", NonHashMap::<i32, i32>::new()), "{}");
}
