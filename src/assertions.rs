//! Assertion helpers for comparing materialized pipeline outputs.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal element-by-element, in order.
///
/// # Panics
///
/// Panics with the first differing index if the collections differ in length
/// or content.
///
/// # Example
///
/// ```
/// use iterflow::assertions::assert_collections_equal;
///
/// let doubled: Vec<i32> = [1, 2, 3].iter().map(|n| n * 2).collect();
/// assert_collections_equal(&doubled, &[2, 4, 6]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: expected {} elements, got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "mismatch at index {i}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements, ignoring order.
///
/// Duplicate counts are not distinguished beyond total length; use
/// [`assert_collections_equal`] when multiplicity in order matters.
///
/// # Panics
///
/// Panics naming the missing and unexpected elements.
///
/// # Example
///
/// ```
/// use iterflow::assertions::assert_collections_unordered_equal;
///
/// let out = vec![3, 1, 2];
/// assert_collections_unordered_equal(&out, &[1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: expected {} elements, got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );
    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!("content mismatch\n  missing: {missing:?}\n  extra:   {extra:?}");
    }
}

/// Assert that a collection holds exactly `expected` elements.
pub fn assert_collection_size<T>(collection: &[T], expected: usize) {
    assert_eq!(
        collection.len(),
        expected,
        "size mismatch: expected {expected} elements, got {}",
        collection.len()
    );
}

/// Assert that every element satisfies the predicate.
///
/// # Panics
///
/// Panics naming the first element that fails.
///
/// # Example
///
/// ```
/// use iterflow::assertions::assert_all;
///
/// assert_all(&[2, 4, 6], |n| n % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "predicate failed at index {i}: {item:?}\n  in: {collection:?}"
        );
    }
}

/// Assert that at least one element satisfies the predicate.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(predicate),
        "no element satisfied the predicate in: {collection:?}"
    );
}

/// Assert that no element satisfies the predicate.
///
/// # Panics
///
/// Panics naming the first element that unexpectedly matches.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "predicate unexpectedly matched at index {i}: {item:?}\n  in: {collection:?}"
        );
    }
}
