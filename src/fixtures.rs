//! Canonical datasets shared across the behavior suite.
//!
//! Every test that does not need a bespoke source pulls its input from here,
//! so expected values (counts, orderings, concatenations) stay consistent
//! between test files.

use rand::seq::SliceRandom;

/// The first five ordinal words, in counting order.
///
/// # Example
///
/// ```
/// use iterflow::fixtures::ordinal_words;
///
/// assert_eq!(ordinal_words().len(), 5);
/// assert_eq!(ordinal_words()[0], "One");
/// ```
#[must_use]
pub fn ordinal_words() -> Vec<String> {
    ["One", "Two", "Three", "Four", "Five"]
        .map(String::from)
        .into()
}

/// The numbers one through five, in counting order.
#[must_use]
pub fn ordinal_numbers() -> Vec<i32> {
    vec![1, 2, 3, 4, 5]
}

/// The odd ordinal words up to nine, in counting order.
#[must_use]
pub fn odd_ordinals() -> Vec<String> {
    ["One", "Three", "Five", "Seven", "Nine"]
        .map(String::from)
        .into()
}

/// The even ordinal words up to ten, in counting order.
#[must_use]
pub fn even_ordinals() -> Vec<String> {
    ["Two", "Four", "Six", "Eight", "Ten"]
        .map(String::from)
        .into()
}

/// The odd and even ordinal words as two nested rows, for flattening tests.
///
/// # Example
///
/// ```
/// use iterflow::fixtures::ordinal_rows;
///
/// let flat: usize = ordinal_rows().iter().map(Vec::len).sum();
/// assert_eq!(flat, 10);
/// ```
#[must_use]
pub fn ordinal_rows() -> Vec<Vec<String>> {
    vec![odd_ordinals(), even_ordinals()]
}

/// A random permutation of `0..n`, for sorting tests.
///
/// # Example
///
/// ```
/// use iterflow::fixtures::shuffled_numbers;
///
/// let mut nums = shuffled_numbers(50);
/// nums.sort_unstable();
/// assert_eq!(nums, (0..50).collect::<Vec<_>>());
/// ```
#[must_use]
pub fn shuffled_numbers(n: usize) -> Vec<usize> {
    let mut nums: Vec<usize> = (0..n).collect();
    nums.shuffle(&mut rand::thread_rng());
    nums
}
