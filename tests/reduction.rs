use std::collections::HashSet;

use iterflow::fixtures::{ordinal_numbers, ordinal_words};
use rayon::prelude::*;

#[test]
fn reduce_joins_in_encounter_order() {
    let joined = ordinal_words()
        .into_iter()
        .reduce(|a, b| format!("{a},{b}"));
    assert_eq!(joined.as_deref(), Some("One,Two,Three,Four,Five"));
}

#[test]
fn parallel_reduce_agrees_for_associative_operations() {
    // Concatenation is associative (though not commutative), so rayon's
    // deterministic combining yields the sequential answer.
    let joined = ordinal_words()
        .into_par_iter()
        .reduce_with(|a, b| format!("{a},{b}"));
    assert_eq!(joined.as_deref(), Some("One,Two,Three,Four,Five"));
}

#[test]
fn reduce_of_an_empty_source_is_absent() {
    assert_eq!(std::iter::empty::<i32>().reduce(|a, b| a + b), None);
}

#[test]
fn fold_threads_a_seed_through_the_sequence() {
    let total = ordinal_numbers().into_iter().fold(10, |acc, n| acc + n);
    assert_eq!(total, 10 + 1 + 2 + 3 + 4 + 5);
}

#[test]
fn fold_performs_mutable_reduction_into_a_collection() {
    let set = ordinal_words().into_iter().fold(HashSet::new(), |mut set, w| {
        set.insert(w);
        set
    });
    assert_eq!(set.len(), 5);
}

#[test]
fn collect_materializes_into_a_set() {
    let set: HashSet<String> = ordinal_words().into_iter().collect();
    assert_eq!(set.len(), 5);
    assert!(set.contains("Four"));
}

#[test]
fn for_each_visits_in_encounter_order() {
    let mut out = String::new();
    ordinal_words().iter().for_each(|w| out.push_str(w));
    assert_eq!(out, "OneTwoThreeFourFive");
}

#[test]
fn sum_and_product_consume_the_whole_sequence() {
    assert_eq!(ordinal_numbers().iter().sum::<i32>(), 15);
    assert_eq!(ordinal_numbers().iter().product::<i32>(), 120);
}
