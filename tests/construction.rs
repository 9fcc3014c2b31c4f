use iterflow::builders::SequenceBuilder;
use iterflow::fixtures::{even_ordinals, odd_ordinals};
use iterflow::probe::EvalProbe;

#[test]
fn literal_values_form_an_ordered_source() {
    let count = ["Zero", "Eleven", "Twelve"].into_iter().count();
    assert_eq!(count, 3);
}

#[test]
fn builder_assembles_elements_in_insertion_order() {
    let seq = SequenceBuilder::new()
        .add("One")
        .add("Two")
        .add("Three")
        .build();
    assert_eq!(seq, ["One", "Two", "Three"]);
    assert!(seq.into_iter().count() > 0);
}

#[test]
fn builder_supports_bulk_and_repeated_inserts() {
    let builder = SequenceBuilder::new()
        .add_range(1..=10)
        .add_values(vec![100, 101])
        .add_repeated(42, 5);
    assert_eq!(builder.len(), 17);
    assert!(!builder.is_empty());

    let seq = builder.build();
    assert_eq!(seq[..10], (1..=10).collect::<Vec<_>>()[..]);
    assert_eq!(seq[10..12], [100, 101]);
    assert!(seq[12..].iter().all(|n| *n == 42));
}

#[test]
fn empty_source_yields_nothing() {
    assert_eq!(std::iter::empty::<i32>().count(), 0);
    assert_eq!(std::iter::empty::<i32>().next(), None);
}

#[test]
fn chain_concatenates_in_first_then_second_order() {
    let joined: String = odd_ordinals()
        .into_iter()
        .chain(even_ordinals())
        .collect();
    assert_eq!(joined, "OneThreeFiveSevenNineTwoFourSixEightTen");
}

#[test]
fn chain_pulls_from_the_second_source_lazily() {
    let probe = EvalProbe::new();
    let first_half: Vec<String> = odd_ordinals()
        .into_iter()
        .chain(even_ordinals().into_iter().inspect(|_| probe.mark()))
        .take(5)
        .collect();
    assert_eq!(first_half.len(), 5);
    // take(5) is satisfied by the first source alone
    assert_eq!(probe.hits(), 0);
}
