//! Keyed folding semantics, ported expectations from the reference library.

use vseq::prelude::*;

#[test]
fn empty_source_yields_no_groups() {
    let empty: Vec<i32> = Vec::new();
    let folded = from_vec(empty.clone())
        .aggregate_by(|x| *x, 0, |acc, x| acc + x)
        .to_vec();
    assert_eq!(folded, Vec::<(i32, i32)>::new());

    let folded = from_vec(empty)
        .aggregate_by_with(|x| *x, |k| *k, |acc, x| acc + x)
        .to_vec();
    assert_eq!(folded, Vec::<(i32, i32)>::new());
}

#[test]
fn identity_keys_fold_singletons() {
    let folded = range(0i32, 10)
        .aggregate_by_with(|x| *x, |_| 0, |acc, x| acc + x)
        .to_vec();
    let expected: Vec<(i32, i32)> = (0..10).map(|x| (x, x)).collect();
    assert_eq!(folded, expected);
}

#[test]
fn one_key_folds_the_whole_source() {
    let folded = range(5i32, 10)
        .aggregate_by(|_| true, 0, |acc, x| acc + x)
        .to_vec();
    assert_eq!(folded, vec![(true, 95)]);
}

#[test]
fn modular_keys_group_in_first_occurrence_order() {
    let folded = range(0i32, 20)
        .aggregate_by(|x| x % 5, 0, |acc, x| acc + x)
        .to_vec();
    let expected: Vec<(i32, i32)> = (0..5).map(|x| (x, 30 + 4 * x)).collect();
    assert_eq!(folded, expected);
}

#[test]
fn repeated_values_make_one_group() {
    let folded = repeat(5i32, 20)
        .aggregate_by(|x| *x, 0, |acc, x| acc + x)
        .to_vec();
    assert_eq!(folded, vec![(5, 100)]);
}

#[test]
fn case_sensitive_string_keys() {
    let source = ["Bob", "bob", "tim", "Bob", "Tim"];
    let folded = from_slice(&source)
        .aggregate_by(
            |s| s.to_string(),
            String::new(),
            |acc, s| acc + s,
        )
        .to_vec();
    assert_eq!(
        folded,
        vec![
            ("Bob".to_string(), "BobBob".to_string()),
            ("bob".to_string(), "bob".to_string()),
            ("tim".to_string(), "tim".to_string()),
            ("Tim".to_string(), "Tim".to_string()),
        ]
    );
}

#[test]
fn projected_keys_merge_case_insensitively() {
    // Custom equality is a key projection: fold case away in the key.
    let source = ["Bob", "bob", "tim", "Bob", "Tim"];
    let folded = from_slice(&source)
        .aggregate_by(
            |s| s.to_lowercase(),
            String::new(),
            |acc, s| acc + s,
        )
        .to_vec();
    assert_eq!(
        folded,
        vec![
            ("bob".to_string(), "BobbobBob".to_string()),
            ("tim".to_string(), "timTim".to_string()),
        ]
    );
}

#[test]
fn seed_computed_from_key() {
    let people = [("Tom", 20), ("Dick", 30), ("Harry", 40)];
    let folded = from_slice(&people)
        .aggregate_by_with(
            |p| p.1,
            |age| format!("I am {age} and my name is "),
            |acc, p| acc + p.0,
        )
        .to_vec();
    assert_eq!(
        folded,
        vec![
            (20, "I am 20 and my name is Tom".to_string()),
            (30, "I am 30 and my name is Dick".to_string()),
            (40, "I am 40 and my name is Harry".to_string()),
        ]
    );
}

#[test]
fn shared_key_accumulates_in_arrival_order() {
    let people = [("Tom", 20), ("Dick", 20), ("Harry", 40)];
    let folded = from_slice(&people)
        .aggregate_by_with(
            |p| p.1,
            |age| format!("I am {age} and my name is"),
            |acc, p| format!("{acc} maybe {}", p.0),
        )
        .to_vec();
    assert_eq!(
        folded,
        vec![
            (20, "I am 20 and my name is maybe Tom maybe Dick".to_string()),
            (40, "I am 40 and my name is maybe Harry".to_string()),
        ]
    );
}

#[test]
fn parity_sum_matches_the_reference_example() {
    let folded = from_vec(vec![1, 2, 3, 4])
        .aggregate_by(|x| x % 2 == 0, 0, |acc, x| acc + x)
        .to_vec();
    assert_eq!(folded, vec![(false, 4), (true, 6)]);
}

#[test]
fn group_by_derived_from_aggregate_by() {
    let grouped = from_vec(vec![1, 2, 3, 4])
        .aggregate_by_with(
            |x| x % 2 == 0,
            |_| Vec::new(),
            |mut group, x| {
                group.push(x);
                group
            },
        )
        .to_vec();
    assert_eq!(grouped, vec![(false, vec![1, 3]), (true, vec![2, 4])]);
}

#[test]
fn count_by_derived_from_aggregate_by() {
    let counted = from_vec(vec![1, 2, 3, 4])
        .aggregate_by(|x| x % 2 == 0, 0u64, |count, _| count + 1)
        .to_vec();
    assert_eq!(counted, vec![(false, 2), (true, 2)]);
}

#[test]
fn scores_accumulate_per_id_in_first_seen_order() {
    let data = [("0", 42), ("1", 5), ("2", 4), ("1", 10), ("0", 25)];
    let scores = from_slice(&data)
        .aggregate_by(|entry| entry.0, 0, |total, entry| total + entry.1)
        .to_vec();
    assert_eq!(scores, vec![("0", 67), ("1", 15), ("2", 4)]);
}

#[test]
fn group_count_is_known_only_after_the_fold() {
    let mut folded = from_vec(vec![1, 2, 3, 4]).aggregate_by(|x| x % 2, 0, |a, x| a + x);
    assert_eq!(folded.try_len(), None);
    assert!(folded.try_next().is_some());
    assert_eq!(folded.try_len(), Some(1));
}
