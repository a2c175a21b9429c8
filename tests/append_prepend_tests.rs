//! Append/prepend composition and re-enumeration independence.

use vseq::prelude::*;

#[test]
fn append_matches_concat_of_one() {
    let source = [2, 3, 2, 4, 5];
    let appended = from_slice(&source).append(42).to_vec();
    let concatenated = from_slice(&source).concat(vec![42]).to_vec();
    assert_eq!(appended, concatenated);
    assert_eq!(appended, vec![2, 3, 2, 4, 5, 42]);
}

#[test]
fn prepend_matches_one_concat_source() {
    let source = ["AAA", "", "q", "C"];
    let prepended = from_slice(&source).prepend("hi").to_vec();
    let concatenated = from_vec(vec!["hi"]).concat(from_slice(&source)).to_vec();
    assert_eq!(prepended, concatenated);
    assert_eq!(prepended, vec!["hi", "AAA", "", "q", "C"]);
}

#[test]
fn append_on_empty_is_single() {
    let empty: [i32; 0] = [];
    assert_eq!(from_slice(&empty).append(42).to_vec(), vec![42]);
    assert_eq!(from_slice(&empty).append(42).single(), Ok(42));
}

#[test]
fn prepend_on_empty_is_single() {
    let empty: [&str; 0] = [];
    assert_eq!(from_slice(&empty).prepend("aa").to_vec(), vec!["aa"]);
}

#[test]
fn chained_calls_compose_in_call_order() {
    let source = [3, 4, 5, 6];
    let chain = from_slice(&source)
        .append(12)
        .append(14)
        .prepend(-1)
        .prepend(-2);
    assert_eq!(chain.to_vec(), vec![-2, -1, 3, 4, 5, 6, 12, 14]);
}

#[test]
fn cloned_prefix_is_unaffected_by_later_chaining() {
    let source = [3, 4, 5, 6];
    let shorter = from_slice(&source).append(12);
    let longer = shorter.clone().append(14);
    // The original chain still ends at 12.
    assert_eq!(shorter.to_vec(), vec![3, 4, 5, 6, 12]);
    assert_eq!(longer.to_vec(), vec![3, 4, 5, 6, 12, 14]);
}

#[test]
fn same_chain_enumerates_the_same_twice() {
    let source = [2, 3, 2, 4];
    let chain = from_slice(&source).append(42);
    assert_eq!(chain.clone().to_vec(), chain.to_vec());
}

#[test]
fn prepend_does_not_touch_the_source_early() {
    let mut chain = from_iter(std::iter::repeat_with(|| panic!("source pulled"))).prepend(4);
    assert_eq!(chain.try_next(), Some(4));
}

#[test]
fn append_extends_known_counts() {
    let source = [1, 2, 3];
    assert_eq!(from_slice(&source).append(4).try_len(), Some(4));
    assert_eq!(from_slice(&source).prepend(0).try_len(), Some(4));
    assert_eq!(from_slice(&source).concat(vec![4, 5]).try_len(), Some(5));
}
