//! Entry adapters and arithmetic sources.

use vseq::prelude::*;

#[test]
fn slice_and_vec_adapters_agree() {
    let data = [1, 2, 3, 4, 5];
    let via_slice = from_slice(&data).to_vec();
    let via_vec = from_vec(data.to_vec()).to_vec();
    let via_iter = from_iter(data.iter().copied()).to_vec();
    assert_eq!(via_slice, via_vec);
    assert_eq!(via_slice, via_iter);
}

#[test]
fn adapters_report_their_capabilities() {
    let data = [1, 2, 3];
    assert_eq!(from_slice(&data).try_len(), Some(3));
    assert_eq!(from_slice(&data).try_as_slice(), Some(&data[..]));
    assert_eq!(from_vec(data.to_vec()).try_len(), Some(3));
    assert_eq!(from_iter(data.iter()).try_len(), None);
    assert_eq!(from_iter(data.iter()).try_as_slice(), None);
}

#[test]
fn slice_cursor_shrinks_as_it_advances() {
    let data = [1, 2, 3];
    let mut cursor = from_slice(&data);
    assert_eq!(cursor.try_next(), Some(1));
    assert_eq!(cursor.try_len(), Some(2));
    assert_eq!(cursor.try_as_slice(), Some(&data[1..]));
}

#[test]
fn exhausted_sources_stay_exhausted() {
    let mut cursor = from_vec(vec![1]);
    assert_eq!(cursor.try_next(), Some(1));
    assert_eq!(cursor.try_next(), None);
    assert_eq!(cursor.try_next(), None);
    assert_eq!(cursor.try_len(), Some(0));
}

#[test]
fn empty_once_repeat() {
    assert_eq!(empty::<i32>().to_vec(), Vec::<i32>::new());
    assert_eq!(once(7).to_vec(), vec![7]);
    assert_eq!(repeat("ha", 3).to_vec(), vec!["ha", "ha", "ha"]);
    assert_eq!(repeat('x', 0).to_vec(), Vec::<char>::new());

    assert_eq!(empty::<i32>().try_len(), Some(0));
    assert_eq!(once(7).try_len(), Some(1));
    assert_eq!(repeat(0u8, 9).try_len(), Some(9));
}

#[test]
fn range_counts_from_start() {
    assert_eq!(range(1i32, 5).to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(range(-2i64, 4).to_vec(), vec![-2, -1, 0, 1]);
    assert_eq!(range(0u8, 0).to_vec(), Vec::<u8>::new());
    assert_eq!(range(10usize, 3).try_len(), Some(3));
}

#[test]
fn range_copies_arithmetically() {
    let mut dest = [0i32; 4];
    assert_eq!(range(5i32, 10).try_copy_to(&mut dest, 2), Some(4));
    assert_eq!(dest, [7, 8, 9, 10]);
}

#[test]
#[should_panic(expected = "overflows")]
fn range_past_the_type_maximum_panics() {
    let _ = range(250u8, 10);
}

#[test]
fn ascending_sequence_includes_a_landed_end() {
    assert_eq!(sequence(0i32, 10, 2).to_vec(), vec![0, 2, 4, 6, 8, 10]);
    // A step that never lands on the bound stops below it.
    assert_eq!(sequence(0i32, 10, 3).to_vec(), vec![0, 3, 6, 9]);
}

#[test]
fn descending_sequence_mirrors_ascending() {
    assert_eq!(sequence(10i32, 0, -2).to_vec(), vec![10, 8, 6, 4, 2, 0]);
    assert_eq!(sequence(10i32, 0, -4).to_vec(), vec![10, 6, 2]);
}

#[test]
fn zero_step_on_equal_bounds_is_one_element() {
    assert_eq!(sequence(5i32, 5, 0).to_vec(), vec![5]);
}

#[test]
fn single_point_sequences() {
    assert_eq!(sequence(5i32, 5, 1).to_vec(), vec![5]);
    assert_eq!(sequence(5i32, 5, -1).to_vec(), vec![5]);
}

#[test]
fn sequence_stops_at_the_type_boundary() {
    assert_eq!(sequence(250u8, 255, 4).to_vec(), vec![250, 254]);
    assert_eq!(sequence(120i8, 127, 7).to_vec(), vec![120, 127]);
}

#[test]
#[should_panic(expected = "zero step")]
fn zero_step_on_distinct_bounds_panics() {
    let _ = sequence(1i32, 2, 0);
}

#[test]
#[should_panic(expected = "positive step")]
fn positive_step_toward_a_smaller_end_panics() {
    let _ = sequence(5i32, 1, 1);
}

#[test]
#[should_panic(expected = "negative step")]
fn negative_step_toward_a_larger_end_panics() {
    let _ = sequence(1i32, 5, -1);
}

#[test]
fn unsigned_sequences_work_in_both_directions() {
    assert_eq!(sequence(0u32, 6, 2).to_vec(), vec![0, 2, 4, 6]);
}

#[test]
fn arrays_and_vecs_convert_into_enumerators() {
    // IntoEnumerator lets containers feed binary operators directly.
    let zipped = from_vec(vec![1, 2, 3]).zip([10, 20, 30]).to_vec();
    assert_eq!(zipped, vec![(1, 10), (2, 20), (3, 30)]);

    let flat = from_vec(vec![1i32, 2])
        .flat_map(|x| vec![x, x * 10])
        .to_vec();
    assert_eq!(flat, vec![1, 10, 2, 20]);
}
