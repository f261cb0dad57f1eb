#![allow(clippy::expect_used, clippy::unwrap_used)]

use exemplar::{Alphabet, Range, SequenceError};
use proptest::prelude::*;

/// Bounds with `start <= end`, kept small enough to collect.
fn bounds() -> impl Strategy<Value = (i64, i64)> {
    (-1_000_000_i64..1_000_000, 0_i64..2_000).prop_map(|(start, len)| (start, start + len))
}

proptest! {
    #[test]
    fn range_yields_every_value_once_in_order((start, end) in bounds()) {
        let range = Range::new(start, end).unwrap();
        let values = range.iter().collect::<Vec<_>>();

        prop_assert_eq!(values.len(), usize::try_from(end - start + 1).unwrap());
        prop_assert_eq!(values.first(), Some(&start));
        prop_assert_eq!(values.last(), Some(&end));
        prop_assert!(values.windows(2).all(|pair| pair[1] - pair[0] == 1));
    }

    #[test]
    fn range_traversals_are_identical((start, end) in bounds()) {
        let range = Range::new(start, end).unwrap();

        let first = range.iter().collect::<Vec<_>>();
        let second = (&range).into_iter().collect::<Vec<_>>();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn range_size_hint_is_exact((start, end) in bounds()) {
        let range = Range::new(start, end).unwrap();
        let expected = usize::try_from(end - start + 1).unwrap();

        prop_assert_eq!(range.iter().size_hint(), (expected, Some(expected)));
    }

    #[test]
    fn inverted_bounds_always_fail(end in any::<i64>(), gap in 1_i64..1_000_000) {
        let start = end.saturating_add(gap);
        prop_assume!(start > end);

        prop_assert_eq!(
            Range::new(start, end),
            Err(SequenceError::InvertedBounds { start, end })
        );
    }
}

#[test]
fn test_for_loops_restart_from_the_beginning() {
    let range = Range::new(10, 50).unwrap();

    let mut first = Vec::new();
    for n in &range {
        first.push(n);
    }
    let mut second = Vec::new();
    for n in &range {
        second.push(n);
    }

    assert_eq!(first, second);
    assert_eq!(first.len(), 41);
}

#[test]
fn test_consuming_a_copy_leaves_the_original_intact() {
    let range = Range::new(1, 5).unwrap();
    let sum: i64 = range.into_iter().sum();

    assert_eq!(sum, 15);
    assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let err = Range::new(50, 10).unwrap_err();
    assert_eq!(err, SequenceError::InvertedBounds { start: 50, end: 10 });
}

#[test]
fn test_alphabet_letters() {
    let alphabet = Alphabet::new();

    let letters = alphabet.iter().collect::<Vec<_>>();
    assert_eq!(letters.len(), 26);
    assert_eq!(letters.first(), Some(&'A'));
    assert_eq!(letters.last(), Some(&'Z'));
    assert!(letters.iter().all(char::is_ascii_uppercase));
    assert_eq!(letters, alphabet.iter().collect::<Vec<_>>());
}
