#![cfg(feature = "sequence")]
//! Integration tests for the primitive sequence operations.
//!
//! Tests cover:
//! - uncons, head, tail, last, init on finite and infinite sequences
//! - Empty sequence errors
//! - map and filter laziness
//! - length, elem, not_elem

use lazy_prelude::sequence::{
    elem, filter, head, init, is_empty, last, length, map, not_elem, tail, uncons,
};
use lazy_prelude::{ErrorKind, PreludeError};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Deconstruction
// =============================================================================

#[rstest]
fn uncons_splits_first_element() {
    let (first, rest) = uncons(vec![1, 2, 3]).unwrap();
    assert_eq!(first, 1);
    assert_eq!(rest.collect::<Vec<_>>(), vec![2, 3]);
}

#[rstest]
fn uncons_of_empty_is_none() {
    assert!(uncons(Vec::<i32>::new()).is_none());
}

#[rstest]
fn uncons_of_infinite_sequence_pulls_one() {
    let pulled = Cell::new(0);
    let (first, _rest) = uncons((10..).inspect(|_| pulled.set(pulled.get() + 1))).unwrap();
    assert_eq!(first, 10);
    assert_eq!(pulled.get(), 1);
}

#[rstest]
#[case(vec![1, -2, 3], 1)]
#[case(vec![42], 42)]
fn head_returns_first(#[case] input: Vec<i32>, #[case] expected: i32) {
    assert_eq!(head(input), Ok(expected));
}

#[rstest]
fn head_of_empty_fails() {
    assert_eq!(
        head(Vec::<i32>::new()),
        Err(PreludeError::EmptySequence { operation: "head" })
    );
}

#[rstest]
fn tail_drops_first() {
    let rest: Vec<char> = tail("abc".chars()).unwrap().collect();
    assert_eq!(rest, vec!['b', 'c']);
}

#[rstest]
fn tail_of_singleton_is_empty() {
    assert!(is_empty(tail([1]).unwrap()));
}

#[rstest]
fn tail_of_empty_fails_eagerly() {
    let error = tail(Vec::<i32>::new()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::EmptySequence);
    assert_eq!(error.operation(), Some("tail"));
}

#[rstest]
fn tail_of_infinite_sequence_is_lazy() {
    let rest: Vec<u32> = tail(0..).unwrap().take(3).collect();
    assert_eq!(rest, vec![1, 2, 3]);
}

#[rstest]
#[case(vec![1, 2, 3], 3)]
#[case(vec![7], 7)]
fn last_returns_final_element(#[case] input: Vec<i32>, #[case] expected: i32) {
    assert_eq!(last(input), Ok(expected));
}

#[rstest]
fn last_of_empty_fails() {
    assert_eq!(
        last(Vec::<i32>::new()).unwrap_err().operation(),
        Some("last")
    );
}

#[rstest]
fn init_drops_final_element() {
    let front: Vec<i32> = init(vec![1, 2, 3]).unwrap().collect();
    assert_eq!(front, vec![1, 2]);
}

#[rstest]
fn init_of_singleton_is_empty() {
    assert_eq!(init(["only"]).unwrap().count(), 0);
}

#[rstest]
fn init_of_empty_fails() {
    assert_eq!(
        init(Vec::<i32>::new()).unwrap_err(),
        PreludeError::EmptySequence { operation: "init" }
    );
}

#[rstest]
fn init_of_infinite_sequence_is_lazy() {
    let front: Vec<u32> = init(1..).unwrap().take(4).collect();
    assert_eq!(front, vec![1, 2, 3, 4]);
}

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
#[case(Vec::new(), true)]
#[case(vec![0], false)]
fn is_empty_checks_first_element(#[case] input: Vec<i32>, #[case] expected: bool) {
    assert_eq!(is_empty(input), expected);
}

#[rstest]
fn is_empty_of_infinite_sequence() {
    assert!(!is_empty(0..));
}

#[rstest]
#[case("", 0)]
#[case("prelude", 7)]
fn length_counts_elements(#[case] input: &str, #[case] expected: usize) {
    assert_eq!(length(input.chars()), expected);
}

#[rstest]
fn elem_finds_member() {
    assert!(elem(&3, vec![1, -2, 3, -4, 5]));
    assert!(!elem(&6, vec![1, -2, 3, -4, 5]));
}

#[rstest]
fn elem_short_circuits_on_infinite_sequence() {
    assert!(elem(&1_000_u64, 0..));
}

#[rstest]
fn not_elem_is_negation_of_elem() {
    assert!(not_elem(&'z', "prelude".chars()));
    assert!(!not_elem(&'p', "prelude".chars()));
}

// =============================================================================
// Lazy Transformation
// =============================================================================

#[rstest]
fn map_applies_function() {
    let doubled: Vec<i32> = map(vec![1, -2, 3], |x| x * 2).collect();
    assert_eq!(doubled, vec![2, -4, 6]);
}

#[rstest]
fn map_does_not_pull_until_consumed() {
    let calls = Cell::new(0);
    let mapped = map(0.., |x: u32| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.take(2).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn filter_keeps_matching_elements() {
    let even: Vec<i32> = filter(vec![1, 2, 3, 4, 5, 6], |x| x % 2 == 0).collect();
    assert_eq!(even, vec![2, 4, 6]);
}

#[rstest]
fn filter_of_infinite_sequence() {
    let multiples: Vec<u32> = filter(1.., |x| x % 7 == 0).take(3).collect();
    assert_eq!(multiples, vec![7, 14, 21]);
}

#[rstest]
fn head_of_filtered_infinite_sequence() {
    assert_eq!(head(filter(map(1.., |x: u64| x * x), |x| *x > 50)), Ok(64));
}
