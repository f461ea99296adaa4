//! Reducers built on the folds.
//!
//! `and`/`or` equal `foldr (&&) true` and `foldr (||) false`, run as loops
//! that stop at the first deciding element.

use crate::error::{PreludeError, PreludeResult};
use crate::numeric::{Number, max, min};
use crate::sequence::map;

use super::engine::foldl;

/// Conjunction of a sequence of booleans; `true` for an empty sequence.
///
/// Stops at the first `false`, so it terminates on an infinite sequence
/// that contains one.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::and;
///
/// assert!(and(vec![true, true]));
/// assert!(!and([true, false].into_iter().chain(std::iter::repeat(true))));
/// assert!(and(Vec::new()));
/// ```
pub fn and<I: IntoIterator<Item = bool>>(sequence: I) -> bool {
    for value in sequence {
        if !value {
            return false;
        }
    }
    true
}

/// Disjunction of a sequence of booleans; `false` for an empty sequence.
///
/// Stops at the first `true`, so it terminates on an infinite sequence that
/// contains one.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::or;
/// use lazy_prelude::sequence::map;
///
/// assert!(or(map(1.., |x: u32| x > 10)));
/// assert!(!or(Vec::new()));
/// ```
pub fn or<I: IntoIterator<Item = bool>>(sequence: I) -> bool {
    for value in sequence {
        if value {
            return true;
        }
    }
    false
}

/// Returns whether every element satisfies the predicate: `and . map p`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::all;
///
/// assert!(all(vec![2, 4, 6], |x| x % 2 == 0));
/// assert!(!all(1.., |x| x < 100));
/// ```
pub fn all<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    and(map(sequence, predicate))
}

/// Returns whether some element satisfies the predicate: `or . map p`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::any;
///
/// assert!(any(vec![1, 3, 4], |x| x % 2 == 0));
/// assert!(!any(Vec::<i32>::new(), |x| x > 0));
/// ```
pub fn any<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    or(map(sequence, predicate))
}

/// Sum of a finite sequence: `foldl (+) 0`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::sum;
///
/// assert_eq!(sum(vec![1, 2, 3, 4]), 10);
/// assert_eq!(sum(vec![200_u8, 55]), 255);
/// assert_eq!(sum(Vec::<f64>::new()), 0.0);
/// ```
pub fn sum<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Number,
{
    foldl(sequence, |total, element| total + element, <I::Item as Number>::ZERO)
}

/// Product of a finite sequence: `foldl (*) 1`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::product;
///
/// assert_eq!(product(1..=10), 3_628_800);
/// assert_eq!(product(Vec::<i32>::new()), 1);
/// ```
pub fn product<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Number,
{
    foldl(sequence, |total, element| total * element, <I::Item as Number>::ONE)
}

/// Largest element of a finite sequence: `foldl1 max`.
///
/// When several elements are equal and largest, the last one is returned.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
pub fn maximum<I>(sequence: I) -> PreludeResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut iterator = sequence.into_iter();
    let first = iterator
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("maximum"))?;
    Ok(iterator.fold(first, max))
}

/// Smallest element of a finite sequence: `foldl1 min`.
///
/// When several elements are equal and smallest, the first one is returned.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
pub fn minimum<I>(sequence: I) -> PreludeResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut iterator = sequence.into_iter();
    let first = iterator
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("minimum"))?;
    Ok(iterator.fold(first, min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_long_sequence_does_not_overflow() {
        assert!(and(std::iter::repeat_n(true, 1_000_000)));
    }

    #[test]
    fn test_or_stops_at_first_true() {
        let mut pulled = 0;
        let result = or((0..).map(|x| {
            pulled += 1;
            x == 2
        }));
        assert!(result);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_maximum_and_minimum() {
        assert_eq!(maximum(vec![3, 9, -2, 9]), Ok(9));
        assert_eq!(minimum(vec![3, 9, -2, 9]), Ok(-2));
    }

    #[test]
    fn test_maximum_empty_names_operation() {
        assert_eq!(
            maximum(Vec::<u8>::new()),
            Err(PreludeError::EmptySequence { operation: "maximum" })
        );
    }

    #[test]
    fn test_product_of_reals() {
        let result: f64 = product(vec![0.5, 10.0, 1.1]);
        assert!((result - 5.5).abs() < 1e-12);
    }
}
