//! Count-driven splitting: `take`, `drop`, `splitAt`.

use std::iter::{Skip, Take};

use super::span::{Remainder, Split};
use crate::error::{PreludeError, PreludeResult};

/// Validates a signed count argument.
pub(crate) fn count_argument(operation: &'static str, count: isize) -> PreludeResult<usize> {
    usize::try_from(count).map_err(|_| PreludeError::negative_argument(operation, count))
}

/// Yields the first `count` elements, or the whole sequence if it is
/// shorter, lazily.
///
/// # Errors
///
/// Returns [`PreludeError::NegativeArgument`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::take;
///
/// let first: Vec<u32> = take(1.., 3).unwrap().collect();
/// assert_eq!(first, vec![1, 2, 3]);
///
/// let all: Vec<i32> = take(vec![1, -2, 3], 10).unwrap().collect();
/// assert_eq!(all, vec![1, -2, 3]);
/// ```
pub fn take<I: IntoIterator>(sequence: I, count: isize) -> PreludeResult<Take<I::IntoIter>> {
    let count = count_argument("take", count)?;
    Ok(sequence.into_iter().take(count))
}

/// Skips the first `count` elements and yields the rest, lazily.
///
/// Dropping more elements than the sequence has yields nothing.
///
/// # Errors
///
/// Returns [`PreludeError::NegativeArgument`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::drop;
///
/// let rest: Vec<i32> = drop(vec![1, -2, 3, -4, 5], 3).unwrap().collect();
/// assert_eq!(rest, vec![-4, 5]);
/// assert_eq!(drop(vec![1, 2, 3], 10).unwrap().count(), 0);
/// ```
pub fn drop<I: IntoIterator>(sequence: I, count: isize) -> PreludeResult<Skip<I::IntoIter>> {
    let count = count_argument("drop", count)?;
    Ok(sequence.into_iter().skip(count))
}

/// Splits a sequence at a position in a single traversal.
///
/// Equivalent to `(take(xs, n), drop(xs, n))`: the first `count` elements
/// are collected and the remainder continues from the same iterator.
///
/// # Errors
///
/// Returns [`PreludeError::NegativeArgument`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::split_at;
///
/// let (front, back) = split_at(1..=10, 5).unwrap().into_vecs();
/// assert_eq!(front, vec![1, 2, 3, 4, 5]);
/// assert_eq!(back, vec![6, 7, 8, 9, 10]);
/// ```
pub fn split_at<I: IntoIterator>(
    sequence: I,
    count: isize,
) -> PreludeResult<Split<I::Item, Remainder<I::IntoIter>>> {
    let count = count_argument("split_at", count)?;
    let mut rest = sequence.into_iter();
    let consumed = rest.by_ref().take(count).collect();
    Ok(Split {
        consumed,
        remainder: Remainder::new(None, rest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_zero_is_empty() {
        assert_eq!(take(vec![1, -2, 3], 0).unwrap().count(), 0);
    }

    #[test]
    fn test_negative_counts_fail_eagerly() {
        assert_eq!(
            take(0.., -1).map(|_| ()),
            Err(PreludeError::NegativeArgument {
                operation: "take",
                argument: -1
            })
        );
        assert_eq!(
            drop(0.., -10).map(|_| ()),
            Err(PreludeError::NegativeArgument {
                operation: "drop",
                argument: -10
            })
        );
        assert!(split_at(0.., -6).is_err());
    }

    #[test]
    fn test_split_at_infinite_sequence() {
        let split = split_at(0.., 3).unwrap();
        assert_eq!(split.consumed, vec![0, 1, 2]);
        assert_eq!(split.remainder.take(2).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_split_at_beyond_length() {
        let (front, back) = split_at(vec![1, 2], 5).unwrap().into_vecs();
        assert_eq!(front, vec![1, 2]);
        assert!(back.is_empty());
    }
}
