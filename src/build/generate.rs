//! Infinite generators.

use std::iter::{FusedIterator, Repeat, Take};

use crate::error::PreludeResult;
use crate::split::count_argument;

/// The infinite sequence `value, value, value, ...`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::repeat;
///
/// assert_eq!(repeat('x').take(3).collect::<String>(), "xxx");
/// ```
#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    std::iter::repeat(value)
}

/// The infinite sequence `x, f(x), f(f(x)), ...`.
///
/// `function` runs only when the next element is pulled, so `n` pulled
/// elements cost `n - 1` applications. Each element is cloned once, to
/// seed the step after it.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::iterate;
/// use lazy_prelude::split::take;
///
/// let counted: Vec<i32> = take(iterate(1, |x| x + 1), 10).unwrap().collect();
/// assert_eq!(counted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
///
/// let powers: Vec<u64> = iterate(1, |x| x * 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
///
/// // The step after the last pulled element is never computed.
/// let bytes: Vec<i8> = take(iterate(1_i8, |x| x * 2), 7).unwrap().collect();
/// assert_eq!(bytes, vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
#[inline]
pub fn iterate<T, F>(seed: T, function: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate {
        seed: Some(seed),
        previous: None,
        function,
    }
}

/// `count` copies of a value: `take(repeat(value), count)`.
///
/// # Errors
///
/// Returns [`crate::PreludeError::NegativeArgument`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::replicate;
///
/// let fives: Vec<i32> = replicate(5, 3).unwrap().collect();
/// assert_eq!(fives, vec![5, 5, 5]);
/// assert!(replicate('a', -1).is_err());
/// ```
pub fn replicate<T: Clone>(value: T, count: isize) -> PreludeResult<Take<Repeat<T>>> {
    let count = count_argument("replicate", count)?;
    Ok(repeat(value).take(count))
}

/// An infinite iterator of repeated applications of a function.
///
/// Returned by [`iterate`]. Each step is computed from the previously
/// yielded element when the next one is pulled.
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    seed: Option<T>,
    previous: Option<T>,
    function: F,
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.seed.take() {
            Some(seed) => seed,
            None => (self.function)(self.previous.as_ref()?),
        };
        self.previous = Some(current.clone());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_iterate_yields_seed_first() {
        let mut sequence = iterate(String::from("a"), |text| format!("{text}a"));
        assert_eq!(sequence.next().as_deref(), Some("a"));
        assert_eq!(sequence.next().as_deref(), Some("aa"));
    }

    #[test]
    fn test_iterate_applies_function_once_per_later_element() {
        let calls = Cell::new(0);
        let values: Vec<u32> = iterate(0, |x| {
            calls.set(calls.get() + 1);
            x + 1
        })
        .take(3)
        .collect();
        assert_eq!(values, vec![0, 1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_iterate_seed_alone_runs_nothing() {
        let mut sequence = iterate(5, |_: &i32| -> i32 { unreachable!() });
        assert_eq!(sequence.next(), Some(5));
    }

    #[test]
    fn test_replicate_zero() {
        assert_eq!(replicate(1, 0).unwrap().count(), 0);
    }

    #[test]
    fn test_replicate_twenty_five() {
        let values: Vec<i32> = replicate(5, 25).unwrap().collect();
        assert_eq!(values.len(), 25);
        assert!(values.iter().all(|value| *value == 5));
    }
}
