//! The four fold variants.

use crate::control::Deferred;
use crate::error::{PreludeError, PreludeResult};

/// Right-associative fold with a non-strict accumulator.
///
/// `foldr(xs, f, z)` computes `f(x1, f(x2, ... f(xn, z)))`. The second
/// argument of `function` is the fold of the rest of the sequence,
/// handed over as a [`Deferred`]. A function that returns without forcing
/// it stops the traversal, so `foldr` terminates on infinite sequences
/// whenever `function` short-circuits.
///
/// Each forced tail adds a stack frame; fold long finite sequences that
/// always force their tail with [`foldl`] instead.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::foldr;
///
/// let joined = foldr(
///     vec![1, 2, 3],
///     |element, rest| format!("({element} {})", rest.force()),
///     String::from("z"),
/// );
/// assert_eq!(joined, "(1 (2 (3 z)))");
///
/// // Short-circuits on an infinite sequence
/// let first_large = foldr(1.., |x, rest| if x > 3 { x } else { rest.force() }, 0);
/// assert_eq!(first_large, 4);
/// ```
pub fn foldr<I, B, F>(sequence: I, function: F, init: B) -> B
where
    I: IntoIterator,
    F: Fn(I::Item, Deferred<'_, B>) -> B,
{
    let mut iterator = sequence.into_iter();
    fold_right_from(&mut iterator, &function, init)
}

fn fold_right_from<'a, Iter, B, F>(iterator: &'a mut Iter, function: &'a F, init: B) -> B
where
    Iter: Iterator + 'a,
    B: 'a,
    F: Fn(Iter::Item, Deferred<'_, B>) -> B,
{
    match iterator.next() {
        None => init,
        Some(element) => function(
            element,
            Deferred::new(move || fold_right_from(iterator, function, init)),
        ),
    }
}

/// Right-associative fold seeded from the last element.
///
/// `foldr1(xs, f)` computes `f(x1, f(x2, ... f(xn-1, xn)))`, with the same
/// non-strict second argument as [`foldr`].
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::foldr1;
/// use lazy_prelude::numeric::lcm;
///
/// let multiple = foldr1(2..=10, |x, rest| lcm(x, rest.force()));
/// assert_eq!(multiple, Ok(2520));
/// ```
pub fn foldr1<I, F>(sequence: I, function: F) -> PreludeResult<I::Item>
where
    I: IntoIterator,
    F: Fn(I::Item, Deferred<'_, I::Item>) -> I::Item,
{
    let mut iterator = sequence.into_iter();
    let first = iterator
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("foldr1"))?;
    Ok(fold_right1_from(&mut iterator, &function, first))
}

fn fold_right1_from<'a, Iter, F>(
    iterator: &'a mut Iter,
    function: &'a F,
    current: Iter::Item,
) -> Iter::Item
where
    Iter: Iterator + 'a,
    Iter::Item: 'a,
    F: Fn(Iter::Item, Deferred<'_, Iter::Item>) -> Iter::Item,
{
    match iterator.next() {
        None => current,
        Some(following) => function(
            current,
            Deferred::new(move || fold_right1_from(iterator, function, following)),
        ),
    }
}

/// Left-associative fold with a strict accumulator.
///
/// `foldl(xs, f, z)` computes `f(... f(f(z, x1), x2) ..., xn)` as a loop.
/// The sequence must be finite.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::foldl;
///
/// let digits = foldl(vec![1, 2, 3], |number, digit| number * 10 + digit, 0);
/// assert_eq!(digits, 123);
/// ```
pub fn foldl<I, B, F>(sequence: I, function: F, init: B) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    sequence.into_iter().fold(init, function)
}

/// Left-associative fold seeded from the first element.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::fold::foldl1;
///
/// assert_eq!(foldl1(vec![64, 4, 2, 8], |x, y| x / y), Ok(1));
/// assert!(foldl1(Vec::<i32>::new(), |x, y| x / y).is_err());
/// ```
pub fn foldl1<I, F>(sequence: I, function: F) -> PreludeResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iterator = sequence.into_iter();
    let first = iterator
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("foldl1"))?;
    Ok(iterator.fold(first, function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_foldr_empty_returns_init() {
        assert_eq!(foldr(Vec::<i32>::new(), |x, rest| x + rest.force(), 7), 7);
    }

    #[test]
    fn test_foldr_is_right_associative() {
        assert_eq!(foldr(vec![10, 4, 3], |x, rest| x - rest.force(), 0), 9);
    }

    #[test]
    fn test_foldr_does_not_pull_past_short_circuit() {
        let pulled = Cell::new(0);
        let counting = (1..).inspect(|_| pulled.set(pulled.get() + 1));
        let found = foldr(counting, |x, rest| x == 5 || rest.force(), false);
        assert!(found);
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_foldr1_singleton() {
        assert_eq!(foldr1(vec![42], |x, rest| x * rest.force()), Ok(42));
    }

    #[test]
    fn test_foldr1_empty_error() {
        assert_eq!(
            foldr1(Vec::<i32>::new(), |x, rest| x + rest.force()),
            Err(PreludeError::EmptySequence { operation: "foldr1" })
        );
    }

    #[test]
    fn test_foldl_is_left_associative() {
        assert_eq!(foldl(vec![10, 4, 3], |accumulator, x| accumulator - x, 0), -17);
    }

    #[test]
    fn test_foldl_long_sequence() {
        assert_eq!(foldl(0_u64..1_000_000, |sum, x| sum + x, 0), 499_999_500_000);
    }
}
