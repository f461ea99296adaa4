//! Predicate-driven splitting: `span`, `break`, `takeWhile`, `dropWhile`.

use std::iter::{Chain, FusedIterator, SkipWhile, TakeWhile};
use std::vec;

/// The result of splitting a sequence into a consumed prefix and the rest.
///
/// The prefix is materialized; the remainder is whatever the split left
/// unpulled. Chaining the two gives back the original sequence:
/// `split.rejoin()` yields exactly the elements of the input, in order.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::span;
///
/// let split = span(1.., |x: &u32| *x < 4);
/// assert_eq!(split.consumed, vec![1, 2, 3]);
///
/// let (consumed, remainder) = split.into_parts();
/// assert_eq!(consumed.len(), 3);
/// assert_eq!(remainder.take(2).collect::<Vec<_>>(), vec![4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T, R> {
    /// The elements taken from the front of the sequence.
    pub consumed: Vec<T>,
    /// The lazy continuation after the consumed prefix.
    pub remainder: R,
}

impl<T, R> Split<T, R> {
    /// Returns the consumed prefix and the remainder as a pair.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, R) {
        (self.consumed, self.remainder)
    }

    /// Chains the consumed prefix back in front of the remainder.
    pub fn rejoin(self) -> Chain<vec::IntoIter<T>, R::IntoIter>
    where
        R: IntoIterator<Item = T>,
    {
        self.consumed.into_iter().chain(self.remainder)
    }
}

impl<T, R> Split<T, R>
where
    R: IntoIterator<Item = T>,
{
    /// Collects the remainder too, for finite sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_prelude::split::span;
    ///
    /// let (digits, rest) = span("123abc456".chars(), |c| c.is_ascii_digit()).into_vecs();
    /// assert_eq!(digits, vec!['1', '2', '3']);
    /// assert_eq!(rest.into_iter().collect::<String>(), "abc456");
    /// ```
    pub fn into_vecs(self) -> (Vec<T>, Vec<T>) {
        (self.consumed, self.remainder.into_iter().collect())
    }
}

/// The unpulled continuation of a split sequence.
///
/// When a predicate-driven split stops, the element that failed the
/// predicate has already been pulled; `Remainder` yields it first, then the
/// rest of the underlying iterator.
#[derive(Debug, Clone)]
pub struct Remainder<I: Iterator> {
    pending: Option<I::Item>,
    rest: I,
}

impl<I: Iterator> Remainder<I> {
    pub(crate) const fn new(pending: Option<I::Item>, rest: I) -> Self {
        Self { pending, rest }
    }
}

impl<I: Iterator> Iterator for Remainder<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.pending.take() {
            Some(element) => Some(element),
            None => self.rest.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.rest.size_hint();
        let pending = usize::from(self.pending.is_some());
        (
            lower.saturating_add(pending),
            upper.and_then(|upper| upper.checked_add(pending)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Remainder<I> {}

/// Splits off the longest prefix whose elements satisfy the predicate.
///
/// The prefix is collected eagerly; the remainder starts at the first
/// element that fails the predicate and is otherwise untouched. On an
/// infinite sequence whose elements all satisfy the predicate this does not
/// terminate.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::span;
/// use lazy_prelude::numeric::is_digit;
///
/// let (digits, rest) = span("123abc456".chars(), |c| is_digit(*c)).into_vecs();
/// assert_eq!(digits.into_iter().collect::<String>(), "123");
/// assert_eq!(rest.into_iter().collect::<String>(), "abc456");
/// ```
pub fn span<I, P>(sequence: I, mut predicate: P) -> Split<I::Item, Remainder<I::IntoIter>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut rest = sequence.into_iter();
    let mut consumed = Vec::new();
    while let Some(element) = rest.next() {
        if !predicate(&element) {
            return Split {
                consumed,
                remainder: Remainder::new(Some(element), rest),
            };
        }
        consumed.push(element);
    }
    Split {
        consumed,
        remainder: Remainder::new(None, rest),
    }
}

/// Splits off the longest prefix whose elements fail the predicate.
///
/// `break_when(xs, p)` is `span(xs, |x| !p(x))`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::break_when;
///
/// let (before, after) = break_when(vec![1, 2, 3, 4, 1, 2], |x| *x > 3).into_vecs();
/// assert_eq!(before, vec![1, 2, 3]);
/// assert_eq!(after, vec![4, 1, 2]);
/// ```
pub fn break_when<I, P>(sequence: I, mut predicate: P) -> Split<I::Item, Remainder<I::IntoIter>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    span(sequence, |element| !predicate(element))
}

/// Yields elements while the predicate holds, lazily.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::take_while;
///
/// let small: Vec<u32> = take_while(1.., |x| x * x < 30).collect();
/// assert_eq!(small, vec![1, 2, 3, 4, 5]);
/// ```
pub fn take_while<I, P>(sequence: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().take_while(predicate)
}

/// Skips elements while the predicate holds, then yields the rest, lazily.
///
/// Nothing is skipped until the result is first pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::split::drop_while;
///
/// let rest: Vec<i32> = drop_while(vec![1, 2, 3, 4, 1], |x| *x < 3).collect();
/// assert_eq!(rest, vec![3, 4, 1]);
/// ```
pub fn drop_while<I, P>(sequence: I, predicate: P) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().skip_while(predicate)
}
