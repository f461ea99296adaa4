//! Primitive traversal operations.

use std::iter::{Filter, FusedIterator, Map};

use crate::error::{PreludeError, PreludeResult};

/// Splits a sequence into its first element and the rest.
///
/// This is the single peek-or-advance step every other traversal is built
/// from. Returns `None` for an empty sequence. Only one element is pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::uncons;
///
/// let (head, rest) = uncons(1..).unwrap();
/// assert_eq!(head, 1);
/// assert_eq!(rest.take(2).collect::<Vec<_>>(), vec![2, 3]);
///
/// assert!(uncons(Vec::<i32>::new()).is_none());
/// ```
pub fn uncons<I: IntoIterator>(sequence: I) -> Option<(I::Item, I::IntoIter)> {
    let mut iterator = sequence.into_iter();
    iterator.next().map(|head| (head, iterator))
}

/// Returns the first element of a sequence.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::head;
///
/// assert_eq!(head(&[3, 2, 1]), Ok(&3));
/// assert!(head(Vec::<u8>::new()).is_err());
/// ```
pub fn head<I: IntoIterator>(sequence: I) -> PreludeResult<I::Item> {
    sequence
        .into_iter()
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("head"))
}

/// Returns the sequence after its first element.
///
/// The result is the original iterator advanced by one; nothing past the
/// first element is pulled.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] immediately if the sequence is
/// empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::tail;
///
/// let rest: Vec<i32> = tail(vec![1, -2, 3, -4, 5]).unwrap().collect();
/// assert_eq!(rest, vec![-2, 3, -4, 5]);
/// ```
pub fn tail<I: IntoIterator>(sequence: I) -> PreludeResult<I::IntoIter> {
    uncons(sequence)
        .map(|(_, rest)| rest)
        .ok_or_else(|| PreludeError::empty_sequence("tail"))
}

/// Returns whether a sequence has no elements.
///
/// Pulls at most one element, so it answers in finite time for infinite
/// sequences.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::is_empty;
///
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(!is_empty(0..));
/// ```
pub fn is_empty<I: IntoIterator>(sequence: I) -> bool {
    sequence.into_iter().next().is_none()
}

/// Applies a function to each element, lazily.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::map;
///
/// let squares: Vec<u64> = map(1.., |x: u64| x * x).take(4).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn map<I, B, F>(sequence: I, function: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    sequence.into_iter().map(function)
}

/// Keeps the elements satisfying a predicate, lazily.
///
/// Pulling from the result of an infinite sequence whose remaining elements
/// never satisfy the predicate does not terminate.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::filter;
///
/// let evens: Vec<i32> = filter(1.., |x| x % 2 == 0).take(3).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<I, P>(sequence: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().filter(predicate)
}

/// Returns the number of elements of a finite sequence.
///
/// Counts iteratively, so long sequences cannot exhaust the stack.
pub fn length<I: IntoIterator>(sequence: I) -> usize {
    sequence.into_iter().fold(0, |count, _| count + 1)
}

/// Returns the last element of a finite sequence.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::last;
///
/// assert_eq!(last(vec![1, 2, 3, 4]), Ok(4));
/// ```
pub fn last<I: IntoIterator>(sequence: I) -> PreludeResult<I::Item> {
    sequence
        .into_iter()
        .fold(None, |_, element| Some(element))
        .ok_or_else(|| PreludeError::empty_sequence("last"))
}

/// Returns every element except the last, lazily.
///
/// The first element is pulled at the call, so an empty sequence fails
/// immediately. The result holds back one element at a time, which makes it
/// usable on infinite sequences.
///
/// # Errors
///
/// Returns [`PreludeError::EmptySequence`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::init;
///
/// let front: Vec<i32> = init(vec![1, 2, 3, 4, 5]).unwrap().collect();
/// assert_eq!(front, vec![1, 2, 3, 4]);
///
/// let front: Vec<u32> = init(1..).unwrap().take(3).collect();
/// assert_eq!(front, vec![1, 2, 3]);
/// ```
pub fn init<I: IntoIterator>(sequence: I) -> PreludeResult<Init<I::IntoIter>> {
    let mut iterator = sequence.into_iter();
    let pending = iterator
        .next()
        .ok_or_else(|| PreludeError::empty_sequence("init"))?;
    Ok(Init {
        pending: Some(pending),
        iterator,
    })
}

/// Returns whether a value occurs in a sequence.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::sequence::elem;
///
/// assert!(elem(&3, [1, -2, 3, -4, 5]));
/// assert!(elem(&1_000, 0..));
/// ```
pub fn elem<T, I>(value: &T, sequence: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<T>,
{
    sequence.into_iter().any(|element| element == *value)
}

/// Returns whether a value does not occur in a finite sequence.
pub fn not_elem<T, I>(value: &T, sequence: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<T>,
{
    !elem(value, sequence)
}

/// An iterator over all but the last element of a sequence.
///
/// Returned by [`init`].
#[derive(Debug, Clone)]
pub struct Init<I: Iterator> {
    pending: Option<I::Item>,
    iterator: I,
}

impl<I: Iterator> Iterator for Init<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let following = self.iterator.next()?;
        self.pending.replace(following)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One element is held back and the last one is never yielded.
        self.iterator.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Init<I> {}
