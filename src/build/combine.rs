//! Combining and reordering sequences.

use std::iter::{Chain, FlatMap, Flatten, FusedIterator, Zip};

/// Concatenates two sequences, lazily (`++`).
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::append;
///
/// let joined: Vec<i32> = append(vec![1, 2], vec![3]).collect();
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
pub fn append<I, J>(first: I, second: J) -> Chain<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    first.into_iter().chain(second)
}

/// Flattens a sequence of sequences, lazily.
///
/// This is `foldr (++) []`: each inner sequence is pulled only after the
/// previous one is exhausted, so an infinite sequence of finite sequences
/// concatenates to a valid infinite sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::concat;
///
/// let flat: Vec<i32> = concat(vec![vec![1], vec![-2], vec![], vec![3]]).collect();
/// assert_eq!(flat, vec![1, -2, 3]);
///
/// let blocks: Vec<u32> = concat((1..).map(|n| vec![n; 2])).take(5).collect();
/// assert_eq!(blocks, vec![1, 1, 2, 2, 3]);
/// ```
pub fn concat<I>(sequences: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    sequences.into_iter().flatten()
}

/// Maps each element to a sequence and concatenates the results, lazily:
/// `concat . map f`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::concat_map;
///
/// let doubled: String = concat_map("abc".chars(), |c| [c, c]).collect();
/// assert_eq!(doubled, "aabbcc");
/// ```
pub fn concat_map<I, U, F>(sequence: I, function: F) -> FlatMap<I::IntoIter, U, F>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().flat_map(function)
}

/// Combines two sequences element by element, stopping at the shorter one.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::zip_with;
///
/// let sums: Vec<i32> = zip_with(vec![1, 2, 3], 10.., |x, y| x + y).collect();
/// assert_eq!(sums, vec![11, 13, 15]);
/// ```
pub fn zip_with<I, J, C, F>(first: I, second: J, function: F) -> ZipWith<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item, J::Item) -> C,
{
    ZipWith {
        first: first.into_iter(),
        second: second.into_iter(),
        function,
    }
}

/// Pairs two sequences element by element, stopping at the shorter one.
///
/// `zip(xs, ys)` yields the same elements as `zip_with(xs, ys, |x, y| (x, y))`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::zip;
///
/// let pairs: Vec<(i32, char)> = zip(vec![1, 2, 3, 4, 5], "abc".chars()).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
/// ```
pub fn zip<I, J>(first: I, second: J) -> Zip<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator,
{
    first.into_iter().zip(second)
}

/// An iterator combining two sequences with a function.
///
/// Returned by [`zip_with`].
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    first: A,
    second: B,
    function: F,
}

impl<A, B, C, F> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> C,
{
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.first.next()?;
        let right = self.second.next()?;
        Some((self.function)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(first), Some(second)) => Some(first.min(second)),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        };
        (first_lower.min(second_lower), upper)
    }
}

impl<A, B, C, F> FusedIterator for ZipWith<A, B, F>
where
    A: FusedIterator,
    B: FusedIterator,
    F: FnMut(A::Item, B::Item) -> C,
{
}

/// Reverses a finite sequence.
///
/// This is `foldl (flip (:)) []`, run as a loop; on an infinite sequence it
/// does not terminate.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::reverse;
///
/// assert_eq!(reverse(1..=4), vec![4, 3, 2, 1]);
/// ```
pub fn reverse<I: IntoIterator>(sequence: I) -> Vec<I::Item> {
    let mut elements: Vec<I::Item> = sequence.into_iter().collect();
    tracing::trace!(length = elements.len(), "reverse materialized sequence");
    elements.reverse();
    elements
}

/// Sorts a finite sequence in ascending order.
///
/// The whole sequence is collected first, so an infinite sequence never
/// returns. The sort is not guaranteed to be stable.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::build::sort;
///
/// assert_eq!(
///     sort(vec![-66, 2, 6, 4, 2, 8, 5, 69, -1, 4, 8]),
///     vec![-66, -1, 2, 2, 4, 4, 5, 6, 8, 8, 69]
/// );
/// ```
pub fn sort<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut elements: Vec<I::Item> = sequence.into_iter().collect();
    tracing::trace!(length = elements.len(), "sort materialized sequence");
    elements.sort_unstable();
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_with_stops_at_shorter_first() {
        let products: Vec<i32> = zip_with(vec![2, 3], vec![4, 5, 6], |x, y| x * y).collect();
        assert_eq!(products, vec![8, 15]);
    }

    #[test]
    fn test_zip_with_size_hint() {
        let zipped = zip_with(vec![1, 2, 3], 0.., |x, y| x + y);
        assert_eq!(zipped.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_zip_with_infinite_inputs() {
        let zipped: Vec<(u32, u32)> = zip_with(0.., 100.., |x, y| (x, y)).take(2).collect();
        assert_eq!(zipped, vec![(0, 100), (1, 101)]);
    }

    #[test]
    fn test_reverse_empty() {
        assert!(reverse(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_sort_characters() {
        assert_eq!(
            sort("prelude".chars()).into_iter().collect::<String>(),
            "deeilpru"
        );
    }
}
