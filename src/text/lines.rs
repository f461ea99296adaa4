//! Splitting text into lines and joining lines back.

use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::fold::foldl;
use crate::split::break_when;

/// Splits text at `'\n'`, lazily.
///
/// The newline characters are not part of the lines. A trailing newline
/// does not start an extra empty line, but an empty line in the middle of
/// the text is kept.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::text::lines;
///
/// let found: Vec<String> = lines("the quick\n\nbrown fox\n").collect();
/// assert_eq!(found, vec!["the quick", "", "brown fox"]);
///
/// assert_eq!(lines("").count(), 0);
/// assert_eq!(lines("\n").collect::<Vec<_>>(), vec![""]);
/// ```
pub fn lines(text: &str) -> Lines<Chars<'_>> {
    Lines::new(text.chars())
}

/// Joins lines, ending each one with `'\n'`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::text::unlines;
///
/// assert_eq!(unlines(["the quick", "", "brown fox"]), "the quick\n\nbrown fox\n");
/// assert_eq!(unlines(Vec::<&str>::new()), "");
/// ```
pub fn unlines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    foldl(
        lines,
        |mut text, line| {
            text.push_str(line.as_ref());
            text.push('\n');
            text
        },
        String::new(),
    )
}

/// An iterator over the lines of a character sequence.
///
/// Returned by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<I: Iterator<Item = char>> {
    characters: Peekable<I>,
}

impl<I: Iterator<Item = char>> Lines<I> {
    /// Creates a line iterator over a character sequence.
    pub fn new<S: IntoIterator<IntoIter = I>>(characters: S) -> Self {
        Self {
            characters: characters.into_iter().peekable(),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Lines<I> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.characters.peek()?;
        // The remainder holds the newline that ended the line, if any.
        let line = break_when(self.characters.by_ref(), |character| *character == '\n').consumed;
        Some(line.into_iter().collect())
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for Lines<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_without_trailing_newline() {
        let found: Vec<String> = lines("one\ntwo").collect();
        assert_eq!(found, vec!["one", "two"]);
    }

    #[test]
    fn test_lines_keeps_carriage_return() {
        let found: Vec<String> = lines("one\r\ntwo").collect();
        assert_eq!(found, vec!["one\r", "two"]);
    }

    #[test]
    fn test_lines_consecutive_newlines() {
        let found: Vec<String> = lines("\n\n").collect();
        assert_eq!(found, vec!["", ""]);
    }

    #[test]
    fn test_lines_infinite_input() {
        let first: Vec<String> = Lines::new("ab\n".chars().cycle()).take(3).collect();
        assert_eq!(first, vec!["ab", "ab", "ab"]);
    }
}
