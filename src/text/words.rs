//! Splitting text into words and joining words back.

use std::iter::FusedIterator;
use std::str::Chars;

use crate::fold::foldl;
use crate::numeric::is_space;
use crate::split::{break_when, drop_while};

/// Splits text into words separated by runs of whitespace, lazily.
///
/// Leading and trailing whitespace and empty fragments are discarded.
/// Whitespace is exactly what [`is_space`] accepts.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::text::words;
///
/// let found: Vec<String> = words("the quick brown\n\nfox").collect();
/// assert_eq!(found, vec!["the", "quick", "brown", "fox"]);
///
/// assert_eq!(words("  \t ").count(), 0);
/// ```
pub fn words(text: &str) -> Words<Chars<'_>> {
    Words::new(text.chars())
}

/// Joins words with single spaces.
///
/// An empty sequence gives an empty string.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::text::unwords;
///
/// assert_eq!(unwords(["the", "quick", "brown", "fox"]), "the quick brown fox");
/// assert_eq!(unwords(Vec::<String>::new()), "");
/// ```
pub fn unwords<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = words.into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    foldl(
        words,
        |mut text, word| {
            text.push(' ');
            text.push_str(word.as_ref());
            text
        },
        String::from(first.as_ref()),
    )
}

/// An iterator over the words of a character sequence.
///
/// Returned by [`words`]; [`Words::new`] accepts any character sequence,
/// including infinite ones.
#[derive(Debug, Clone)]
pub struct Words<I> {
    characters: I,
}

impl<I: Iterator<Item = char>> Words<I> {
    /// Creates a word iterator over a character sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_prelude::text::Words;
    ///
    /// let endless = "ab ".chars().cycle();
    /// let first: Vec<String> = Words::new(endless).take(2).collect();
    /// assert_eq!(first, vec!["ab", "ab"]);
    /// ```
    pub fn new<S: IntoIterator<IntoIter = I>>(characters: S) -> Self {
        Self {
            characters: characters.into_iter(),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Words<I> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let word = break_when(
            drop_while(self.characters.by_ref(), |character| is_space(*character)),
            |character| is_space(*character),
        )
        .consumed;
        if word.is_empty() {
            None
        } else {
            Some(word.into_iter().collect())
        }
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for Words<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_leading_and_trailing_whitespace() {
        let found: Vec<String> = words("\r\n  alpha\x0bbeta \x0c").collect();
        assert_eq!(found, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_words_empty_text() {
        assert_eq!(words("").next(), None);
    }

    #[test]
    fn test_words_non_breaking_space_is_not_whitespace() {
        let found: Vec<String> = words("a\u{a0}b c").collect();
        assert_eq!(found, vec!["a\u{a0}b", "c"]);
    }

    #[test]
    fn test_unwords_single_word() {
        assert_eq!(unwords(["alone"]), "alone");
    }
}
