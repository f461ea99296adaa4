//! Line and word splitting for text.
//!
//! [`words`] and [`lines`] are built from the sequence splitters in
//! [`crate::split`] and work lazily over any character sequence, including
//! infinite ones. [`unwords`] and [`unlines`] are their inverses on
//! normalized input:
//!
//! ```text
//! unwords(words(s)) == s    when s has single spaces between words and no outer whitespace
//! unlines(lines(s)) == s    when s is empty or ends with '\n'
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::text::{lines, unlines, unwords, words};
//!
//! let text = "the quick brown\n\nfox\n";
//! assert_eq!(unlines(lines(text)), text);
//! assert_eq!(unwords(words(text)), "the quick brown fox");
//! ```

mod lines;
mod words;

pub use lines::{Lines, lines, unlines};
pub use words::{Words, unwords, words};
