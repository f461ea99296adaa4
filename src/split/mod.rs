//! Splitting a sequence into a prefix and the rest.
//!
//! Every operation here scans from the front while a predicate or a
//! counter holds:
//!
//! - [`span`] / [`break_when`] / [`split_at`] materialize the prefix and
//!   return it with the lazy remainder as a [`Split`]
//! - [`take_while`] / [`drop_while`] / [`take`] / [`drop`] are the lazy
//!   single halves
//!
//! # Laws
//!
//! For every finite sequence `xs`, predicate `p` and count `n >= 0`:
//!
//! ```text
//! span(xs, p).rejoin()                == xs
//! split_at(xs, n).rejoin()            == xs
//! take(xs, n) ++ drop(xs, n)          == xs
//! span(xs, p).consumed                == take_while(xs, p)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::split::{drop, span, take};
//!
//! let (digits, rest) = span("42 apples".chars(), char::is_ascii_digit).into_vecs();
//! assert_eq!(digits, vec!['4', '2']);
//! assert_eq!(rest.len(), 7);
//!
//! let front: Vec<i32> = take(vec![1, 2, 3], 2).unwrap().collect();
//! let back: Vec<i32> = drop(vec![1, 2, 3], 2).unwrap().collect();
//! assert_eq!([front, back].concat(), vec![1, 2, 3]);
//! ```

mod count;
mod span;

pub(crate) use count::count_argument;
pub use count::{drop, split_at, take};
pub use span::{Remainder, Split, break_when, drop_while, span, take_while};
