//! Folds and the reducers built on them.
//!
//! - [`foldr`] / [`foldr1`]: right folds whose combining function receives
//!   the rest of the fold as a [`Deferred`](crate::control::Deferred), so it
//!   can stop early, even on infinite sequences
//! - [`foldl`] / [`foldl1`]: strict left folds, run as loops
//! - [`and`], [`or`], [`all`], [`any`]: short-circuiting boolean reducers
//! - [`sum`], [`product`], [`maximum`], [`minimum`]
//!
//! # Laws
//!
//! For an associative operation `f` and a finite non-empty sequence:
//!
//! ```text
//! foldl1(xs, f) == foldr1(xs, |x, rest| f(x, rest.force()))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::fold::{foldl1, foldr1};
//!
//! let values = vec![3, 1, 4, 1, 5];
//! assert_eq!(
//!     foldl1(values.clone(), |x, y| x + y),
//!     foldr1(values, |x, rest| x + rest.force()),
//! );
//! ```

mod engine;
mod reduce;

pub use engine::{foldl, foldl1, foldr, foldr1};
pub use reduce::{all, and, any, maximum, minimum, or, product, sum};
