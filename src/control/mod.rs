//! Control structures for the combinator engine.
//!
//! - [`Deferred`]: a suspended computation, forced at most once; the right
//!   folds pass the rest of the fold to the combining function as one
//! - Function combinators: [`identity`], [`constant`], [`flip`], [`until`],
//!   [`fst`], [`snd`], [`not`]
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::control::{Deferred, until};
//!
//! let deferred = Deferred::new(|| until(3, |&x| x % 7 == 0, |x| x + 1));
//! assert_eq!(deferred.force(), 7);
//! ```

mod deferred;
mod function;

pub use deferred::Deferred;
pub use function::{constant, flip, fst, identity, not, snd, until};
