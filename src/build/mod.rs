//! Building sequences from other sequences and from generators.
//!
//! - **Combining**: [`append`], [`concat`], [`concat_map`], [`zip`],
//!   [`zip_with`]
//! - **Reordering** (finite input only): [`reverse`], [`sort`]
//! - **Generators**: [`repeat`], [`iterate`] (infinite) and [`replicate`]
//!
//! The combining operations and the generators are lazy and can be used on
//! infinite sequences; bound them with [`take`](crate::split::take) or a
//! short-circuiting consumer.
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::build::{iterate, zip_with};
//! use lazy_prelude::split::take;
//!
//! let fibonacci = iterate((0_u64, 1_u64), |&(a, b)| (b, a + b)).map(|(a, _)| a);
//! let first: Vec<u64> = take(fibonacci, 8).unwrap().collect();
//! assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13]);
//!
//! let labelled: Vec<String> =
//!     zip_with(1.., ["a", "b"], |index, name| format!("{index}:{name}")).collect();
//! assert_eq!(labelled, vec!["1:a", "2:b"]);
//! ```

mod combine;
mod generate;

pub use combine::{ZipWith, append, concat, concat_map, reverse, sort, zip, zip_with};
pub use generate::{Iterate, iterate, repeat, replicate};
