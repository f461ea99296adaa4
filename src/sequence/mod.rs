//! Primitive sequence operations.
//!
//! A sequence is anything implementing [`IntoIterator`]: owned or borrowed
//! collections, ranges, and live (possibly infinite) iterators. Every
//! operation in this crate is written against that one capability, and
//! [`uncons`] is the peek-or-advance step underneath them all.
//!
//! - **Deconstruction**: [`uncons`], [`head`], [`tail`], [`last`], [`init`]
//! - **Inspection**: [`is_empty`], [`length`], [`elem`], [`not_elem`]
//! - **Lazy transformation**: [`map`], [`filter`]
//!
//! Lazy operations return iterators and pull from their input only when
//! they are pulled from. Operations that need the end of the sequence
//! (`length`, `last`) require a finite input and run as loops, so they do
//! not grow the stack with the length of the sequence.
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::sequence::{filter, head, map, tail};
//!
//! let odd_squares = map(filter(1.., |x: &u32| x % 2 == 1), |x| x * x);
//! let rest = tail(odd_squares).unwrap();
//! assert_eq!(head(rest), Ok(9));
//! ```

mod algebra;

pub use algebra::{
    Init, elem, filter, head, init, is_empty, last, length, map, not_elem, tail, uncons,
};
