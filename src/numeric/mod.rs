//! Numeric semantics and character classification.
//!
//! This module provides the scalar helpers the sequence combinators lean on:
//!
//! - **Type classes**: [`Number`], [`Signed`], [`Integral`] and [`Floating`]
//! - **Arithmetic**: [`abs`], [`even`], [`odd`], [`gcd`], [`lcm`]
//! - **Real numbers**: [`pi`], [`exp`], [`log`], [`cos`], [`atan`], [`floor`],
//!   [`ceiling`], [`from_integral`]
//! - **Truncating division**: [`quot`], [`rem`], [`quot_rem`]
//! - **Floor division**: [`div`], [`mod_floor`], [`div_mod`], and the
//!   prelude's [`modulo`]
//! - **Ordering**: [`compare`], [`max`], [`min`]
//! - **Characters**: [`is_digit`], [`is_alpha`], [`is_upper`], [`is_lower`],
//!   [`is_alpha_num`], [`is_space`], [`to_upper`], [`to_lower`],
//!   [`digit_to_int`], [`ord`], [`chr`]
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::numeric::{div, quot, rem, mod_floor};
//!
//! // Truncating and floor division disagree on mixed signs
//! assert_eq!(quot(-7, 2), -3);
//! assert_eq!(rem(-7, 2), -1);
//! assert_eq!(div(-7, 2), -4);
//! assert_eq!(mod_floor(-7, 2), 1);
//! ```

mod character;
mod integral;
mod number;
mod real;

pub use character::{
    chr, digit_to_int, is_alpha, is_alpha_num, is_digit, is_lower, is_space, is_upper, ord,
    to_lower, to_upper,
};
pub use integral::{
    abs, compare, div, div_mod, even, gcd, lcm, max, min, mod_floor, modulo, odd, quot, quot_rem,
    rem,
};
pub use number::{Integral, Number, Signed};
pub use real::{Floating, atan, ceiling, cos, exp, floor, from_integral, log, pi};
