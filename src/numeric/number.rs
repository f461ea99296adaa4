//! Numeric type classes.
//!
//! [`Number`] is the `Num` class of the prelude restricted to what the
//! combinators need: additive and multiplicative identities, the ring
//! operations and an ordering. [`Signed`] adds negation, which `abs` needs,
//! and [`Integral`] adds the two division families.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A number with additive and multiplicative identities.
///
/// Implemented for every primitive integer type, signed or unsigned, and
/// for `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::Number;
///
/// fn double<N: Number>(value: N) -> N {
///     value + value
/// }
///
/// assert_eq!(double(21), 42);
/// assert_eq!(double(7_u8), 14);
/// assert_eq!(double(0.25), 0.5);
/// assert_eq!(i64::ONE + i64::ZERO, 1);
/// ```
pub trait Number:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

/// A [`Number`] that can be negated.
///
/// Implemented for every signed integer type and for `f32` and `f64`.
pub trait Signed: Number + Neg<Output = Self> {}

/// A signed integer supporting truncating (`/`, `%`) division.
///
/// The floor-division family of the prelude is derived from the
/// truncating one in [`crate::numeric`].
pub trait Integral: Signed + Ord + Div<Output = Self> + Rem<Output = Self> {
    /// Widens the value to `i128` without loss.
    fn to_i128(self) -> i128;
}

macro_rules! impl_number {
    ($zero:expr, $one:expr; $($number_type:ty),* $(,)?) => {
        $(
            impl Number for $number_type {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($signed_type:ty),* $(,)?) => {
        $(
            impl Signed for $signed_type {}
        )*
    };
}

macro_rules! impl_integral {
    ($($integral_type:ty),* $(,)?) => {
        $(
            impl Integral for $integral_type {
                #[allow(clippy::cast_lossless)]
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_number!(0, 1; i8, i16, i32, i64, i128, isize);
impl_number!(0, 1; u8, u16, u32, u64, u128, usize);
impl_number!(0.0, 1.0; f32, f64);
impl_signed!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_integral!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn identities<N: Number>() -> (N, N) {
        (N::ZERO, N::ONE)
    }

    fn negate<S: Signed>(value: S) -> S {
        -value
    }

    #[test]
    fn test_signed_integer_identities() {
        assert_eq!(identities::<i8>(), (0, 1));
        assert_eq!(identities::<i128>(), (0, 1));
    }

    #[test]
    fn test_unsigned_integer_identities() {
        assert_eq!(identities::<u16>(), (0, 1));
        assert_eq!(identities::<usize>(), (0, 1));
    }

    #[test]
    fn test_float_identities() {
        assert_eq!(identities::<f64>(), (0.0, 1.0));
    }

    #[test]
    fn test_signed_negation() {
        assert_eq!(negate(5_i16), -5);
        assert_eq!(negate(-0.5_f32), 0.5);
    }

    #[test]
    fn test_to_i128_keeps_extremes() {
        assert_eq!(i8::MIN.to_i128(), -128);
        assert_eq!(isize::MAX.to_i128(), isize::MAX as i128);
    }
}
