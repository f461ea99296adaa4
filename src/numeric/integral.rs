//! Integer arithmetic with exact rounding rules.
//!
//! Two division families live side by side and must not be conflated:
//!
//! | family     | quotient  | remainder | rounds toward      |
//! |------------|-----------|-----------|--------------------|
//! | truncating | [`quot`]  | [`rem`]   | zero               |
//! | floor      | [`div`]   | [`mod_floor`] | negative infinity |
//!
//! [`modulo`] is the prelude's `mod` and keeps the sign conventions of the
//! reference implementation; see its documentation for the exact table.
//!
//! All division functions panic when the divisor is zero, like `/` and `%`.

use std::cmp::Ordering;

use super::number::{Integral, Signed};
use crate::error::{PreludeError, PreludeResult};

/// Returns the absolute value of a number.
///
/// # Panics
///
/// The absolute value of an integer type's `MIN` is not representable; it
/// panics when overflow checks are enabled, like `-` does.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::abs;
///
/// assert_eq!(abs(-22), 22);
/// assert_eq!(abs(22), 22);
/// assert_eq!(abs(-22.0), 22.0);
/// ```
#[inline]
pub fn abs<N: Signed>(value: N) -> N {
    if value >= N::ZERO { value } else { -value }
}

/// Integer division truncated toward zero.
///
/// `quot(x, y) * y + rem(x, y) == x` for every `y != 0`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::quot;
///
/// assert_eq!(quot(-12, 5), -2);
/// ```
#[inline]
pub fn quot<I: Integral>(dividend: I, divisor: I) -> I {
    dividend / divisor
}

/// Remainder of [`quot`]; takes the sign of the dividend.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::rem;
///
/// assert_eq!(rem(33, 12), 9);
/// assert_eq!(rem(-33, 12), -9);
/// assert_eq!(rem(-33, -12), -9);
/// assert_eq!(rem(33, -12), 9);
/// ```
#[inline]
pub fn rem<I: Integral>(dividend: I, divisor: I) -> I {
    dividend % divisor
}

/// Integer division rounded toward negative infinity.
///
/// `div(x, y) * y + mod_floor(x, y) == x` for every `y != 0`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::div;
///
/// assert_eq!(div(16, 9), 1);
/// assert_eq!(div(-12, 5), -3);
/// assert_eq!(div(-10, 5), -2);
/// ```
pub fn div<I: Integral>(dividend: I, divisor: I) -> I {
    let quotient = dividend / divisor;
    if dividend % divisor != I::ZERO && ((dividend < I::ZERO) != (divisor < I::ZERO)) {
        quotient - I::ONE
    } else {
        quotient
    }
}

/// Remainder of [`div`]; zero or of the same sign as the divisor.
///
/// `mod_floor(x, y) == x - y * floor(x / y)`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::mod_floor;
///
/// assert_eq!(mod_floor(3, 12), 3);
/// assert_eq!(mod_floor(33, -12), -3);
/// assert_eq!(mod_floor(-33, 12), 3);
/// assert_eq!(mod_floor(-33, -12), -9);
/// ```
pub fn mod_floor<I: Integral>(dividend: I, divisor: I) -> I {
    let remainder = dividend % divisor;
    if remainder != I::ZERO && ((remainder < I::ZERO) != (divisor < I::ZERO)) {
        remainder + divisor
    } else {
        remainder
    }
}

/// The prelude's `mod`, with the reference sign conventions.
///
/// For a positive divisor the result is the truncating remainder and keeps
/// the sign of the dividend. For a negative divisor the non-zero truncating
/// remainder is shifted by the divisor toward the opposite sign of the
/// dividend. This gives:
///
/// | `x`  | `y`  | `modulo(x, y)` |
/// |------|------|----------------|
/// | 3    | 12   | 3              |
/// | 33   | -12  | -3             |
/// | -33  | 12   | -9             |
/// | -33  | -12  | 3              |
///
/// It agrees with [`mod_floor`] whenever the dividend is non-negative. Use
/// [`mod_floor`] when the floor identity with [`div`] is needed for every
/// sign combination.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub fn modulo<I: Integral>(dividend: I, divisor: I) -> I {
    let remainder = dividend % divisor;
    if remainder == I::ZERO || divisor > I::ZERO {
        remainder
    } else if dividend < I::ZERO {
        -(abs(remainder) + divisor)
    } else {
        abs(remainder) + divisor
    }
}

/// Returns `(quot(x, y), rem(x, y))`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub fn quot_rem<I: Integral>(dividend: I, divisor: I) -> (I, I) {
    (quot(dividend, divisor), rem(dividend, divisor))
}

/// Returns `(div(x, y), mod_floor(x, y))`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub fn div_mod<I: Integral>(dividend: I, divisor: I) -> (I, I) {
    (div(dividend, divisor), mod_floor(dividend, divisor))
}

/// Returns the greatest common divisor of two integers.
///
/// The result is never negative; `gcd(x, 0) == abs(x)` and
/// `gcd(0, y) == abs(y)`. Euclid's algorithm runs on the signed arguments
/// and only the result is made non-negative, so `MIN` arguments work as
/// long as the answer fits: `gcd(i32::MIN, 6) == Ok(2)`.
///
/// # Panics
///
/// `gcd(MIN, 0)` and `gcd(MIN, MIN)` are `abs(MIN)`, which overflows.
///
/// # Errors
///
/// Returns [`PreludeError::UndefinedResult`] when both arguments are zero.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::gcd;
///
/// assert_eq!(gcd(54, 24), Ok(6));
/// assert_eq!(gcd(13, -7), Ok(1));
/// assert_eq!(gcd(0, 10), Ok(10));
/// assert!(gcd(0, 0).is_err());
/// assert_eq!(gcd(i32::MIN, 6), Ok(2));
/// ```
pub fn gcd<I: Integral>(first: I, second: I) -> PreludeResult<I> {
    if first == I::ZERO && second == I::ZERO {
        return Err(PreludeError::undefined_result("gcd"));
    }
    Ok(abs(euclid(first, second)))
}

/// Euclid's algorithm on the truncating remainder, keeping signs.
///
/// The result divides both arguments and is zero only if both are.
fn euclid<I: Integral>(first: I, second: I) -> I {
    let mut larger = first;
    let mut smaller = second;
    while smaller != I::ZERO {
        // `MIN % -1` overflows, but every integer is a multiple of -1.
        let remainder = if smaller == -I::ONE {
            I::ZERO
        } else {
            rem(larger, smaller)
        };
        larger = smaller;
        smaller = remainder;
    }
    larger
}

/// Returns the least common multiple of two integers.
///
/// Zero if either argument is zero, otherwise `abs(quot(x, gcd(x, y)) * y)`.
///
/// # Panics
///
/// Overflows when the result does not fit the type, which includes every
/// `lcm(MIN, y)` with `y != 0`; it panics when overflow checks are enabled.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::lcm;
///
/// assert_eq!(lcm(2, 10), 10);
/// assert_eq!(lcm(2, 11), 22);
/// assert_eq!(lcm(0, 11), 0);
/// assert_eq!(lcm(-4, 6), 12);
/// ```
pub fn lcm<I: Integral>(first: I, second: I) -> I {
    if first == I::ZERO || second == I::ZERO {
        return I::ZERO;
    }
    abs(quot(first, euclid(first, second)) * second)
}

/// Returns whether an integer is even.
#[inline]
pub fn even<I: Integral>(value: I) -> bool {
    rem(value, I::ONE + I::ONE) == I::ZERO
}

/// Returns whether an integer is odd.
#[inline]
pub fn odd<I: Integral>(value: I) -> bool {
    !even(value)
}

/// Three-way comparison consistent with the type's ordering.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&'A', &'A'), Ordering::Equal);
/// assert_eq!(compare(&1, &33), Ordering::Less);
/// assert_eq!(compare(&2, &-3), Ordering::Greater);
/// ```
#[inline]
pub fn compare<T: Ord + ?Sized>(first: &T, second: &T) -> Ordering {
    first.cmp(second)
}

/// Returns the larger of two values; the second one when they are equal.
#[inline]
pub fn max<T: Ord>(first: T, second: T) -> T {
    if first <= second { second } else { first }
}

/// Returns the smaller of two values; the first one when they are equal.
#[inline]
pub fn min<T: Ord>(first: T, second: T) -> T {
    if first <= second { first } else { second }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_zero_remainder_is_zero() {
        assert_eq!(modulo(24, -12), 0);
        assert_eq!(modulo(-24, -12), 0);
        assert_eq!(modulo(-24, 12), 0);
    }

    #[test]
    fn test_div_exact_negative_division() {
        assert_eq!(div(-10, 5), -2);
        assert_eq!(div(10, -5), -2);
    }

    #[test]
    fn test_euclid_handles_smaller_first() {
        assert_eq!(euclid(24, 54), 6);
        assert_eq!(euclid(0, 7), 7);
    }

    #[test]
    fn test_euclid_with_minimum_and_minus_one() {
        assert_eq!(euclid(i8::MIN, -1), -1);
        assert_eq!(euclid(-1, i8::MIN), -1);
        assert_eq!(abs(euclid(i64::MIN, 10)), 2);
    }

    #[test]
    fn test_even_and_odd_negative() {
        assert!(even(-4));
        assert!(odd(-3));
        assert!(even(0));
    }

    #[test]
    fn test_max_min_ties() {
        let first = (1, 'a');
        let second = (1, 'a');
        assert_eq!(max(first, second), second);
        assert_eq!(min(first, second), first);
    }
}
