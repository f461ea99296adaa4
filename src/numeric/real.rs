//! Real-number helpers over `f32` and `f64`.
//!
//! Rounding keeps the floating type, so `floor(2.7)` is `2.0` rather than an
//! integer. Conversions into the floating types go through
//! [`from_integral`].

use super::number::{Integral, Signed};

/// A floating-point [`Signed`] number with the transcendental functions.
///
/// Implemented for `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::Floating;
///
/// fn unit_circle_x<F: Floating>(angle: F) -> F {
///     angle.cos()
/// }
///
/// assert_eq!(unit_circle_x(0.0_f32), 1.0);
/// assert_eq!(f64::PI, std::f64::consts::PI);
/// ```
pub trait Floating: Signed {
    /// The ratio of a circle's circumference to its diameter.
    const PI: Self;

    /// `e` raised to this value.
    fn exp(self) -> Self;

    /// The natural logarithm.
    fn log(self) -> Self;

    /// The cosine, in radians.
    fn cos(self) -> Self;

    /// The arctangent, in radians within `[-pi/2, pi/2]`.
    fn atan(self) -> Self;

    /// The largest whole value not greater than this one.
    fn floor(self) -> Self;

    /// The smallest whole value not less than this one.
    fn ceiling(self) -> Self;

    /// The nearest representable value to an integer.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_floating {
    ($($float_type:ident),* $(,)?) => {
        $(
            impl Floating for $float_type {
                const PI: Self = std::$float_type::consts::PI;

                #[inline]
                fn exp(self) -> Self {
                    $float_type::exp(self)
                }

                #[inline]
                fn log(self) -> Self {
                    $float_type::ln(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    $float_type::cos(self)
                }

                #[inline]
                fn atan(self) -> Self {
                    $float_type::atan(self)
                }

                #[inline]
                fn floor(self) -> Self {
                    $float_type::floor(self)
                }

                #[inline]
                fn ceiling(self) -> Self {
                    $float_type::ceil(self)
                }

                #[allow(clippy::cast_precision_loss)]
                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $float_type
                }
            }
        )*
    };
}

impl_floating!(f32, f64);

/// The constant `pi` at the requested precision.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::pi;
///
/// assert_eq!(pi::<f64>(), std::f64::consts::PI);
/// assert_eq!(pi::<f32>(), std::f32::consts::PI);
/// ```
#[inline]
#[must_use]
pub fn pi<F: Floating>() -> F {
    F::PI
}

/// `e` raised to `value`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::exp;
///
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0_f64) - std::f64::consts::E).abs() < 1e-15);
/// ```
#[inline]
pub fn exp<F: Floating>(value: F) -> F {
    value.exp()
}

/// The natural logarithm of `value`.
///
/// Follows IEEE 754: `log(0.0)` is negative infinity and the logarithm of a
/// negative number is NaN.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::log;
///
/// assert_eq!(log(1.0), 0.0);
/// assert_eq!(log(0.0_f64), f64::NEG_INFINITY);
/// assert!(log(-1.0_f32).is_nan());
/// ```
#[inline]
pub fn log<F: Floating>(value: F) -> F {
    value.log()
}

/// The cosine of an angle in radians.
///
/// The result stays a real number in `[-1, 1]`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::{cos, pi};
///
/// assert_eq!(cos(0.0), 1.0);
/// assert!((cos(pi::<f64>()) + 1.0).abs() < 1e-15);
/// assert!(cos(1.0_f64) > 0.54);
/// ```
#[inline]
pub fn cos<F: Floating>(value: F) -> F {
    value.cos()
}

/// The arctangent of `value`, in radians.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::{atan, pi};
///
/// assert_eq!(atan(0.0), 0.0);
/// assert!((atan(1.0_f64) - pi::<f64>() / 4.0).abs() < 1e-15);
/// ```
#[inline]
pub fn atan<F: Floating>(value: F) -> F {
    value.atan()
}

/// Rounds toward negative infinity.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::floor;
///
/// assert_eq!(floor(2.7), 2.0);
/// assert_eq!(floor(-2.1), -3.0);
/// ```
#[inline]
pub fn floor<F: Floating>(value: F) -> F {
    value.floor()
}

/// Rounds toward positive infinity.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::ceiling;
///
/// assert_eq!(ceiling(2.1), 3.0);
/// assert_eq!(ceiling(-2.5), -2.0);
/// ```
#[inline]
pub fn ceiling<F: Floating>(value: F) -> F {
    value.ceiling()
}

/// Converts any [`Integral`] value to a floating type.
///
/// Values beyond the float's exact integer range round to the nearest
/// representable value.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::from_integral;
///
/// let half: f64 = from_integral::<i32, f64>(7) / 2.0;
/// assert_eq!(half, 3.5);
/// assert_eq!(from_integral::<i64, f32>(-3), -3.0);
/// ```
#[inline]
pub fn from_integral<I: Integral, F: Floating>(value: I) -> F {
    F::from_i128(value.to_i128())
}
