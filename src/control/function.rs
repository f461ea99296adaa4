//! Small function combinators from the standard prelude.
//!
//! - [`identity`]: returns its argument (`id`)
//! - [`constant`]: a function that ignores its input (`const`)
//! - [`flip`]: swaps the arguments of a binary function
//! - [`until`]: re-applies a function until a predicate holds
//! - [`fst`] / [`snd`]: pair projections
//! - [`not`]: boolean negation as a function value

/// The prelude's `id`. Passed where a combinator wants a function but the
/// elements should go through untouched, e.g. flattening with `concat_map`.
///
/// # Examples
///
/// ```
/// use lazy_prelude::build::concat_map;
/// use lazy_prelude::control::identity;
///
/// let flat: Vec<char> = concat_map(vec!["ab", "c"], |word| word.chars().map(identity)).collect();
/// assert_eq!(flat, vec!['a', 'b', 'c']);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// The prelude's `const`: a one-argument function whose result is `value`
/// whatever it is applied to. Each call hands out a fresh clone.
///
/// # Examples
///
/// ```
/// use lazy_prelude::control::constant;
/// use lazy_prelude::sequence::map;
///
/// let masked: String = map("secret".chars(), constant('*')).collect();
/// assert_eq!(masked, "******");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and flipping twice gives back `f`.
///
/// # Examples
///
/// ```
/// use lazy_prelude::control::flip;
///
/// let subtract_from = flip(|minuend: i32, subtrahend: i32| minuend - subtrahend);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Applies `function` to `value` repeatedly until `predicate` holds, and
/// returns the first value that satisfies it.
///
/// The starting value is tested first, so `until(x, p, f) == x` whenever
/// `p(&x)` already holds. If the predicate is never satisfied this does not
/// terminate.
///
/// # Examples
///
/// ```
/// use lazy_prelude::control::until;
///
/// assert_eq!(until(1, |&x| x > 1000, |x| x * 2), 1024);
/// ```
pub fn until<T, P, F>(value: T, mut predicate: P, mut function: F) -> T
where
    P: FnMut(&T) -> bool,
    F: FnMut(T) -> T,
{
    let mut current = value;
    while !predicate(&current) {
        current = function(current);
    }
    current
}

/// Returns the first component of a pair.
#[inline]
pub fn fst<A, B>(pair: (A, B)) -> A {
    pair.0
}

/// Returns the second component of a pair.
#[inline]
pub fn snd<A, B>(pair: (A, B)) -> B {
    pair.1
}

/// Boolean negation.
#[inline]
pub const fn not(value: bool) -> bool {
    !value
}
