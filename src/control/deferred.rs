//! Deferred values for non-strict right folds.
//!
//! This module provides the `Deferred<'a, T>` type: a value that is not
//! computed until it is forced. The right folds in [`crate::fold`] hand the
//! fold of the rest of the sequence to the combining function as a
//! `Deferred`, so a function that never forces it stops the traversal.
//! That is what lets `foldr` short-circuit on infinite sequences.
//!
//! # Examples
//!
//! ```rust
//! use lazy_prelude::control::Deferred;
//! use std::cell::Cell;
//!
//! let computed = Cell::new(false);
//! let deferred = Deferred::new(|| {
//!     computed.set(true);
//!     42
//! });
//!
//! // No work yet
//! assert!(!computed.get());
//!
//! assert_eq!(deferred.force(), 42);
//! assert!(computed.get());
//! ```

use std::fmt;

/// The internal state of a `Deferred` value.
enum DeferredState<'a, T> {
    /// The value has not been computed yet.
    Pending(Box<dyn FnOnce() -> T + 'a>),
    /// The value was supplied up front.
    Ready(T),
}

/// A value computed at most once, on demand.
///
/// Unlike a memoizing lazy cell, `Deferred` is consumed by [`Deferred::force`]:
/// the fold engine hands out each suspended tail exactly once, so there is
/// nothing to cache.
///
/// # Type Parameters
///
/// * `'a` - The lifetime of everything the suspended computation borrows
/// * `T` - The type of the computed value
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::control::Deferred;
///
/// let deferred = Deferred::new(|| 6 * 7).map(|value| value + 1);
/// assert_eq!(deferred.force(), 43);
/// ```
pub struct Deferred<'a, T> {
    state: DeferredState<'a, T>,
}

impl<'a, T> Deferred<'a, T> {
    /// Creates a deferred value from a computation.
    ///
    /// The computation will not run until `force()` is invoked.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A function that produces the value when called
    #[inline]
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            state: DeferredState::Pending(Box::new(thunk)),
        }
    }

    /// Creates a deferred value that is already available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_prelude::control::Deferred;
    ///
    /// let deferred = Deferred::pure(42);
    /// assert!(deferred.is_ready());
    /// assert_eq!(deferred.force(), 42);
    /// ```
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self {
            state: DeferredState::Ready(value),
        }
    }

    /// Runs the suspended computation, if any, and returns its value.
    #[inline]
    pub fn force(self) -> T {
        match self.state {
            DeferredState::Pending(thunk) => thunk(),
            DeferredState::Ready(value) => value,
        }
    }

    /// Returns whether the value is available without running a computation.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, DeferredState::Ready(_))
    }

    /// Applies a function to the value once it is forced.
    ///
    /// Neither the original computation nor `function` runs until the
    /// result is forced.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the computed value
    pub fn map<U, G>(self, function: G) -> Deferred<'a, U>
    where
        T: 'a,
        G: FnOnce(T) -> U + 'a,
    {
        Deferred::new(move || function(self.force()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            DeferredState::Pending(_) => formatter.write_str("Deferred(<pending>)"),
            DeferredState::Ready(value) => formatter
                .debug_tuple("Deferred")
                .field(value)
                .finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Deferred<'static, i32>: Send, Sync);
