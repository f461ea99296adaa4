//! Error types for the prelude operations.
//!
//! Every fallible operation in this crate fails eagerly, at the call that
//! violates its precondition, with a [`PreludeError`]. Nothing is deferred
//! into the lazy evaluation of a returned sequence: `tail` of an empty
//! sequence fails immediately, not when the result is first pulled.

use std::fmt;

/// The kind of a [`PreludeError`], without its payload.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::{ErrorKind, sequence::head};
///
/// let error = head(Vec::<i32>::new()).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::EmptySequence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// An operation needed at least one element.
    EmptySequence,
    /// A count argument was negative.
    NegativeArgument,
    /// The mathematical result is undefined, as for `gcd 0 0`.
    UndefinedResult,
    /// A character is not a hexadecimal digit.
    InvalidDigit,
    /// An integer is not a Unicode scalar value.
    InvalidCodePoint,
}

/// Represents errors raised by the prelude operations.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::PreludeError;
/// use lazy_prelude::split::take;
///
/// let error = take(vec![1, 2, 3], -1).unwrap_err();
/// assert_eq!(
///     error,
///     PreludeError::NegativeArgument { operation: "take", argument: -1 }
/// );
/// assert_eq!(format!("{error}"), "take: negative argument -1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PreludeError {
    /// The operation requires a non-empty sequence.
    EmptySequence {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// The count passed to the operation was negative.
    NegativeArgument {
        /// The name of the operation that failed.
        operation: &'static str,
        /// The rejected count.
        argument: isize,
    },
    /// The result of the operation is undefined for its arguments.
    UndefinedResult {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// `digit_to_int` was applied to a character outside `0-9`, `a-f`, `A-F`.
    InvalidDigit {
        /// The rejected character.
        character: char,
    },
    /// `chr` was applied to a value that is not a Unicode scalar value.
    InvalidCodePoint {
        /// The rejected code point.
        code: u32,
    },
}

impl PreludeError {
    pub(crate) fn empty_sequence(operation: &'static str) -> Self {
        tracing::debug!(operation, "empty sequence");
        Self::EmptySequence { operation }
    }

    pub(crate) fn negative_argument(operation: &'static str, argument: isize) -> Self {
        tracing::debug!(operation, argument, "negative argument");
        Self::NegativeArgument {
            operation,
            argument,
        }
    }

    pub(crate) fn undefined_result(operation: &'static str) -> Self {
        tracing::debug!(operation, "undefined result");
        Self::UndefinedResult { operation }
    }

    pub(crate) fn invalid_digit(character: char) -> Self {
        tracing::debug!(%character, "invalid digit");
        Self::InvalidDigit { character }
    }

    pub(crate) fn invalid_code_point(code: u32) -> Self {
        tracing::debug!(code, "invalid code point");
        Self::InvalidCodePoint { code }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySequence { .. } => ErrorKind::EmptySequence,
            Self::NegativeArgument { .. } => ErrorKind::NegativeArgument,
            Self::UndefinedResult { .. } => ErrorKind::UndefinedResult,
            Self::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            Self::InvalidCodePoint { .. } => ErrorKind::InvalidCodePoint,
        }
    }

    /// Returns the name of the operation that failed, if the error carries one.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::EmptySequence { operation }
            | Self::NegativeArgument { operation, .. }
            | Self::UndefinedResult { operation } => Some(*operation),
            Self::InvalidDigit { .. } => Some("digit_to_int"),
            Self::InvalidCodePoint { .. } => Some("chr"),
        }
    }
}

impl fmt::Display for PreludeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence { operation } => {
                write!(formatter, "{operation}: empty sequence")
            }
            Self::NegativeArgument {
                operation,
                argument,
            } => write!(formatter, "{operation}: negative argument {argument}"),
            Self::UndefinedResult { operation } => {
                write!(formatter, "{operation}: result is undefined")
            }
            Self::InvalidDigit { character } => {
                write!(formatter, "digit_to_int: {character:?} is not a digit")
            }
            Self::InvalidCodePoint { code } => {
                write!(formatter, "chr: {code:#x} is not a character")
            }
        }
    }
}

impl std::error::Error for PreludeError {}

/// A specialized `Result` for prelude operations.
pub type PreludeResult<T> = Result<T, PreludeError>;

static_assertions::assert_impl_all!(PreludeError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(ErrorKind: Send, Sync, Copy);
