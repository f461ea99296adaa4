//! # lazy-prelude
//!
//! Haskell Prelude style combinators over lazy Rust sequences.
//!
//! ## Overview
//!
//! Any [`IntoIterator`] is a sequence. The combinators in this crate never
//! pull more elements than their result needs, so most of them work on
//! infinite sequences such as `0..` or [`build::iterate`]:
//!
//! - **Sequence algebra**: `uncons`, `head`, `tail`, `map`, `filter`, `elem`
//! - **Folds**: a lazy right fold that can short-circuit, strict left folds,
//!   and the reducers built on them (`and`, `or`, `all`, `any`, `sum`, ...)
//! - **Splitting**: `span`, `break_when`, `take`, `drop`, `split_at`, ...
//! - **Building**: `append`, `concat`, `zip_with`, `iterate`, `replicate`, ...
//! - **Numeric**: truncating and floor division families, `gcd`, `lcm`,
//!   ASCII character classification
//! - **Text**: `words`, `unwords`, `lines`, `unlines`
//!
//! Fallible operations return [`PreludeResult`] instead of panicking.
//!
//! ## Feature Flags
//!
//! - `numeric`: Integer helpers and character classification
//! - `control`: Deferred values and basic function combinators
//! - `sequence`: Sequence algebra, folds, splitting and builders
//! - `text`: Word and line splitting
//! - `serde`: `Serialize` for [`PreludeError`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_prelude::prelude::*;
//!
//! // The first element of an infinite sequence that satisfies a predicate.
//! let first_square_over_50 = head(filter(map(1.., |x: u32| x * x), |x| *x > 50));
//! assert_eq!(first_square_over_50, Ok(64));
//!
//! // A right fold that stops as soon as the answer is known.
//! let reaches_1000 = foldr(1.., |x: i64, rest| x > 1_000 || rest.force(), false);
//! assert!(reaches_1000);
//!
//! assert_eq!(unwords(words("  lazy   prelude ")), "lazy prelude");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled combinator.
///
/// # Usage
///
/// ```rust
/// use lazy_prelude::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorKind, PreludeError, PreludeResult};

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::build::*;
    #[cfg(feature = "sequence")]
    pub use crate::fold::*;
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
    #[cfg(feature = "sequence")]
    pub use crate::split::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

pub mod error;

pub use error::{ErrorKind, PreludeError, PreludeResult};

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "sequence")]
pub mod fold;

#[cfg(feature = "sequence")]
pub mod split;

#[cfg(feature = "sequence")]
pub mod build;

#[cfg(feature = "text")]
pub mod text;
