//! ASCII character classification and conversion.
//!
//! The classifiers deliberately ignore Unicode and locale data: letters are
//! `A-Z` and `a-z`, digits are `0-9`, and whitespace is exactly the six
//! characters space, `\t`, `\n`, `\r`, form feed and vertical tab.

use crate::error::{PreludeError, PreludeResult};

/// Returns whether the character is a decimal digit `0-9`.
#[inline]
pub const fn is_digit(character: char) -> bool {
    matches!(character, '0'..='9')
}

/// Returns whether the character is an ASCII uppercase letter.
#[inline]
pub const fn is_upper(character: char) -> bool {
    matches!(character, 'A'..='Z')
}

/// Returns whether the character is an ASCII lowercase letter.
#[inline]
pub const fn is_lower(character: char) -> bool {
    matches!(character, 'a'..='z')
}

/// Returns whether the character is an ASCII letter.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::is_alpha;
///
/// assert!(is_alpha('q'));
/// assert!(is_alpha('Q'));
/// assert!(!is_alpha('é'));
/// assert!(!is_alpha('7'));
/// ```
#[inline]
pub const fn is_alpha(character: char) -> bool {
    is_upper(character) || is_lower(character)
}

/// Returns whether the character is an ASCII letter or a decimal digit.
#[inline]
pub const fn is_alpha_num(character: char) -> bool {
    is_alpha(character) || is_digit(character)
}

/// Returns whether the character is one of the six whitespace characters.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::is_space;
///
/// for character in [' ', '\t', '\n', '\r', '\x0c', '\x0b'] {
///     assert!(is_space(character));
/// }
/// // No other Unicode whitespace
/// assert!(!is_space('\u{a0}'));
/// ```
#[inline]
pub const fn is_space(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

/// Converts a lowercase ASCII letter to uppercase; other characters are
/// returned unchanged.
#[inline]
pub const fn to_upper(character: char) -> char {
    if is_lower(character) {
        character.to_ascii_uppercase()
    } else {
        character
    }
}

/// Converts an uppercase ASCII letter to lowercase; other characters are
/// returned unchanged.
#[inline]
pub const fn to_lower(character: char) -> char {
    if is_upper(character) {
        character.to_ascii_lowercase()
    } else {
        character
    }
}

/// Converts a hexadecimal digit character to its value.
///
/// Accepts `0-9`, `a-f` and `A-F`.
///
/// # Errors
///
/// Returns [`PreludeError::InvalidDigit`] for any other character.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::digit_to_int;
///
/// assert_eq!(digit_to_int('5'), Ok(5));
/// assert_eq!(digit_to_int('F'), Ok(15));
/// assert!(digit_to_int('*').is_err());
/// ```
pub fn digit_to_int(character: char) -> PreludeResult<u32> {
    match character {
        '0'..='9' => Ok(u32::from(character) - u32::from('0')),
        'a'..='f' => Ok(u32::from(character) - u32::from('a') + 10),
        'A'..='F' => Ok(u32::from(character) - u32::from('A') + 10),
        _ => Err(PreludeError::invalid_digit(character)),
    }
}

/// Returns the code point of a character.
#[inline]
pub fn ord(character: char) -> u32 {
    u32::from(character)
}

/// Returns the character with the given code point.
///
/// # Errors
///
/// Returns [`PreludeError::InvalidCodePoint`] for surrogates and values
/// above `0x10FFFF`.
///
/// # Examples
///
/// ```rust
/// use lazy_prelude::numeric::{chr, ord};
///
/// assert_eq!(chr(65), Ok('A'));
/// assert_eq!(ord('A'), 65);
/// assert!(chr(0xD800).is_err());
/// ```
pub fn chr(code: u32) -> PreludeResult<char> {
    char::from_u32(code).ok_or_else(|| PreludeError::invalid_code_point(code))
}
