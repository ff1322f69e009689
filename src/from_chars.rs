mod integers;

use crate::Error;

/// An integer that can be parsed from decimal text.
///
/// This trait is sealed and cannot be implemented for types outside of this crate. It is
/// implemented for `i32`, `u32`, `i64` and `u64`.
pub trait FromChars: crate::private::Sealed + Sized {
    /// Parses all of `text` into `value`, returning the number of bytes consumed.
    ///
    /// See [`from_chars`] for the full contract.
    ///
    /// [`from_chars`]: fn.from_chars.html
    fn from_chars(text: &[u8], value: &mut Self) -> Result<usize, Error>;
}

/// Parses the decimal integer spanning all of `text` into `value`.
///
/// The accepted grammar is an optional `-` (signed targets only) followed by one or more
/// ASCII digits. Leading zeros are accepted. There is no `+`, no whitespace skipping and
/// no trailing garbage: every byte must belong to the number.
///
/// On success `value` is overwritten and `text.len()` is returned. On failure `value` is
/// left exactly as it was.
///
/// # Errors
///
/// * [`ErrorKind::InvalidInput`] if no digit follows the optional sign, with
///   [`position`] just past the sign; or if a byte is not a digit, with [`position`] at
///   that byte. A `-` in front of an unsigned target is such a byte.
/// * [`ErrorKind::OutOfRange`] if the digits overflow the unsigned width of the target,
///   with [`position`] at the digit that caused the overflow; or if a signed target
///   cannot hold the (negated) magnitude, with [`position`] equal to `text.len()`.
///
/// # Examples
/// ```
/// use num_charconv::{from_chars, ErrorKind};
///
/// let mut value = 0i32;
/// assert_eq!(from_chars(b"-2147483648", &mut value), Ok(11));
/// assert_eq!(value, i32::MIN);
///
/// let err = from_chars(b"2147483648", &mut value).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// assert_eq!(err.position(), 10);
/// assert_eq!(value, i32::MIN);
/// ```
///
/// [`ErrorKind::InvalidInput`]: enum.ErrorKind.html#variant.InvalidInput
/// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
/// [`position`]: struct.Error.html#method.position
#[inline]
pub fn from_chars<N>(text: &[u8], value: &mut N) -> Result<usize, Error>
where
    N: FromChars,
{
    N::from_chars(text, value)
}

/// Parses the decimal integer spanning all of `text`, returning it by value.
///
/// Same grammar and errors as [`from_chars`].
///
/// # Examples
/// ```
/// assert_eq!(num_charconv::parse::<u64>(b"0000123"), Ok(123));
/// assert!(num_charconv::parse::<u64>(b"12a").is_err());
/// ```
///
/// [`from_chars`]: fn.from_chars.html
#[inline]
pub fn parse<N>(text: &[u8]) -> Result<N, Error>
where
    N: FromChars + Default,
{
    let mut value = N::default();
    N::from_chars(text, &mut value)?;
    Ok(value)
}
