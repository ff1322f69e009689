mod integers;

use crate::Error;

/// An integer that can be written as decimal text into a caller-supplied buffer.
///
/// This trait is sealed and cannot be implemented for types outside of this crate. It is
/// implemented for `i32`, `u32`, `i64` and `u64`.
pub trait ToChars: crate::private::Sealed + Copy {
    /// Length of the longest rendering of this type, minus sign included.
    const MAX_LEN: usize;

    /// Writes `self` into the front of `buf`, returning the index one past the last digit.
    ///
    /// See [`to_chars`] for the full contract.
    ///
    /// [`to_chars`]: fn.to_chars.html
    fn to_chars(self, buf: &mut [u8]) -> Result<usize, Error>;
}

/// Writes the decimal representation of `n` into the front of `buf`.
///
/// On success returns the index immediately following the last digit written. The output
/// has no leading zeros (zero itself is `"0"`), no terminator, and nothing past the
/// returned index is touched.
///
/// # Errors
///
/// Fails with [`ErrorKind::CapacityExceeded`] if the digits do not fit. The error's
/// [`position`] is `buf.len()`, no digit is written, and nothing is ever written past the
/// end of `buf`. For a negative `n` the leading `-` has already been written to `buf[0]`
/// when the digits turn out not to fit; it is left in place.
///
/// # Examples
/// ```
/// use num_charconv::{to_chars, ErrorKind};
///
/// let mut buf = [0u8; 4];
/// assert_eq!(to_chars(&mut buf, 1000u32), Ok(4));
/// assert_eq!(&buf, b"1000");
///
/// let err = to_chars(&mut buf[..3], 1000u32).unwrap_err();
/// assert_eq!(err.position(), 3);
/// assert!(matches!(err.kind(), ErrorKind::CapacityExceeded { .. }));
/// ```
///
/// [`ErrorKind::CapacityExceeded`]: enum.ErrorKind.html#variant.CapacityExceeded
/// [`position`]: struct.Error.html#method.position
#[inline]
pub fn to_chars<N>(buf: &mut [u8], n: N) -> Result<usize, Error>
where
    N: ToChars,
{
    n.to_chars(buf)
}
