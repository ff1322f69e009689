//! Constant-time decimal digit counting.
//!
//! The estimate is `floor(log10(n)) + 1`, computed from the bit length of `n` times
//! `1233 / 4096` (a fixed-point approximation of `log10(2)`), then corrected by at most
//! one using [`POWERS_OF_10`].

use crate::constants::POWERS_OF_10;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

/// Returns the number of decimal digits needed to render `n`.
///
/// Zero renders as `"0"` and therefore has one digit.
///
/// # Examples
/// ```
/// use num_charconv::digit_count_u32;
///
/// assert_eq!(digit_count_u32(0), 1);
/// assert_eq!(digit_count_u32(9), 1);
/// assert_eq!(digit_count_u32(10), 2);
/// assert_eq!(digit_count_u32(u32::MAX), 10);
/// ```
#[inline]
#[cfg_attr(feature = "no-panic", no_panic)]
pub fn digit_count_u32(n: u32) -> usize {
    // 0 and 1 share a digit count, `| 1` keeps the bit length nonzero
    let bits = u32::BITS - (n | 1).leading_zeros();
    let t = ((bits * 1233) >> 12) as usize;
    t - usize::from(u64::from(n) < POWERS_OF_10[t]) + 1
}

/// Returns the number of decimal digits needed to render `n`.
///
/// # Examples
/// ```
/// use num_charconv::digit_count_u64;
///
/// assert_eq!(digit_count_u64(0), 1);
/// assert_eq!(digit_count_u64(9_999_999_999), 10);
/// assert_eq!(digit_count_u64(u64::MAX), 20);
/// ```
#[inline]
#[cfg_attr(feature = "no-panic", no_panic)]
pub fn digit_count_u64(n: u64) -> usize {
    let bits = u64::BITS - (n | 1).leading_zeros();
    let t = ((bits * 1233) >> 12) as usize;
    t - usize::from(n < POWERS_OF_10[t]) + 1
}
