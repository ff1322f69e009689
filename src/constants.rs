// Want this to be as large as the largest possible string representation of any type
// that implements ToChars, which is currently i64::MIN / u64::MAX.
pub(crate) const MAX_BUF_LEN: usize = 20;

pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

pub(crate) const I32_MAX_LEN: usize = 11;
pub(crate) const I64_MAX_LEN: usize = 20;

/// `POWERS_OF_10[i]` is the smallest value with `i + 1` decimal digits, except index 0.
///
/// Index 0 holds 0 rather than 1 so the digit estimator never corrects below one digit.
pub(crate) const POWERS_OF_10: [u64; 20] = [
    0,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];
