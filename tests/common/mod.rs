#![allow(dead_code)]

use std::fmt::Display;

use num_charconv::{FromChars, ToChars};

pub const SENTINEL_I32: i32 = 999;
pub const SENTINEL_U32: u32 = 888;
pub const SENTINEL_I64: i64 = -777;
pub const SENTINEL_U64: u64 = 666;

/// Encodes `n` into a roomy buffer and checks it against `expected`, including that nothing
/// past the returned end was touched.
pub fn check_to_chars<N>(n: N, expected: &str) -> bool
where
    N: ToChars,
{
    let mut buf = [0u8; 32];
    match num_charconv::to_chars(&mut buf, n) {
        Ok(end) => &buf[..end] == expected.as_bytes() && buf[end..].iter().all(|&b| b == 0),
        Err(_) => false,
    }
}

/// Decodes `text` and checks the whole input was consumed and `expected` produced.
pub fn check_from_chars<N>(expected: N, text: &str) -> bool
where
    N: FromChars + Copy + Default + PartialEq,
{
    let mut value = N::default();
    match num_charconv::from_chars(text.as_bytes(), &mut value) {
        Ok(consumed) => consumed == text.len() && value == expected,
        Err(_) => false,
    }
}

/// Round trips `n` through both primitives, checking against `core::fmt` along the way.
pub fn check_round_trip<N>(n: N) -> bool
where
    N: ToChars + FromChars + Default + Display + PartialEq,
{
    let mut buf = [0u8; 32];
    let end = match num_charconv::to_chars(&mut buf, n) {
        Ok(end) => end,
        Err(_) => return false,
    };
    if buf[..end] != *n.to_string().as_bytes() {
        return false;
    }
    let mut value = N::default();
    matches!(num_charconv::from_chars(&buf[..end], &mut value), Ok(consumed) if consumed == end)
        && value == n
}
