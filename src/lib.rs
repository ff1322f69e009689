/*!
[![Crates.io](https://img.shields.io/crates/v/num-charconv.svg)](https://crates.io/crates/num-charconv)
[![Documentation](https://docs.rs/num-charconv/badge.svg)](https://docs.rs/num-charconv/)
![License](https://img.shields.io/crates/l/num_charconv.svg)

A Rust crate for converting between machine integers and their decimal text, in
caller-supplied buffers, without locale handling and without allocating.

Supported types are `i32`, `u32`, `i64` and `u64`.

# Picking what to use

* [`to_chars`] writes an integer into the front of a `&mut [u8]` and returns the end index,
  or a capacity error. Nothing past the slice is ever touched.
* [`from_chars`] parses a whole `&[u8]` into a `&mut` integer. The target is only written
  when the entire input is a valid, in-range number.
* [`Buffer`] is a stack buffer sized for every supported type, for when you just want a
  `&str`.
* [`WriteChars`] appends to fixed-capacity [`arrayvec`] containers, all or nothing.
* [`digit_count_u32`] / [`digit_count_u64`] count decimal digits in constant time.

# Examples

```rust
use num_charconv::{from_chars, to_chars, ErrorKind};

let mut buf = [0u8; 16];
let end = to_chars(&mut buf, -1234i32).unwrap();
assert_eq!(&buf[..end], b"-1234");

let mut value = 0i32;
assert_eq!(from_chars(&buf[..end], &mut value), Ok(end));
assert_eq!(value, -1234);

// Failures leave the target alone and say where parsing stopped.
let err = from_chars(b"12x4", &mut value).unwrap_err();
assert_eq!(err.kind(), ErrorKind::InvalidInput);
assert_eq!(err.position(), 2);
assert_eq!(value, -1234);
```

# Features

* `std` (default): implements `std::error::Error` for [`Error`].
* `with-serde`: `Serialize`/`Deserialize` for [`Error`] and [`ErrorKind`].
* `no-panic`: proves at link time that the conversion routines cannot panic.

[`arrayvec`]: https://docs.rs/arrayvec
[`Buffer`]: struct.Buffer.html
[`digit_count_u32`]: fn.digit_count_u32.html
[`digit_count_u64`]: fn.digit_count_u64.html
[`Error`]: struct.Error.html
[`ErrorKind`]: enum.ErrorKind.html
[`from_chars`]: fn.from_chars.html
[`to_chars`]: fn.to_chars.html
[`WriteChars`]: trait.WriteChars.html
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    dead_code,
    deprecated,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    unused
)]

mod buffer;
mod constants;
mod digits;
mod error;
mod error_kind;
mod from_chars;
mod to_chars;
mod write_chars;

pub use self::buffer::Buffer;
pub use self::digits::{digit_count_u32, digit_count_u64};
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::from_chars::{from_chars, parse, FromChars};
pub use self::to_chars::{to_chars, ToChars};
pub use self::write_chars::WriteChars;

mod private {
    pub trait Sealed {}
}
