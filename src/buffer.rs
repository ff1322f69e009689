use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;
use core::str;

use crate::constants::MAX_BUF_LEN;
use crate::ToChars;

/// <b><u>A key type</u></b>. A stack-allocated render target big enough for any integer
/// this crate supports.
///
/// Use it when you want a `&str` without sizing a buffer yourself; it never allocates and
/// formatting into it cannot fail.
///
/// # Example
/// ```
/// use num_charconv::Buffer;
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.format(i64::MIN), "-9223372036854775808");
/// assert_eq!(buf.format(0u32), "0");
/// assert_eq!(buf.len(), 1);
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN],
    len: usize,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline]
    pub const fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            len: 0,
        }
    }

    /// Renders `n` into the buffer, replacing the previous contents, and returns it.
    #[inline]
    pub fn format<N>(&mut self, n: N) -> &str
    where
        N: ToChars,
    {
        debug_assert!(N::MAX_LEN <= MAX_BUF_LEN);
        // cannot fail, MAX_BUF_LEN covers every ToChars type
        self.len = n.to_chars(&mut self.inner).unwrap_or(0);
        self.as_str()
    }

    /// Returns a byte slice of the buffer's contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns a string slice of the buffer's contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: to_chars only writes b'-' and b'0'..=b'9'
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the length (in bytes) of the buffer's contents.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been formatted into the buffer yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<str> for Buffer {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Buffer {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Default for Buffer {
    #[inline]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
