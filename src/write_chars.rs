use arrayvec::{ArrayString, ArrayVec};

use crate::{Buffer, Error, ToChars};

/// Appends integers as decimal text to fixed-capacity containers.
///
/// Useful for assembling log lines or wire frames on the stack. An append either writes
/// the whole number or nothing: on [`ErrorKind::CapacityExceeded`] the target is left
/// unchanged and the error's [`position`] is the target's capacity.
///
/// # Example
/// ```
/// use arrayvec::ArrayString;
/// use num_charconv::WriteChars;
///
/// let mut line = ArrayString::<32>::new();
/// line.push_str("id=");
/// line.write_chars(-42i32).unwrap();
/// line.push_str(" seq=");
/// line.write_chars(7u64).unwrap();
/// assert_eq!(line.as_str(), "id=-42 seq=7");
/// ```
///
/// [`ErrorKind::CapacityExceeded`]: enum.ErrorKind.html#variant.CapacityExceeded
/// [`position`]: struct.Error.html#method.position
pub trait WriteChars {
    /// Appends `n`, returning the number of bytes written.
    fn write_chars<N>(&mut self, n: N) -> Result<usize, Error>
    where
        N: ToChars;
}

impl<const CAP: usize> WriteChars for ArrayString<CAP> {
    fn write_chars<N>(&mut self, n: N) -> Result<usize, Error>
    where
        N: ToChars,
    {
        let mut buf = Buffer::new();
        let s = buf.format(n);
        self.try_push_str(s)
            .map_err(|_| Error::capacity(s.len(), self.remaining_capacity(), CAP))?;
        Ok(s.len())
    }
}

impl<const CAP: usize> WriteChars for ArrayVec<u8, CAP> {
    fn write_chars<N>(&mut self, n: N) -> Result<usize, Error>
    where
        N: ToChars,
    {
        let mut buf = Buffer::new();
        let s = buf.format(n);
        self.try_extend_from_slice(s.as_bytes())
            .map_err(|_| Error::capacity(s.len(), self.remaining_capacity(), CAP))?;
        Ok(s.len())
    }
}
