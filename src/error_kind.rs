use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// Encoding only. The destination buffer is too small for the rendered integer.
    CapacityExceeded {
        /// Number of bytes the digits (excluding any sign already written) require.
        required: usize,
        /// Number of bytes that were left in the buffer.
        available: usize,
    },

    /// Decoding only. The input was empty after the optional sign, or contained a byte
    /// that is not an ASCII decimal digit.
    InvalidInput,

    /// Decoding only. The input is well formed but does not fit in the target type.
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            CapacityExceeded {
                required,
                available,
            } => write!(
                f,
                "Attempted to write {} digits into a buffer with {} bytes available.",
                required, available
            ),
            InvalidInput => write!(f, "Input is not a decimal integer."),
            OutOfRange => write!(f, "Decimal integer is out of range for the target type."),
        }
    }
}
