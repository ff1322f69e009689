use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::ErrorKind;

/// This crate's error type.
///
/// Besides its [`ErrorKind`], an error carries the byte position at which the operation
/// stopped: the buffer's end for encoding failures, the offending byte (or the buffer's
/// end, see [`from_chars`]) for decoding failures.
///
/// [`ErrorKind`]: enum.ErrorKind.html
/// [`from_chars`]: fn.from_chars.html
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct Error {
    kind: ErrorKind,
    position: usize,
}

impl Error {
    /// Returns the [`ErrorKind`].
    ///
    /// [`ErrorKind`]: enum.ErrorKind.html
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte position reported with the failure.
    pub fn position(&self) -> usize {
        self.position
    }
}

macro_rules! impl_error {
    ($($fn:ident => $kind:ident),*) => {
        impl Error {
            $(
                #[inline]
                pub(crate) const fn $fn(position: usize) -> Error {
                    Error {
                        kind: ErrorKind::$kind,
                        position,
                    }
                }
            )*
        }
    };
}

impl_error!(invalid_input => InvalidInput, out_of_range => OutOfRange);

impl Error {
    #[inline]
    pub(crate) const fn capacity(required: usize, available: usize, position: usize) -> Error {
        Error {
            kind: ErrorKind::CapacityExceeded {
                required,
                available,
            },
            position,
        }
    }
}

impl From<Error> for ErrorKind {
    fn from(err: Error) -> ErrorKind {
        err.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::*;

    impl std::error::Error for Error {}
}
