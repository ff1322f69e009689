use crate::constants::{I32_MAX_LEN, I64_MAX_LEN, U32_MAX_LEN, U64_MAX_LEN};
use crate::digits::{digit_count_u32, digit_count_u64};
use crate::to_chars::ToChars;
use crate::Error;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

macro_rules! impl_ToChars {
    ($($i_max_len:expr => $signed:ident, $u_max_len:expr => $unsigned:ident
        with $write_fn:ident, $count_fn:ident);*) => {$(
        // Fills buf[start..start + digits] back to front.
        #[inline]
        fn $write_fn(buf: &mut [u8], start: usize, mut n: $unsigned) -> Result<usize, Error> {
            let len = $count_fn(n);
            let end = start + len;
            let digits = match buf.get_mut(start..end) {
                Some(digits) => digits,
                None => {
                    let available = buf.len().saturating_sub(start);
                    return Err(Error::capacity(len, available, buf.len()));
                }
            };
            for digit in digits.iter_mut().rev() {
                *digit = b'0' + (n % 10) as u8;
                n /= 10;
            }
            Ok(end)
        }

        impl ToChars for $unsigned {
            const MAX_LEN: usize = $u_max_len;

            #[inline]
            #[cfg_attr(feature = "no-panic", no_panic)]
            fn to_chars(self, buf: &mut [u8]) -> Result<usize, Error> {
                $write_fn(buf, 0, self)
            }
        }

        impl ToChars for $signed {
            const MAX_LEN: usize = $i_max_len;

            #[inline]
            #[cfg_attr(feature = "no-panic", no_panic)]
            fn to_chars(self, buf: &mut [u8]) -> Result<usize, Error> {
                if self >= 0 {
                    return $write_fn(buf, 0, self as $unsigned);
                }

                // two's complement magnitude, correct for MIN as well
                let magnitude = (!(self as $unsigned)).wrapping_add(1);
                match buf.first_mut() {
                    Some(sign) => *sign = b'-',
                    None => return Err(Error::capacity($count_fn(magnitude), 0, 0)),
                }
                $write_fn(buf, 1, magnitude)
            }
        }

        impl crate::private::Sealed for $signed {}
        impl crate::private::Sealed for $unsigned {}
    )*};
}

impl_ToChars!(
    I32_MAX_LEN => i32, U32_MAX_LEN => u32 with write_u32, digit_count_u32;
    I64_MAX_LEN => i64, U64_MAX_LEN => u64 with write_u64, digit_count_u64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len_matches_extremes() {
        let mut buf = [0u8; 32];
        assert_eq!(i32::MIN.to_chars(&mut buf), Ok(i32::MAX_LEN));
        assert_eq!(u32::MAX.to_chars(&mut buf), Ok(u32::MAX_LEN));
        assert_eq!(i64::MIN.to_chars(&mut buf), Ok(i64::MAX_LEN));
        assert_eq!(u64::MAX.to_chars(&mut buf), Ok(u64::MAX_LEN));
    }

    #[test]
    fn test_negative_into_empty_buffer() {
        let err = (-1i32).to_chars(&mut []).unwrap_err();
        assert_eq!(err, Error::capacity(1, 0, 0));
    }

    #[test]
    fn test_sign_stays_when_digits_do_not_fit() {
        let mut buf = [b'x'; 3];
        let err = (-1000i64).to_chars(&mut buf).unwrap_err();
        assert_eq!(err, Error::capacity(4, 2, 3));
        assert_eq!(&buf, b"-xx");
    }
}
