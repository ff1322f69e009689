use crate::from_chars::FromChars;
use crate::Error;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

macro_rules! impl_FromChars {
    ($($signed:ident, $unsigned:ident with $accumulate_fn:ident);*) => {$(
        // Folds text[start..] into an unsigned accumulator. `start` may equal text.len()
        // only when the caller has already rejected the empty case.
        #[inline]
        fn $accumulate_fn(text: &[u8], start: usize) -> Result<$unsigned, Error> {
            let mut acc: $unsigned = 0;
            for (pos, &byte) in text.iter().enumerate().skip(start) {
                let digit = byte.wrapping_sub(b'0');
                if digit > 9 {
                    return Err(Error::invalid_input(pos));
                }
                acc = match acc
                    .checked_mul(10)
                    .and_then(|acc| acc.checked_add($unsigned::from(digit)))
                {
                    Some(acc) => acc,
                    None => return Err(Error::out_of_range(pos)),
                };
            }
            Ok(acc)
        }

        impl FromChars for $unsigned {
            #[inline]
            #[cfg_attr(feature = "no-panic", no_panic)]
            fn from_chars(text: &[u8], value: &mut Self) -> Result<usize, Error> {
                if text.is_empty() {
                    return Err(Error::invalid_input(0));
                }
                *value = $accumulate_fn(text, 0)?;
                Ok(text.len())
            }
        }

        impl FromChars for $signed {
            #[inline]
            #[cfg_attr(feature = "no-panic", no_panic)]
            fn from_chars(text: &[u8], value: &mut Self) -> Result<usize, Error> {
                let negative = text.first() == Some(&b'-');
                let start = usize::from(negative);
                if text.len() == start {
                    return Err(Error::invalid_input(start));
                }
                let magnitude = $accumulate_fn(text, start)?;
                let result = if negative {
                    <$signed>::checked_sub_unsigned(0, magnitude)
                } else {
                    <$signed>::checked_add_unsigned(0, magnitude)
                };
                match result {
                    Some(result) => {
                        *value = result;
                        Ok(text.len())
                    }
                    None => Err(Error::out_of_range(text.len())),
                }
            }
        }
    )*};
}

impl_FromChars!(
    i32, u32 with accumulate_u32;
    i64, u64 with accumulate_u64
);
