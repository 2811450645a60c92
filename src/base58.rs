//! Base58 numerals over the Bitcoin alphabet.
//!
//! Numerals are read most significant symbol first and have no fixed width.
//! There is no checksum and no special treatment of leading `1` symbols:
//! a leading `1` is just a zero digit and does not change the value.

use std::str::from_utf8_unchecked;

use num_bigint::BigUint;
use num_traits::Zero as _;

use crate::Error;

/// The Base58 alphabet, ordered by digit value.
///
/// Visually ambiguous characters (`0`, `O`, `I` and `l`) are left out.
///
/// ```
/// assert_eq!(sguid::base58::ALPHABET.len(), 58);
/// assert_eq!(sguid::base58::ALPHABET[0], b'1');
/// assert_eq!(sguid::base58::ALPHABET[57], b'z');
/// ```
// cspell:disable-next-line
pub const ALPHABET: [u8; 58] = *b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;

/// Length of the longest numeral a `u128` can produce.
pub(crate) const MAX_U128_LEN: usize = 22;

#[rustfmt::skip]
const DECODE: [i8; 256] = [
    /* 0x00 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x10 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x20 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x30 */  -1,  0,  1,  2,  3,  4,  5,  6,  7,  8, -1, -1, -1, -1, -1, -1,
    /* 0x40 */  -1,  9, 10, 11, 12, 13, 14, 15, 16, -1, 17, 18, 19, 20, 21, -1,
    /* 0x50 */  22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, -1, -1, -1, -1, -1,
    /* 0x60 */  -1, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, -1, 44, 45, 46,
    /* 0x70 */  47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, -1, -1, -1, -1, -1,
    /* 0x80 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x90 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xA0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xB0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xC0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xD0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xE0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xF0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

fn digit(c: u8) -> Result<u8, Error> {
    u8::try_from(DECODE[usize::from(c)]).or(Err(Error::InvalidChar))
}

const fn is_valid_char(c: u8) -> bool {
    DECODE[c as usize] >= 0
}

/// Decodes a Base58 numeral into an unbounded integer.
///
/// The empty string decodes to zero.
///
/// # Errors
///
/// Returns [`Error::InvalidChar`] if any character is not part of [`ALPHABET`].
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::base58;
///
/// assert_eq!(base58::decode("21"), Ok(BigUint::from(58_u32)));
/// assert_eq!(base58::decode(""), Ok(BigUint::from(0_u32)));
/// assert_eq!(base58::decode("0"), Err(sguid::Error::InvalidChar));
/// ```
pub fn decode(text: &str) -> Result<BigUint, Error> {
    let digits = text.bytes().map(digit).collect::<Result<Vec<u8>, Error>>()?;

    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    BigUint::from_radix_be(&digits, RADIX).ok_or(Error::InvalidChar)
}

/// Encodes an unbounded integer as a Base58 numeral.
///
/// Zero encodes to the empty string, not to `"1"`.
/// Callers needing a visible zero or a fixed width have to pad on their own.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::base58;
///
/// assert_eq!(base58::encode(&BigUint::from(58_u32)), "21");
/// assert_eq!(base58::encode(&BigUint::from(0_u32)), "");
/// ```
#[must_use]
pub fn encode(value: &BigUint) -> String {
    if value.is_zero() {
        return String::new();
    }

    value
        .to_radix_be(RADIX)
        .into_iter()
        .map(|d| char::from(ALPHABET[usize::from(d)]))
        .collect()
}

/// Checks that every character of `text` belongs to the Base58 alphabet.
///
/// # Errors
///
/// Returns [`Error::InvalidChar`] on the first character outside [`ALPHABET`].
///
/// # Example
///
/// ```
/// // cspell:disable-next-line
/// assert!(sguid::base58::validate("DgqEUGAFoqzwVk9XE4fkeF").is_ok());
/// assert!(sguid::base58::validate("").is_ok());
///
/// assert_eq!(sguid::base58::validate("Hello"), Err(sguid::Error::InvalidChar));
/// ```
pub fn validate(text: &str) -> Result<(), Error> {
    if text.bytes().all(is_valid_char) {
        Ok(())
    } else {
        Err(Error::InvalidChar)
    }
}

pub(crate) fn encode_u128(mut n: u128, buffer: &mut [u8; MAX_U128_LEN]) -> &str {
    let mut start = buffer.len();

    while n != 0 {
        start -= 1;
        buffer[start] = ALPHABET[(n % 58) as usize];
        n /= 58;
    }

    // Safety: `buffer[start..]` holds only ASCII bytes taken from `ALPHABET`
    unsafe { from_utf8_unchecked(&buffer[start..]) }
}

pub(crate) fn decode_u128(text: &str) -> Result<u128, Error> {
    let mut n = Some(0_u128);

    for byte in text.bytes() {
        let d = u128::from(digit(byte)?);
        n = n.and_then(|n| n.checked_mul(58)).and_then(|n| n.checked_add(d));
    }

    n.ok_or(Error::ValueOutOfRange)
}

#[cfg(test)]
mod tests {
    use num_traits::Zero as _;

    use super::*;

    #[test]
    fn test_alphabet() {
        for (value, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(usize::from(digit(symbol).unwrap()), value);
        }

        for ambiguous in [b'0', b'O', b'I', b'l'] {
            assert!(!ALPHABET.contains(&ambiguous));
            assert_eq!(digit(ambiguous), Err(Error::InvalidChar));
        }

        let valid = DECODE.iter().filter(|&&d| d >= 0).count();
        assert_eq!(valid, 58);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("1"), Ok(BigUint::zero()));
        assert_eq!(decode("z"), Ok(BigUint::from(57_u32)));
        assert_eq!(decode("21"), Ok(BigUint::from(58_u32)));
        assert_eq!(decode("111121"), Ok(BigUint::from(58_u32)));

        // cspell:disable-next-line
        assert_eq!(decode("YcVfxkQb6JRzqk5kF2tNLv"), Ok(BigUint::from(u128::MAX)));
        // cspell:disable-next-line
        assert_eq!(decode("YcVfxkQb6JRzqk5kF2tNLw"), Ok(BigUint::from(u128::MAX) + 1_u32));
    }

    #[test]
    fn test_decode_rejects_foreign_chars() {
        for bad in ["0", "O", "I", "l", "abc0", "DgqEUGAFoqzwVk9XE4fkeO", " 2", "2 ", "ä", "+"] {
            assert_eq!(decode(bad), Err(Error::InvalidChar), "{bad:?}");
            assert_eq!(validate(bad), Err(Error::InvalidChar), "{bad:?}");
            assert_eq!(decode_u128(bad), Err(Error::InvalidChar), "{bad:?}");
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&BigUint::zero()), "");
        assert_eq!(encode(&BigUint::from(1_u32)), "2");
        assert_eq!(encode(&BigUint::from(57_u32)), "z");
        assert_eq!(encode(&BigUint::from(58_u32)), "21");

        // cspell:disable-next-line
        assert_eq!(encode(&BigUint::from(u128::MAX)), "YcVfxkQb6JRzqk5kF2tNLv");
        assert_eq!(encode(&(BigUint::from(58_u32).pow(21))), "2111111111111111111111");
    }

    #[test]
    fn test_round_trip_nonzero() {
        let big = BigUint::from(58_u32).pow(22);
        let samples = [
            BigUint::from(1_u32),
            BigUint::from(57_u32),
            BigUint::from(58_u32),
            BigUint::from(u64::MAX),
            BigUint::from(u128::MAX),
            &big - 1_u32,
            &big * &big + 12_345_u32,
        ];

        for value in samples {
            assert_eq!(decode(&encode(&value)), Ok(value));
        }
    }

    #[test]
    fn test_zero_asymmetry() {
        assert_eq!(encode(&BigUint::zero()), "");
        assert_eq!(decode(""), Ok(BigUint::zero()));
        assert_eq!(decode("1"), Ok(BigUint::zero()));
    }

    #[test]
    fn test_u128_fast_path() {
        let mut buffer = [0; MAX_U128_LEN];

        for n in [0, 1, 57, 58, 1 << 88, u128::from(u64::MAX), u128::MAX - 1, u128::MAX] {
            let s = encode_u128(n, &mut buffer).to_string();
            assert_eq!(s, encode(&BigUint::from(n)));
            assert_eq!(decode_u128(&s), Ok(n));
        }

        // cspell:disable-next-line
        assert_eq!(decode_u128("YcVfxkQb6JRzqk5kF2tNLw"), Err(Error::ValueOutOfRange));
        assert_eq!(decode_u128("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"), Err(Error::ValueOutOfRange));
        assert_eq!(decode_u128(""), Ok(0));
    }
}
