//! Packing of the timestamp and random fields into one integer.
//!
//! The raw timestamp occupies bits 88 to 127, the randomness bits 0 to 87:
//!
//! ```text
//! value = (raw_timestamp << 88) | randomness
//! ```

use num_bigint::BigUint;

use crate::{Error, RANDOM_BITS, RANDOM_MASK, TIMESTAMP_BITS, TIMESTAMP_MAX};

/// How [`combine_fields`] treats fields wider than their slot.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Packing {
    /// Shift and OR without any checks.
    ///
    /// An oversized timestamp simply extends the value beyond 128 bits,
    /// oversized randomness bleeds into the timestamp bits.
    #[default]
    Permissive,
    /// Reject timestamps wider than 40 bits and randomness wider than 88 bits.
    Strict,
}

/// Zero padding applied when rendering the random field as hex.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum HexWidth {
    /// 22 digits, enough for every 88-bit value.
    #[default]
    Full,
    /// 21 digits, as printed by historical tooling.
    ///
    /// Random values of 85 bits or more still print all 22 digits,
    /// so the output width varies.
    Legacy,
}

impl HexWidth {
    /// Returns the number of hex digits the output is padded to.
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Full => 22,
            Self::Legacy => 21,
        }
    }
}

fn random_mask() -> BigUint {
    BigUint::from(RANDOM_MASK)
}

/// Splits a value into its raw timestamp and randomness.
///
/// Bits above 128 are not rejected; they end up in the raw timestamp.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::fields::split_fields;
///
/// let value = (BigUint::from(7_u32) << 88) | BigUint::from(42_u32);
///
/// assert_eq!(split_fields(&value), (BigUint::from(7_u32), BigUint::from(42_u32)));
/// ```
#[must_use]
pub fn split_fields(value: &BigUint) -> (BigUint, BigUint) {
    (value >> RANDOM_BITS, value & &random_mask())
}

/// Combines a raw timestamp and randomness into one value.
///
/// This is the inverse of [`split_fields`] as long as the timestamp
/// fits into 40 bits and the randomness into 88 bits.
///
/// # Errors
///
/// Only with [`Packing::Strict`]: returns [`Error::TimestampOutOfRange`] or
/// [`Error::RandomnessOutOfRange`] if a field is too wide.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::fields::{combine_fields, Packing};
///
/// let ts = BigUint::from(1_u64 << 40);
/// let rand = BigUint::from(1_u32);
///
/// assert!(combine_fields(&ts, &rand, Packing::Permissive).is_ok());
/// assert_eq!(combine_fields(&ts, &rand, Packing::Strict), Err(sguid::Error::TimestampOutOfRange));
/// ```
pub fn combine_fields(timestamp: &BigUint, randomness: &BigUint, packing: Packing) -> Result<BigUint, Error> {
    if packing == Packing::Strict {
        if timestamp.bits() > u64::from(TIMESTAMP_BITS) {
            return Err(Error::TimestampOutOfRange);
        }
        if randomness.bits() > u64::from(RANDOM_BITS) {
            return Err(Error::RandomnessOutOfRange);
        }
    }

    Ok((timestamp << RANDOM_BITS) | randomness)
}

/// Renders the randomness as lowercase hex, left padded with zeros.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::fields::{format_random, HexWidth};
///
/// let rand = BigUint::from(0xbeef_u32);
///
/// assert_eq!(format_random(&rand, HexWidth::Full), "000000000000000000beef");
/// assert_eq!(format_random(&rand, HexWidth::Legacy), "00000000000000000beef");
/// ```
#[must_use]
pub fn format_random(randomness: &BigUint, width: HexWidth) -> String {
    format!("{randomness:0width$x}", width = width.digits())
}

pub(crate) const fn from_parts(timestamp: u64, randomness: u128) -> Result<u128, Error> {
    if timestamp > TIMESTAMP_MAX {
        Err(Error::TimestampOutOfRange)
    } else if randomness > RANDOM_MASK {
        Err(Error::RandomnessOutOfRange)
    } else {
        Ok(((timestamp as u128) << RANDOM_BITS) | randomness)
    }
}
