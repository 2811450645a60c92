use std::fmt;

use num_bigint::BigUint;

use crate::{
    Error, base58, epoch,
    fields::{self, HexWidth},
};

/// The values derived from decoding an S-GUID string.
///
/// Produced by [`inspect`] and [`inspect_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// The decoded integer. Not limited to 128 bits.
    pub value: BigUint,
    /// The timestamp field before rollover correction.
    pub raw_timestamp: BigUint,
    /// The corrected timestamp as `YYYY-MM-DD HH:MM:SS.mmm` (UTC).
    pub timestamp: String,
    /// The random field as zero padded lowercase hex.
    pub randomness: String,
}

/// Decodes an S-GUID string into its integer value, timestamp and randomness.
///
/// Nothing is truncated: a numeral beyond 128 bits keeps its excess bits
/// in the timestamp field, and only fails if that timestamp is no longer
/// a calendar date.
///
/// # Errors
///
/// - [`Error::InvalidChar`] if the string is not a Base58 numeral.
/// - [`Error::DateOutOfRange`] if the timestamp cannot be converted to a date.
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
// cspell:disable-next-line
/// let inspection = sguid::inspect("DgqEUGAFoqzwVk9XE4fkeF")?;
///
/// assert_eq!(inspection.value.to_string(), "136564651282539218026219342010643681852");
/// assert_eq!(inspection.timestamp, "2018-10-29 01:16:54.889");
/// assert_eq!(inspection.randomness, "35682747349bc66424923c");
/// # Ok(()) }
/// ```
pub fn inspect(text: &str) -> Result<Inspection, Error> {
    inspect_with(text, HexWidth::default())
}

/// Like [`inspect`], with a chosen padding for the random field.
///
/// # Errors
///
/// See [`inspect`].
pub fn inspect_with(text: &str, width: HexWidth) -> Result<Inspection, Error> {
    let value = base58::decode(text)?;
    let (raw_timestamp, randomness) = fields::split_fields(&value);

    let timestamp = epoch::format(&epoch::to_absolute_millis(&raw_timestamp))?;
    let randomness = fields::format_random(&randomness, width);

    Ok(Inspection {
        value,
        raw_timestamp,
        timestamp,
        randomness,
    })
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "value:      {}", self.value)?;
        writeln!(f, "timestamp:  {} GMT", self.timestamp)?;
        write!(f, "randomness: {}", self.randomness)
    }
}
