use std::fmt;

/// Errors that can occur when decoding S-GUIDs or building them from parts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Error {
    /// The string contains a character outside the Base58 alphabet.
    InvalidChar,
    /// The decoded value does not fit into 128 bits.
    ValueOutOfRange,
    /// The timestamp does not fit into its 40-bit field, or lies outside the rollover window.
    TimestampOutOfRange,
    /// The randomness does not fit into its 88-bit field.
    RandomnessOutOfRange,
    /// The timestamp cannot be represented as a calendar date.
    DateOutOfRange,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    /// Formats the error message for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match *self {
            Self::InvalidChar => "string contains an invalid character",
            Self::ValueOutOfRange => "value does not fit into 128 bits",
            Self::TimestampOutOfRange => "timestamp is out of range",
            Self::RandomnessOutOfRange => "randomness is too large",
            Self::DateOutOfRange => "timestamp is not a representable calendar date",
        };
        write!(f, "{message}")
    }
}
