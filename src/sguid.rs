use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};

use num_bigint::BigUint;

use crate::{
    Error, RANDOM_BITS, RANDOM_MASK, base58, epoch,
    fields::{self, HexWidth},
};

/// A 128-bit S-GUID.
///
/// The upper 40 bits hold a raw millisecond timestamp, the lower 88 bits randomness.
/// The textual form is a Base58 numeral of up to 22 characters.
///
/// The value zero is allowed. It has the empty string as textual form,
/// and the empty string parses back to zero.
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use sguid::Sguid;
///
// cspell:disable-next-line
/// let s: Sguid = "DgqEUGAFoqzwVk9XE4fkeF".parse()?;
///
/// assert_eq!(s.timestamp_string()?, "2018-10-29 01:16:54.889");
/// assert_eq!(s.random_hex(), "35682747349bc66424923c");
/// # Ok(()) }
/// ```
#[derive(Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Sguid(u128);

impl Sguid {
    /// Minimum [`Sguid`], zero.
    ///
    /// ```
    /// use sguid::Sguid;
    ///
    /// assert_eq!(Sguid::MIN.to_u128(), 0);
    /// assert_eq!(Sguid::MIN.to_string(), "");
    /// ```
    pub const MIN: Self = Self(0);

    /// Maximum [`Sguid`], `u128::MAX`.
    ///
    /// ```
    /// use sguid::Sguid;
    ///
    // cspell:disable-next-line
    /// assert_eq!(Sguid::MAX.to_string(), "YcVfxkQb6JRzqk5kF2tNLv");
    /// ```
    pub const MAX: Self = Self(u128::MAX);

    /// Tests if a `Sguid` is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw 40-bit timestamp, before rollover correction.
    #[must_use]
    pub const fn raw_timestamp(self) -> u64 {
        (self.0 >> RANDOM_BITS) as u64
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use sguid::{Sguid, epoch::ROLLOVER_OFFSET_MS};
    ///
    /// let s = Sguid::from_parts(5, 0).unwrap();
    ///
    /// assert_eq!(s.timestamp(), ROLLOVER_OFFSET_MS + 5);
    /// ```
    #[must_use]
    pub const fn timestamp(self) -> u64 {
        epoch::absolute_millis(self.raw_timestamp())
    }

    /// Returns the random part, limited to 88 bits.
    #[must_use]
    pub const fn randomness(self) -> u128 {
        self.0 & RANDOM_MASK
    }

    /// Returns the raw timestamp and randomness as a pair.
    #[must_use]
    pub const fn to_parts(self) -> (u64, u128) {
        (self.raw_timestamp(), self.randomness())
    }

    /// Creates a `Sguid` from a raw timestamp and randomness.
    ///
    /// # Errors
    ///
    /// Will fail if the raw timestamp (40 bits) or randomness (88 bits) are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use sguid::Sguid;
    ///
    /// let s = Sguid::from_parts(441_264_187_113, 0x3568_2747_349b_c664_2492_3c).unwrap();
    ///
    // cspell:disable-next-line
    /// assert_eq!(s.to_string(), "DgqEUGAFoqzwVk9XE4fkeF");
    ///
    /// assert!(Sguid::from_parts(1 << 40, 0).is_err());
    /// ```
    pub const fn from_parts(raw_timestamp: u64, randomness: u128) -> Result<Self, Error> {
        match fields::from_parts(raw_timestamp, randomness) {
            Ok(n) => Ok(Self(n)),
            Err(error) => Err(error),
        }
    }

    /// Creates a `Sguid` from milliseconds since the Unix epoch and randomness.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TimestampOutOfRange`] for timestamps outside the rollover
    /// window (November 2004 to September 2039), and with [`Error::RandomnessOutOfRange`]
    /// if the randomness exceeds 88 bits.
    pub const fn from_absolute_parts(millis: u64, randomness: u128) -> Result<Self, Error> {
        match epoch::raw_millis(millis) {
            Ok(raw) => Self::from_parts(raw, randomness),
            Err(error) => Err(error),
        }
    }

    /// Returns the timestamp as a [`SystemTime`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    /// use sguid::Sguid;
    ///
    /// let s = Sguid::from_absolute_parts(1_700_000_000_000, 1).unwrap();
    ///
    /// assert_eq!(s.datetime(), SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_000));
    /// ```
    #[must_use]
    pub fn datetime(self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.timestamp())
    }

    /// Formats the timestamp as `YYYY-MM-DD HH:MM:SS.mmm` in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateOutOfRange`] if the calendar conversion fails,
    /// which cannot happen for 40-bit timestamps with the supported date library.
    pub fn timestamp_string(self) -> Result<String, Error> {
        epoch::format(&BigUint::from(self.timestamp()))
    }

    /// Returns the randomness as 22 lowercase hex digits.
    #[must_use]
    pub fn random_hex(self) -> String {
        self.random_hex_with(HexWidth::Full)
    }

    /// Returns the randomness as lowercase hex, padded to the given width.
    ///
    /// # Example
    ///
    /// ```
    /// use sguid::{HexWidth, Sguid};
    ///
    /// let s = Sguid::from_parts(0, 0xff).unwrap();
    ///
    /// assert_eq!(s.random_hex_with(HexWidth::Full), "00000000000000000000ff");
    /// assert_eq!(s.random_hex_with(HexWidth::Legacy), "0000000000000000000ff");
    /// ```
    #[must_use]
    pub fn random_hex_with(self, width: HexWidth) -> String {
        format!("{:0width$x}", self.randomness(), width = width.digits())
    }

    /// Converts a `Sguid` into binary bytes (big endian).
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Creates a `Sguid` from binary bytes (big endian).
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Converts a `Sguid` into a `u128` integer.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use sguid::Sguid;
    ///
    // cspell:disable-next-line
    /// let s: Sguid = "DgqEUGAFoqzwVk9XE4fkeF".parse()?;
    ///
    /// assert_eq!(s.to_u128(), 136564651282539218026219342010643681852);
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        self.0
    }

    /// Creates a `Sguid` from a `u128` integer.
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n)
    }

    /// Converts a `Sguid` into an unbounded integer.
    #[must_use]
    pub fn to_biguint(self) -> BigUint {
        BigUint::from(self.0)
    }

    /// Return the string representation of a `Sguid` and never panics.
    ///
    /// While the blanket implementation of [`std::string::ToString`] for `std::fmt::Display` may
    /// panic, this method returns `None` if the memory for the string cannot be allocated.
    #[must_use]
    pub fn try_to_string(self) -> Option<String> {
        let mut s = String::new();
        s.try_reserve_exact(base58::MAX_U128_LEN).ok()?;

        let mut buffer = [0; base58::MAX_U128_LEN];
        s.push_str(base58::encode_u128(self.0, &mut buffer));

        Some(s)
    }
}

impl fmt::Debug for Sguid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        struct Timestamp(Result<String, Error>);
        impl fmt::Debug for Timestamp {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
                match &self.0 {
                    Ok(ts) => write!(f, "\"{ts}\""),
                    Err(error) => write!(f, "<{error}>"),
                }
            }
        }

        struct Randomness(String);
        impl fmt::Debug for Randomness {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
                write!(f, "\"{}\"", self.0)
            }
        }

        let mut buffer = [0; base58::MAX_U128_LEN];

        f.debug_struct("Sguid")
            .field("string", &base58::encode_u128(self.0, &mut buffer))
            .field("timestamp", &Timestamp(self.timestamp_string()))
            .field("randomness", &Randomness(self.random_hex()))
            .finish()
    }
}

impl fmt::Display for Sguid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0; base58::MAX_U128_LEN];
        f.write_str(base58::encode_u128(self.0, &mut buffer))
    }
}

impl FromStr for Sguid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base58::decode_u128(s).map(Self)
    }
}

impl From<Sguid> for u128 {
    fn from(sguid: Sguid) -> Self {
        sguid.to_u128()
    }
}

impl From<u128> for Sguid {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Sguid> for [u8; 16] {
    fn from(sguid: Sguid) -> Self {
        sguid.to_bytes()
    }
}

impl From<[u8; 16]> for Sguid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Sguid> for BigUint {
    fn from(sguid: Sguid) -> Self {
        sguid.to_biguint()
    }
}

impl TryFrom<&BigUint> for Sguid {
    type Error = Error;
    fn try_from(n: &BigUint) -> Result<Self, Self::Error> {
        u128::try_from(n).map(Self).or(Err(Error::ValueOutOfRange))
    }
}
