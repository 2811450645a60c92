//! # S-GUIDs: Sortable 128-bit Identifiers in Base58
//!
//! An S-GUID is a 128-bit unsigned integer written as a Base58 numeral
//! (Bitcoin alphabet, no checksum). It packs two fields:
//!
//! | bits      | field         | meaning                                             |
//! |-----------|---------------|-----------------------------------------------------|
//! | 88 .. 128 | raw timestamp | milliseconds, wrapping every 2<sup>40</sup> ms      |
//! | 0 .. 88   | randomness    | opaque entropy                                      |
//!
//! Because the timestamp occupies the most significant bits,
//! identifiers sort by creation time.
//!
//! ## Decoding S-GUIDs
//!
//! [`inspect()`] runs the whole decode pipeline on a string and returns the
//! integer value, the calendar timestamp and the randomness as hex:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
// cspell:disable-next-line
//! let inspection = sguid::inspect("DgqEUGAFoqzwVk9XE4fkeF")?;
//!
//! println!("{} GMT", inspection.timestamp);
//! # Ok(()) }
//! ```
//!
//! The building blocks are available on their own:
//!
//! - [`base58`]: numerals to unbounded integers and back.
//! - [`fields`]: splitting and combining the timestamp and random fields.
//! - [`epoch`]: rollover correction and calendar formatting of timestamps.
//!
//! ## The `Sguid` type
//!
//! For identifiers known to fit 128 bits, [`Sguid`] is a `Copy` value type
//! implementing [`std::str::FromStr`] and [`std::fmt::Display`]:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use sguid::Sguid;
//!
// cspell:disable-next-line
//! let s: Sguid = "DgqEUGAFoqzwVk9XE4fkeF".parse()?;
//!
//! assert_eq!(s.raw_timestamp(), 441_264_187_113);
// cspell:disable-next-line
//! assert_eq!(s.to_string(), "DgqEUGAFoqzwVk9XE4fkeF");
//! # Ok(()) }
//! ```
//!
//! ## Known Limitations
//!
//! - Zero encodes to the empty string. There is no fixed width and no padding.
//! - The timestamp correction assumes exactly one rollover since the Unix epoch,
//!   which is true from November 2004 until September 2039.
//! - Historical tooling padded the random field to 21 hex digits, although 88 bits
//!   need 22. [`HexWidth::Legacy`] reproduces that output, [`HexWidth::Full`] is the default.
//!
//! ## Feature Flags
//!
//! - **`rand`**: Enables [`Sguid::generate()`], enabled by default.
//! - **`serde`**: Provides support for serialization and deserialization via `Serde`, optional.
//! - **`cli`**: Builds the `sguid` command line tool, optional.
//!

pub mod base58;
pub mod epoch;
mod error;
pub mod fields;
#[cfg(feature = "rand")]
mod generator;
mod inspect;
#[cfg(feature = "serde")]
mod serde;
mod sguid;

pub use error::Error;
pub use fields::{HexWidth, Packing};
pub use inspect::{Inspection, inspect, inspect_with};
pub use sguid::Sguid;

const RANDOM_BITS: u32 = 88;
const RANDOM_MASK: u128 = (1 << RANDOM_BITS) - 1;

const TIMESTAMP_BITS: u32 = 40;
const TIMESTAMP_MAX: u64 = (1 << TIMESTAMP_BITS) - 1;
