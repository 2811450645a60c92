//! Conversion of raw 40-bit timestamps into calendar time.
//!
//! The raw timestamp counts milliseconds modulo 2<sup>40</sup>, so it wraps
//! about every 34.8 years. It wrapped exactly once since the Unix epoch
//! (on 2004-11-03 19:53:47.776 UTC), so adding one full period recovers
//! Unix milliseconds. This only holds until the next wrap in September 2039;
//! later timestamps cannot be told apart from earlier ones.

use chrono::{DateTime, Datelike as _, Utc};
use num_bigint::BigUint;
use num_traits::ToPrimitive as _;

use crate::{Error, TIMESTAMP_BITS};

/// Milliseconds added to every raw timestamp: one full 40-bit period.
pub const ROLLOVER_OFFSET_MS: u64 = 1 << TIMESTAMP_BITS;

// The year is written separately: `%Y` puts a `+` in front of years past 9999.
const DATETIME_FORMAT: &str = "%m-%d %H:%M:%S";

/// Converts a raw timestamp into milliseconds since the Unix epoch.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::epoch::to_absolute_millis;
///
/// assert_eq!(to_absolute_millis(&BigUint::from(0_u32)), BigUint::from(1_099_511_627_776_u64));
/// ```
#[must_use]
pub fn to_absolute_millis(raw: &BigUint) -> BigUint {
    raw + BigUint::from(ROLLOVER_OFFSET_MS)
}

/// Fixed width variant of [`to_absolute_millis`].
///
/// `raw` is expected to be a 40-bit value; larger values saturate.
#[must_use]
pub const fn absolute_millis(raw: u64) -> u64 {
    raw.saturating_add(ROLLOVER_OFFSET_MS)
}

/// Converts milliseconds since the Unix epoch back into a raw timestamp.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if `millis` lies outside the
/// window between the first and the second rollover.
///
/// # Example
///
/// ```
/// use sguid::epoch::{raw_millis, ROLLOVER_OFFSET_MS};
///
/// assert_eq!(raw_millis(ROLLOVER_OFFSET_MS), Ok(0));
/// assert_eq!(raw_millis(1_700_000_000_000), Ok(1_700_000_000_000 - ROLLOVER_OFFSET_MS));
///
/// assert!(raw_millis(0).is_err());
/// assert!(raw_millis(2 * ROLLOVER_OFFSET_MS).is_err());
/// ```
pub const fn raw_millis(millis: u64) -> Result<u64, Error> {
    if millis >= ROLLOVER_OFFSET_MS && millis - ROLLOVER_OFFSET_MS < ROLLOVER_OFFSET_MS {
        Ok(millis - ROLLOVER_OFFSET_MS)
    } else {
        Err(Error::TimestampOutOfRange)
    }
}

/// Interprets milliseconds since the Unix epoch as a UTC date and time.
///
/// # Errors
///
/// Returns [`Error::DateOutOfRange`] if the value is beyond the calendar range of [`chrono`].
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::epoch::to_datetime;
///
/// let datetime = to_datetime(&BigUint::from(1_099_511_627_776_u64)).unwrap();
///
/// assert_eq!(datetime.timestamp_millis(), 1_099_511_627_776);
/// assert_eq!(datetime.to_string(), "2004-11-03 19:53:47.776 UTC");
///
/// assert!(to_datetime(&(BigUint::from(1_u32) << 64)).is_err());
/// ```
pub fn to_datetime(millis: &BigUint) -> Result<DateTime<Utc>, Error> {
    millis
        .to_i64()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or(Error::DateOutOfRange)
}

/// Formats milliseconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS.mmm` (UTC).
///
/// Years past 9999 are written with all their digits and no sign.
///
/// # Errors
///
/// Returns [`Error::DateOutOfRange`] if the value is beyond the calendar range of [`chrono`].
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use sguid::epoch;
///
/// let millis = BigUint::from(1_709_164_800_123_u64);
///
/// assert_eq!(epoch::format(&millis).unwrap(), "2024-02-29 00:00:00.123");
/// ```
pub fn format(millis: &BigUint) -> Result<String, Error> {
    to_datetime(millis).map(format_datetime)
}

fn format_datetime(datetime: DateTime<Utc>) -> String {
    format!(
        "{:04}-{}.{:03}",
        datetime.year(),
        datetime.format(DATETIME_FORMAT),
        datetime.timestamp_subsec_millis()
    )
}
