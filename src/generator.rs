use std::time::SystemTime;

use rand::Rng;

use crate::{Error, RANDOM_MASK, Sguid, epoch};

impl Sguid {
    /// Generates a new `Sguid` from the system clock and the thread local random generator.
    ///
    /// No uniqueness or ordering guarantees are made beyond the entropy of the 88 random bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the system clock lies outside the
    /// rollover window (November 2004 to September 2039).
    ///
    /// # Example
    ///
    /// ```
    /// use sguid::Sguid;
    ///
    /// let s = Sguid::generate().unwrap();
    ///
    /// assert!(s.timestamp() > 1704067200000); // 1st January 2024
    /// assert!(s.randomness() < (1 << 88));
    /// ```
    pub fn generate() -> Result<Self, Error> {
        Self::generate_with(&mut rand::thread_rng(), SystemTime::now())
    }

    /// Generates a new `Sguid` from a given time and random generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `now` lies outside the rollover window.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, now: SystemTime) -> Result<Self, Error> {
        let millis = now
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| u64::try_from(elapsed.as_millis()).ok())
            .ok_or(Error::TimestampOutOfRange)?;

        let raw_timestamp = epoch::raw_millis(millis)?;
        let randomness = rng.gen_range(0..=RANDOM_MASK);

        Self::from_parts(raw_timestamp, randomness)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;
    use crate::epoch::ROLLOVER_OFFSET_MS;

    fn at(millis: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(millis)
    }

    #[test]
    fn test_generate_with() {
        let mut rng = StdRng::seed_from_u64(42);

        let s = Sguid::generate_with(&mut rng, at(1_540_775_814_889)).unwrap();
        assert_eq!(s.raw_timestamp(), 441_264_187_113);
        assert_eq!(s.timestamp_string().unwrap(), "2018-10-29 01:16:54.889");

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            Sguid::generate_with(&mut rng1, at(1_700_000_000_000)),
            Sguid::generate_with(&mut rng2, at(1_700_000_000_000))
        );
    }

    #[test]
    fn test_generate_window() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(Sguid::generate_with(&mut rng, at(ROLLOVER_OFFSET_MS)).is_ok());
        assert!(Sguid::generate_with(&mut rng, at(2 * ROLLOVER_OFFSET_MS - 1)).is_ok());

        assert_eq!(
            Sguid::generate_with(&mut rng, at(ROLLOVER_OFFSET_MS - 1)),
            Err(Error::TimestampOutOfRange)
        );
        assert_eq!(
            Sguid::generate_with(&mut rng, at(2 * ROLLOVER_OFFSET_MS)),
            Err(Error::TimestampOutOfRange)
        );
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_generate_round_trip() {
        let s = Sguid::generate().unwrap();
        assert_eq!(s.to_string().parse::<Sguid>(), Ok(s));
        assert!(s.datetime() <= SystemTime::now());
    }
}
