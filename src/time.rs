//! Nanosecond-precision timestamps for GSF records.
//!
//! GSF records carry time as a pair of 32-bit integers: whole seconds since
//! the Unix epoch and nanoseconds within that second. [`GsfTime`] holds the
//! pair in normalized form.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Point in time with nanosecond resolution, relative to 1970-01-01T00:00:00Z.
///
/// `nanosecond` is always in `0..1_000_000_000`; out-of-range inputs to
/// [`epoch_to_time`] are carried into `seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GsfTime {
    pub seconds: i64,
    pub nanosecond: u32,
}

impl GsfTime {
    /// The Unix epoch.
    pub fn epoch() -> Self {
        Self::default()
    }

    /// Fractional seconds since the epoch.
    ///
    /// An `f64` holds 15-16 significant digits, so for present-day epoch
    /// values (~1.4e9 s) only about microsecond precision survives.
    pub fn as_seconds_f64(self) -> f64 {
        self.seconds as f64 + f64::from(self.nanosecond) / NANOS_PER_SEC as f64
    }

    /// Shift by a signed number of milliseconds.
    pub fn offset_millis(self, millis: i64) -> Self {
        let nanos = i64::from(self.nanosecond) + (millis % 1000) * 1_000_000;
        epoch_to_time_i64(self.seconds.saturating_add(millis / 1000), nanos)
    }

    /// Convert to a calendar time, if representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanosecond)
    }
}

impl fmt::Display for GsfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            None => write!(f, "{}.{:09}", self.seconds, self.nanosecond),
        }
    }
}

/// Combine whole seconds and a nanosecond offset into a [`GsfTime`].
pub fn epoch_to_time(seconds: i64, nanoseconds: i32) -> GsfTime {
    epoch_to_time_i64(seconds, i64::from(nanoseconds))
}

fn epoch_to_time_i64(seconds: i64, nanoseconds: i64) -> GsfTime {
    GsfTime {
        seconds: seconds.saturating_add(nanoseconds.div_euclid(NANOS_PER_SEC)),
        nanosecond: nanoseconds.rem_euclid(NANOS_PER_SEC) as u32,
    }
}

/// Fractional seconds since the epoch. See [`GsfTime::as_seconds_f64`].
pub fn time_to_seconds(time: GsfTime) -> f64 {
    time.as_seconds_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let t = epoch_to_time(1, 2);
        assert_eq!(t.seconds, 1);
        assert_eq!(t.nanosecond, 2);
        assert!((time_to_seconds(t) - 1.000000002).abs() < 1e-9);
    }

    #[test]
    fn test_large_epoch_precision() {
        let t = epoch_to_time(1_436_931_405, 987_654_321);
        assert_eq!(t.nanosecond, 987_654_321);
        // f64 cannot carry nanoseconds at this magnitude
        assert!((time_to_seconds(t) - 1436931405.987654321).abs() < 4e-7);
    }

    #[test]
    fn test_out_of_range_nanoseconds_carry() {
        let t = epoch_to_time(10, 1_500_000_000);
        assert_eq!(
            t,
            GsfTime {
                seconds: 11,
                nanosecond: 500_000_000
            }
        );

        let t = epoch_to_time(10, -1);
        assert_eq!(
            t,
            GsfTime {
                seconds: 9,
                nanosecond: 999_999_999
            }
        );
    }

    #[test]
    fn test_negative_seconds() {
        let t = epoch_to_time(-1, 500_000_000);
        assert!((time_to_seconds(t) + 0.5).abs() < 1e-12);
        assert_eq!(t.to_string(), "1969-12-31T23:59:59.500000000Z");
    }

    #[test]
    fn test_offset_millis() {
        let t = epoch_to_time(100, 900_000_000);
        assert_eq!(t.offset_millis(250), epoch_to_time(101, 150_000_000));
        assert_eq!(t.offset_millis(-1_000), epoch_to_time(99, 900_000_000));
        assert_eq!(t.offset_millis(-950), epoch_to_time(99, 950_000_000));
    }

    #[test]
    fn test_display() {
        let t = epoch_to_time(1_436_931_405, 987_654_321);
        assert_eq!(t.to_string(), "2015-07-15T03:36:45.987654321Z");
        assert_eq!(
            GsfTime::epoch().to_string(),
            "1970-01-01T00:00:00.000000000Z"
        );
    }
}
