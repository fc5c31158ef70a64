use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDate, JD_UNIX_EPOCH, MILLIS_PER_DAY};
use crate::perihelion_errors::PerihelionError;

/// Transformation from an instant in milliseconds since the Unix epoch to a Julian Date.
///
/// Argument
/// --------
/// * `millis`: milliseconds elapsed since 1970-01-01T00:00:00 UTC (may be negative)
///
/// Return
/// ------
/// * the same instant expressed as a Julian Date
pub fn julian_date(millis: i64) -> JulianDate {
    millis as f64 / MILLIS_PER_DAY + JD_UNIX_EPOCH
}

/// Transformation from a Julian Date to milliseconds since the Unix epoch.
///
/// Exact inverse of [`julian_date`] up to millisecond rounding.
///
/// Argument
/// --------
/// * `jd`: a Julian Date
///
/// Return
/// ------
/// * the same instant in milliseconds since the Unix epoch
pub fn julian_date_to_millis(jd: JulianDate) -> i64 {
    ((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round() as i64
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss to milliseconds
/// since the Unix epoch.
///
/// Convenience for callers holding calendar dates; the propagation entry points
/// themselves only ever see millisecond instants.
///
/// Argument
/// --------
/// * `date`: a date in the format YYYY-MM-ddTHH:mm:ss (UTC)
///
/// Return
/// ------
/// * the corresponding instant in milliseconds since the Unix epoch
pub fn date_to_millis(date: &str) -> Result<i64, PerihelionError> {
    let epoch = Epoch::from_str(date)
        .map_err(|e| PerihelionError::InvalidDateFormat(format!("{date}: {e}")))?;
    Ok(epoch.to_unix_milliseconds().round() as i64)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::constants::T2000;

    #[test]
    fn test_julian_date_unix_epoch() {
        assert_eq!(julian_date(0), JD_UNIX_EPOCH);
    }

    #[test]
    fn test_julian_date_one_day() {
        assert_eq!(julian_date(86_400_000), JD_UNIX_EPOCH + 1.0);
        assert_eq!(julian_date(-86_400_000), JD_UNIX_EPOCH - 1.0);
    }

    #[test]
    fn test_julian_date_j2000() {
        // J2000 is 10957.5 days after the Unix epoch
        let millis = 946_728_000_000;
        assert_eq!(julian_date(millis), T2000);
        assert_eq!(julian_date_to_millis(T2000), millis);
    }

    #[test]
    fn test_julian_date_round_trip() {
        for millis in [0_i64, 1, -1, 123_456_789_012, -4_000_000_000] {
            assert_eq!(julian_date_to_millis(julian_date(millis)), millis);
        }
    }

    #[test]
    fn test_date_to_millis() {
        let millis = date_to_millis("2000-01-01T12:00:00").unwrap();
        assert_eq!(millis, 946_728_000_000);

        let millis = date_to_millis("1970-01-01T00:00:00").unwrap();
        assert_eq!(millis, 0);
    }

    #[test]
    fn test_date_to_millis_rejects_garbage() {
        let res = date_to_millis("not-a-date");
        assert!(matches!(res, Err(PerihelionError::InvalidDateFormat(_))));
    }
}
