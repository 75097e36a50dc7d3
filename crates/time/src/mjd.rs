//! Modified Julian Date newtype and calendar conversions.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimeError;

/// Offset between Julian Date and Modified Julian Date: `JD = MJD + 2400000.5`.
pub const JD_MJD_OFFSET: f64 = 2_400_000.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Largest millisecond offset accepted before the cast to `i64`.
///
/// Comfortably above chrono's own calendar limit, so out-of-range values are
/// still rejected by `checked_add_signed` rather than by a saturating cast.
const MAX_MILLIS: f64 = 9.0e15;

/// Calendar layouts accepted by [`Mjd::from_calendar`], tried in order.
///
/// `%.f` accepts an optional fractional second of any length.
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Rendering layout used by [`Mjd::to_calendar`]: millisecond precision.
const RENDER_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// A point in time expressed as a Modified Julian Date (days since
/// 1858-11-17T00:00:00).
///
/// Calendar strings are naive wall-clock times; no timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Mjd(f64);

/// 1858-11-17T00:00:00, MJD 0.
fn mjd_origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1858, 11, 17)
        .expect("MJD origin is a valid calendar date")
        .and_time(NaiveTime::MIN)
}

impl Mjd {
    /// Wraps a raw MJD value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw MJD value in days.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts a Julian Date to MJD.
    pub fn from_jd(jd: f64) -> Self {
        Self(jd - JD_MJD_OFFSET)
    }

    /// Returns this instant as a Julian Date.
    pub fn to_jd(self) -> f64 {
        self.0 + JD_MJD_OFFSET
    }

    /// Converts a naive calendar date-time to MJD.
    ///
    /// Whole days and the sub-day remainder are converted separately so the
    /// fractional part keeps nanosecond resolution.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let delta = dt - mjd_origin();
        let whole_days = delta.num_days();
        let remainder = delta - TimeDelta::days(whole_days);
        let nanos = remainder.num_nanoseconds().unwrap_or_default();
        Self(whole_days as f64 + nanos as f64 / NANOS_PER_DAY)
    }

    /// Converts a calendar date (at midnight) to MJD.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_datetime(date.and_time(NaiveTime::MIN))
    }

    /// Parses an ISO-8601-style timestamp into MJD.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM:SS[.fff...]`, the same with a space instead
    /// of `T`, or a bare `YYYY-MM-DD` (midnight). Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Parse`] if the string matches none of the layouts.
    pub fn from_calendar(input: &str) -> Result<Self, TimeError> {
        let trimmed = input.trim();
        let mut last_err = None;
        for layout in DATETIME_LAYOUTS {
            match NaiveDateTime::parse_from_str(trimmed, layout) {
                Ok(dt) => return Ok(Self::from_datetime(dt)),
                Err(e) => last_err = Some(e),
            }
        }
        match NaiveDate::parse_from_str(trimmed, DATE_LAYOUT) {
            Ok(date) => Ok(Self::from_date(date)),
            Err(e) => Err(TimeError::Parse {
                input: input.to_string(),
                reason: last_err.unwrap_or(e).to_string(),
            }),
        }
    }

    /// Converts this MJD to a naive calendar date-time, rounded to the
    /// nearest millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the value is not finite or lies
    /// outside the calendar range supported by chrono.
    pub fn to_datetime(self) -> Result<NaiveDateTime, TimeError> {
        let out_of_range = TimeError::OutOfRange { value: self.0 };
        let millis = (self.0 * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() > MAX_MILLIS {
            return Err(out_of_range);
        }
        TimeDelta::try_milliseconds(millis as i64)
            .and_then(|delta| mjd_origin().checked_add_signed(delta))
            .ok_or(out_of_range)
    }

    /// Renders this MJD as `YYYY-MM-DDTHH:MM:SS.sss`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] under the same conditions as
    /// [`Mjd::to_datetime`].
    pub fn to_calendar(self) -> Result<String, TimeError> {
        Ok(self.to_datetime()?.format(RENDER_LAYOUT).to_string())
    }

    /// The current local wall-clock time as MJD.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }
}

/// Converts a Julian Date to a raw MJD value.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - JD_MJD_OFFSET
}

/// Converts a raw MJD value to a Julian Date.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + JD_MJD_OFFSET
}

impl From<f64> for Mjd {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Mjd> for f64 {
    fn from(mjd: Mjd) -> Self {
        mjd.0
    }
}

/// Offset by a number of days.
impl Add<f64> for Mjd {
    type Output = Mjd;

    fn add(self, days: f64) -> Mjd {
        Mjd(self.0 + days)
    }
}

impl Sub<f64> for Mjd {
    type Output = Mjd;

    fn sub(self, days: f64) -> Mjd {
        Mjd(self.0 - days)
    }
}

/// Signed separation in days.
impl Sub<Mjd> for Mjd {
    type Output = f64;

    fn sub(self, other: Mjd) -> f64 {
        self.0 - other.0
    }
}

impl FromStr for Mjd {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_calendar(s)
    }
}

/// Calendar rendering, falling back to the raw day count when the value has
/// no calendar representation.
impl fmt::Display for Mjd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_calendar() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "MJD {}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn origin_is_zero() {
        let mjd = Mjd::from_calendar("1858-11-17T00:00:00").unwrap();
        assert_eq!(mjd.value(), 0.0);
    }

    #[test]
    fn j2000_noon() {
        // JD 2451545.0 = 2000-01-01T12:00:00
        let mjd = Mjd::from_calendar("2000-01-01T12:00:00.000").unwrap();
        assert_eq!(mjd.value(), 51_544.5);
        assert_eq!(mjd.to_jd(), 2_451_545.0);
    }

    #[test]
    fn unix_epoch() {
        let mjd = Mjd::from_calendar("1970-01-01T00:00:00").unwrap();
        assert_eq!(mjd.value(), 40_587.0);
    }

    #[test]
    fn before_origin_is_negative() {
        let mjd = Mjd::from_calendar("1858-11-16T18:00:00").unwrap();
        assert_abs_diff_eq!(mjd.value(), -0.25, epsilon = 1e-12);
        assert_eq!(mjd.to_calendar().unwrap(), "1858-11-16T18:00:00.000");
    }

    #[test]
    fn fractional_seconds_any_length() {
        let a = Mjd::from_calendar("2024-09-01T06:00:00.5").unwrap();
        let b = Mjd::from_calendar("2024-09-01T06:00:00.500000").unwrap();
        assert_eq!(a, b);
        assert_abs_diff_eq!(a.value().fract(), 0.25 + 0.5 / SECONDS_PER_DAY, epsilon = 1e-10);
    }

    #[test]
    fn space_separator_and_bare_date() {
        let t = Mjd::from_calendar("2024-09-01T00:00:00").unwrap();
        assert_eq!(Mjd::from_calendar("2024-09-01 00:00:00").unwrap(), t);
        assert_eq!(Mjd::from_calendar("2024-09-01").unwrap(), t);
        assert_eq!(Mjd::from_calendar("  2024-09-01  ").unwrap(), t);
    }

    #[test]
    fn malformed_inputs_fail() {
        for bad in ["", "yesterday", "2024-13-01T00:00:00", "2024-02-30", "2024-09-01T25:00:00"] {
            let err = Mjd::from_calendar(bad).unwrap_err();
            assert!(
                matches!(err, TimeError::Parse { .. }),
                "expected Parse error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn render_millisecond_precision() {
        let mjd = Mjd::new(58_377.565);
        assert_eq!(mjd.to_calendar().unwrap(), "2018-09-16T13:33:36.000");
    }

    #[test]
    fn render_rounds_to_nearest_millisecond() {
        let base = Mjd::from_calendar("2024-01-01T00:00:00").unwrap();
        let just_under = base + 0.0004 / SECONDS_PER_DAY;
        assert_eq!(just_under.to_calendar().unwrap(), "2024-01-01T00:00:00.000");
        let just_over = base + 0.0006 / SECONDS_PER_DAY;
        assert_eq!(just_over.to_calendar().unwrap(), "2024-01-01T00:00:00.001");
    }

    #[test]
    fn non_finite_out_of_range() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.0e300] {
            assert!(matches!(
                Mjd::new(v).to_calendar(),
                Err(TimeError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn jd_mjd_offsets() {
        assert_eq!(jd_to_mjd(2_400_000.5), 0.0);
        assert_eq!(mjd_to_jd(0.0), 2_400_000.5);
        assert_abs_diff_eq!(Mjd::from_jd(2_458_369.9).value(), 58_369.4, epsilon = 1e-9);
    }

    #[test]
    fn arithmetic() {
        let a = Mjd::new(100.0);
        assert_eq!((a + 1.5).value(), 101.5);
        assert_eq!((a - 0.5).value(), 99.5);
        assert_eq!(Mjd::new(103.0) - a, 3.0);
        assert!(a < a + 1e-9);
    }

    #[test]
    fn display_and_from_str() {
        let mjd: Mjd = "2018-09-16T13:33:36.000".parse().unwrap();
        assert_abs_diff_eq!(mjd.value(), 58_377.565, epsilon = 1e-9);
        assert_eq!(mjd.to_string(), "2018-09-16T13:33:36.000");
        assert_eq!(Mjd::new(f64::NAN).to_string(), "MJD NaN");
    }
}
