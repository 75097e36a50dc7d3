//! Calendar-month boundaries expressed in MJD.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::TimeError;
use crate::mjd::Mjd;

/// Returns the MJD of `year-month-01T00:00:00`.
///
/// # Errors
///
/// Returns [`TimeError::InvalidMonth`] if `month` is outside 1..=12, or
/// [`TimeError::InvalidYear`] if the year has no calendar representation.
pub fn first_of_month(year: i32, month: u32) -> Result<Mjd, TimeError> {
    first_day(year, month).map(Mjd::from_date)
}

/// Returns the half-open MJD interval `[start, end)` covering one calendar
/// month.
///
/// `end` is the first day of the following month, found by moving to day 28,
/// adding four days and truncating back to day 1. That always lands in the
/// next month regardless of month length, and rolls December into January of
/// the next year.
///
/// # Errors
///
/// Same as [`first_of_month`]; also [`TimeError::InvalidYear`] when the
/// following month falls past the end of the calendar range.
///
/// # Examples
///
/// ```ignore
/// let (start, end) = month_bounds(2024, 2).unwrap();
/// assert_eq!(end - start, 29.0); // leap February
/// ```
pub fn month_bounds(year: i32, month: u32) -> Result<(Mjd, Mjd), TimeError> {
    let first = first_day(year, month)?;
    let next = first
        .with_day(28)
        .and_then(|d| d.checked_add_days(Days::new(4)))
        .and_then(|d| d.with_day(1))
        .ok_or(TimeError::InvalidYear { year })?;
    Ok((Mjd::from_date(first), Mjd::from_date(next)))
}

fn first_day(year: i32, month: u32) -> Result<NaiveDate, TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(TimeError::InvalidYear { year })
}
