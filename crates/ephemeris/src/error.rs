//! Error types for the cycles-ephemeris crate.

use cycles_time::TimeError;

/// Error type for all fallible operations in the cycles-ephemeris crate.
///
/// Covers invalid ephemeris parameters at construction time and invalid
/// calendar arguments to month queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when the reference epoch is not finite.
    #[error("invalid epoch: MJD {value} (must be finite)")]
    InvalidEpoch {
        /// The epoch that was provided.
        value: f64,
    },

    /// Returned when the period is not finite and strictly positive.
    #[error("invalid period: {period} days (must be finite and > 0)")]
    InvalidPeriod {
        /// The period that was provided, in days.
        period: f64,
    },

    /// Returned when the window width is negative or not finite.
    #[error("invalid window: {window} days (must be finite and >= 0)")]
    InvalidWindow {
        /// The window width that was provided, in days.
        window: f64,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year has no calendar representation.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Wraps any other error originating from the cycles-time crate.
    #[error("time conversion error: {reason}")]
    Time {
        /// Description of the underlying time conversion failure.
        reason: String,
    },
}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidMonth { month } => EphemerisError::InvalidMonth { month },
            TimeError::InvalidYear { year } => EphemerisError::InvalidYear { year },
            other => EphemerisError::Time {
                reason: other.to_string(),
            },
        }
    }
}
