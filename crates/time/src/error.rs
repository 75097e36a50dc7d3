//! Error types for the cycles-time crate.

/// Error type for all fallible operations in the cycles-time crate.
///
/// Covers malformed calendar strings, invalid month numbers, and MJD values
/// that cannot be expressed as a proleptic Gregorian calendar date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a calendar string does not match any accepted layout.
    #[error("cannot parse calendar timestamp {input:?}: {reason}")]
    Parse {
        /// The string that was provided.
        input: String,
        /// Why the last attempted layout rejected it.
        reason: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("invalid year: {year} (outside the supported calendar range)")]
    InvalidYear {
        /// The unrepresentable year.
        year: i32,
    },

    /// Returned when an MJD is non-finite or falls outside the calendar range.
    #[error("MJD {value} cannot be expressed as a calendar date")]
    OutOfRange {
        /// The offending MJD value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_parse() {
        let err = TimeError::Parse {
            input: "2024-13-01".to_string(),
            reason: "input is out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse calendar timestamp \"2024-13-01\": input is out of range"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = TimeError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_year() {
        let err = TimeError::InvalidYear { year: 500_000 };
        assert_eq!(
            err.to_string(),
            "invalid year: 500000 (outside the supported calendar range)"
        );
    }

    #[test]
    fn error_out_of_range() {
        let err = TimeError::OutOfRange { value: f64::INFINITY };
        assert_eq!(err.to_string(), "MJD inf cannot be expressed as a calendar date");
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<TimeError>();
    }

    #[test]
    fn error_is_clone() {
        let err = TimeError::InvalidMonth { month: 0 };
        assert_eq!(err.clone(), err);
    }
}
