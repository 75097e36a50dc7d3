//! Error types for the cycles-dispersion crate.

/// Error type for all fallible operations in the cycles-dispersion crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispersionError {
    /// Returned when the observing frequency is not a finite positive number.
    #[error("invalid frequency: {frequency_ghz} GHz (must be finite and > 0)")]
    InvalidFrequency {
        /// The frequency that was provided, in GHz.
        frequency_ghz: f64,
    },

    /// Returned when the dispersion measure is not finite.
    #[error("invalid dispersion measure: {dm} (must be finite)")]
    InvalidDm {
        /// The dispersion measure that was provided, in pc cm^-3.
        dm: f64,
    },
}
