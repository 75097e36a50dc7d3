//! Fixed periodic model: reference peak, period and window width.

use cycles_time::Mjd;
use tracing::warn;

use crate::error::EphemerisError;

/// Reported MJD of the first activity cycle of FRB 20180916B (CHIME/FRB).
pub const R3_FIRST_CYCLE_MJD: f64 = 58_369.40;

/// Reported activity period of FRB 20180916B, in days.
pub const R3_PERIOD_DAYS: f64 = 16.33;

/// Width of the activity window centred on each peak, in days.
pub const R3_WINDOW_DAYS: f64 = 5.2;

/// Immutable cycle model `(phi_0, P, DeltaT)`.
///
/// `phi_0` is the peak of cycle 1. [`Ephemeris::new`] derives it from a
/// reported first-cycle epoch by adding half a period; use
/// [`Ephemeris::from_peak_epoch`] when the peak is already known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    phi_0: Mjd,
    period: f64,
    window: f64,
}

impl Ephemeris {
    /// Builds an ephemeris from a reported first-cycle epoch.
    ///
    /// The peak of cycle 1 is placed at `first_cycle + period / 2`.
    ///
    /// # Errors
    ///
    /// See [`Ephemeris::from_peak_epoch`].
    pub fn new(first_cycle: Mjd, period: f64, window: f64) -> Result<Self, EphemerisError> {
        validate_period(period)?;
        Self::from_peak_epoch(first_cycle + period / 2.0, period, window)
    }

    /// Builds an ephemeris whose cycle-1 peak is exactly `phi_0`.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::InvalidEpoch`] if `phi_0` is not finite,
    /// [`EphemerisError::InvalidPeriod`] if `period` is not finite and
    /// positive, or [`EphemerisError::InvalidWindow`] if `window` is negative
    /// or not finite.
    pub fn from_peak_epoch(phi_0: Mjd, period: f64, window: f64) -> Result<Self, EphemerisError> {
        if !phi_0.value().is_finite() {
            return Err(EphemerisError::InvalidEpoch {
                value: phi_0.value(),
            });
        }
        validate_period(period)?;
        if !window.is_finite() || window < 0.0 {
            return Err(EphemerisError::InvalidWindow { window });
        }
        if window >= period {
            warn!(period, window, "window is at least one period wide; consecutive cycles overlap");
        }
        Ok(Self {
            phi_0,
            period,
            window,
        })
    }

    /// The FRB 20180916B ("R3") model: first cycle MJD 58369.40, P = 16.33 d,
    /// DeltaT = 5.2 d, so `phi_0 = 58377.565`.
    pub fn r3() -> Self {
        Self::new(Mjd::new(R3_FIRST_CYCLE_MJD), R3_PERIOD_DAYS, R3_WINDOW_DAYS)
            .expect("R3 ephemeris constants are valid")
    }

    /// Peak of cycle 1.
    pub fn phi_0(&self) -> Mjd {
        self.phi_0
    }

    /// Period in days.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Full window width in days.
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Half the window width in days.
    pub fn half_window(&self) -> f64 {
        self.window / 2.0
    }
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::r3()
    }
}

fn validate_period(period: f64) -> Result<(), EphemerisError> {
    if !period.is_finite() || period <= 0.0 {
        return Err(EphemerisError::InvalidPeriod { period });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r3_peak_is_shifted_by_half_period() {
        let eph = Ephemeris::r3();
        assert_eq!(eph.phi_0().value(), 58_369.40 + 16.33 / 2.0);
        assert_eq!(eph.phi_0().value(), 58_377.565);
        assert_eq!(eph.period(), 16.33);
        assert_eq!(eph.window(), 5.2);
        assert_eq!(eph.half_window(), 2.6);
    }

    #[test]
    fn default_is_r3() {
        assert_eq!(Ephemeris::default(), Ephemeris::r3());
    }

    #[test]
    fn from_peak_epoch_does_not_shift() {
        let eph = Ephemeris::from_peak_epoch(Mjd::new(60_000.0), 10.0, 2.0).unwrap();
        assert_eq!(eph.phi_0().value(), 60_000.0);
    }

    #[test]
    fn zero_window_allowed() {
        let eph = Ephemeris::new(Mjd::new(60_000.0), 10.0, 0.0).unwrap();
        assert_eq!(eph.half_window(), 0.0);
    }

    #[test]
    fn overlapping_window_allowed() {
        assert!(Ephemeris::new(Mjd::new(60_000.0), 1.0, 3.0).is_ok());
    }

    #[test]
    fn invalid_period() {
        for p in [0.0, -16.33, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Ephemeris::new(Mjd::new(58_369.4), p, 5.2),
                Err(EphemerisError::InvalidPeriod { .. })
            ));
        }
    }

    #[test]
    fn invalid_window() {
        for w in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Ephemeris::new(Mjd::new(58_369.4), 16.33, w),
                Err(EphemerisError::InvalidWindow { .. })
            ));
        }
    }

    #[test]
    fn invalid_epoch() {
        assert!(matches!(
            Ephemeris::new(Mjd::new(f64::NAN), 16.33, 5.2),
            Err(EphemerisError::InvalidEpoch { .. })
        ));
    }

    #[test]
    fn ephemeris_is_copy_send_sync() {
        fn assert_impl<T: Copy + Send + Sync>() {}
        assert_impl::<Ephemeris>();
    }
}
