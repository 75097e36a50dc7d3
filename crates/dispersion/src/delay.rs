//! Cold-plasma dispersion delay and arrival-time correction.

use cycles_time::{Mjd, SECONDS_PER_DAY};
use tracing::debug;

use crate::error::DispersionError;

/// Dispersion constant in s GHz^2 pc^-1 cm^3.
pub const DISPERSION_CONSTANT: f64 = 4.15e3;

/// Reference frequency used by [`toa_corrected`], in MHz.
pub const REFERENCE_FREQUENCY_MHZ: f64 = 415.854456;

/// Observing frequency and dispersion measure of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionParams {
    frequency_ghz: f64,
    dm: f64,
}

impl DispersionParams {
    /// Creates validated dispersion parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DispersionError::InvalidFrequency`] if `frequency_ghz` is not
    /// finite and positive, or [`DispersionError::InvalidDm`] if `dm` is not
    /// finite.
    pub fn new(frequency_ghz: f64, dm: f64) -> Result<Self, DispersionError> {
        validate(frequency_ghz, dm)?;
        Ok(Self { frequency_ghz, dm })
    }

    /// Same as [`DispersionParams::new`] with the frequency given in MHz.
    pub fn from_mhz(frequency_mhz: f64, dm: f64) -> Result<Self, DispersionError> {
        Self::new(frequency_mhz / 1e3, dm)
    }

    /// Parameters at the default reference frequency.
    pub fn at_reference(dm: f64) -> Result<Self, DispersionError> {
        Self::from_mhz(REFERENCE_FREQUENCY_MHZ, dm)
    }

    /// Observing frequency in GHz.
    pub fn frequency_ghz(&self) -> f64 {
        self.frequency_ghz
    }

    /// Dispersion measure in pc cm^-3.
    pub fn dm(&self) -> f64 {
        self.dm
    }

    /// Delay relative to infinite frequency, in days.
    pub fn delay_days(&self) -> f64 {
        DISPERSION_CONSTANT * self.frequency_ghz.powi(-2) * self.dm / SECONDS_PER_DAY
    }
}

fn validate(frequency_ghz: f64, dm: f64) -> Result<(), DispersionError> {
    if !frequency_ghz.is_finite() || frequency_ghz <= 0.0 {
        return Err(DispersionError::InvalidFrequency { frequency_ghz });
    }
    if !dm.is_finite() {
        return Err(DispersionError::InvalidDm { dm });
    }
    Ok(())
}

/// Dispersion delay at `frequency_ghz` for a burst with dispersion measure
/// `dm`, in days.
///
/// `4.15e3 * f^-2 * DM` seconds, divided by 86400.
///
/// # Errors
///
/// Returns [`DispersionError::InvalidFrequency`] for a non-positive or
/// non-finite frequency and [`DispersionError::InvalidDm`] for a non-finite
/// DM.
pub fn dispersion_delay_days(frequency_ghz: f64, dm: f64) -> Result<f64, DispersionError> {
    DispersionParams::new(frequency_ghz, dm).map(|p| p.delay_days())
}

/// Dispersion-corrected time of arrival at infinite frequency.
///
/// `t_seconds` is an offset from `mjd_start`; the absolute delay at
/// [`REFERENCE_FREQUENCY_MHZ`] is subtracted from the resulting instant.
///
/// # Errors
///
/// Returns [`DispersionError::InvalidDm`] if `dm` is not finite.
pub fn toa_corrected(mjd_start: Mjd, t_seconds: f64, dm: f64) -> Result<Mjd, DispersionError> {
    let params = DispersionParams::at_reference(dm)?;
    Ok(toa_corrected_at(&params, mjd_start, t_seconds))
}

/// Same as [`toa_corrected`] with explicit dispersion parameters.
pub fn toa_corrected_at(params: &DispersionParams, mjd_start: Mjd, t_seconds: f64) -> Mjd {
    let delay = params.delay_days().abs();
    debug!(
        frequency_ghz = params.frequency_ghz,
        dm = params.dm,
        delay_days = delay,
        "applying dispersion correction"
    );
    mjd_start + t_seconds / SECONDS_PER_DAY - delay
}
