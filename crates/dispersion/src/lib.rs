//! # cycles-dispersion
//!
//! Frequency-dependent propagation delay of a broadband pulse through an
//! ionised medium, and correction of observed arrival times to infinite
//! frequency.
//!
//! Independent of the cycle ephemeris: nothing here reads or produces cycle
//! windows.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cycles_dispersion::{dispersion_delay_days, toa_corrected};
//! use cycles_time::Mjd;
//!
//! let delay = dispersion_delay_days(0.415854456, 500.0).unwrap();
//! let toa = toa_corrected(Mjd::new(60000.0), 12.5, 348.77).unwrap();
//! ```

mod delay;
mod error;

pub use delay::{
    DISPERSION_CONSTANT, DispersionParams, REFERENCE_FREQUENCY_MHZ, dispersion_delay_days,
    toa_corrected, toa_corrected_at,
};
pub use error::DispersionError;
