//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::*;

use cycles_ephemeris::{Ephemeris, R3_FIRST_CYCLE_MJD};
use cycles_io::CycleLogger;
use cycles_time::Mjd;

/// Builds an [`Ephemeris`] from the TOML ephemeris configuration.
///
/// At most one of `first_cycle_mjd` or `peak_mjd` may be set.
pub fn build_ephemeris(eph: &EphemerisToml) -> Result<Ephemeris> {
    let built = match (eph.first_cycle_mjd, eph.peak_mjd) {
        (Some(_), Some(_)) => {
            bail!("ephemeris must have at most one of first_cycle_mjd or peak_mjd, got both")
        }
        (None, Some(peak)) => {
            Ephemeris::from_peak_epoch(Mjd::new(peak), eph.period_days, eph.window_days)
        }
        (first, None) => Ephemeris::new(
            Mjd::new(first.unwrap_or(R3_FIRST_CYCLE_MJD)),
            eph.period_days,
            eph.window_days,
        ),
    };
    built.context("invalid [ephemeris] configuration")
}

/// Builds a [`CycleLogger`] from the TOML log configuration.
///
/// `--log` turns logging on even when the file leaves it off; `--log-dir`
/// replaces the configured directory.
pub fn build_logger(log: &LogToml, force_enable: bool, dir_override: Option<PathBuf>) -> CycleLogger {
    CycleLogger::default()
        .with_dir(dir_override.unwrap_or_else(|| log.dir.clone()))
        .with_enabled(log.enabled || force_enable)
}
