//! Toa command: dispersion-corrected burst arrival time.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use cycles_dispersion::{DispersionParams, toa_corrected_at};
use cycles_time::{Mjd, SECONDS_PER_DAY};

use crate::cli::ToaArgs;
use crate::config::DispersionToml;

/// Prints the corrected arrival time as MJD and calendar string.
pub fn run<W: Write>(args: &ToaArgs, dispersion: &DispersionToml, out: &mut W) -> Result<()> {
    let frequency_mhz = args
        .frequency_mhz
        .unwrap_or(dispersion.reference_frequency_mhz);
    let params = DispersionParams::from_mhz(frequency_mhz, args.dm)
        .context("invalid dispersion parameters")?;

    let toa = toa_corrected_at(&params, Mjd::new(args.mjd_start), args.seconds);
    info!(
        frequency_mhz,
        dm = args.dm,
        delay_days = params.delay_days(),
        "arrival time corrected"
    );

    let delay_days = params.delay_days();
    writeln!(
        out,
        "Delay: {:.9} d ({:.6} s)",
        delay_days,
        delay_days * SECONDS_PER_DAY
    )?;
    writeln!(out, "ToA MJD: {:.9}", toa.value())?;
    writeln!(out, "ToA: {}", toa.to_calendar()?)?;
    Ok(())
}
