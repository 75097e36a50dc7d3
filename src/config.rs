use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use cycles_dispersion::REFERENCE_FREQUENCY_MHZ;
use cycles_ephemeris::{R3_PERIOD_DAYS, R3_WINDOW_DAYS};
use cycles_io::DEFAULT_LOG_DIR;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CyclesConfig {
    /// Cycle model.
    #[serde(default)]
    pub ephemeris: EphemerisToml,

    /// Dispersion correction settings.
    #[serde(default)]
    pub dispersion: DispersionToml,

    /// Result log settings.
    #[serde(default)]
    pub log: LogToml,
}

/// Cycle model. Set at most one of `first_cycle_mjd` or `peak_mjd`; with
/// neither, the FRB 20180916B first-cycle epoch is used.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EphemerisToml {
    /// Reported epoch of the first cycle; its peak is half a period later.
    #[serde(default)]
    pub first_cycle_mjd: Option<f64>,
    /// Peak of cycle 1, used as-is.
    #[serde(default)]
    pub peak_mjd: Option<f64>,
    /// Cycle period in days.
    #[serde(default = "default_period_days")]
    pub period_days: f64,
    /// Full width of the activity window in days.
    #[serde(default = "default_window_days")]
    pub window_days: f64,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self {
            first_cycle_mjd: None,
            peak_mjd: None,
            period_days: default_period_days(),
            window_days: default_window_days(),
        }
    }
}

fn default_period_days() -> f64 {
    R3_PERIOD_DAYS
}
fn default_window_days() -> f64 {
    R3_WINDOW_DAYS
}

/// Dispersion correction settings for the `toa` command.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispersionToml {
    /// Observing frequency used when `--frequency-mhz` is not given.
    #[serde(default = "default_reference_frequency_mhz")]
    pub reference_frequency_mhz: f64,
}

impl Default for DispersionToml {
    fn default() -> Self {
        Self {
            reference_frequency_mhz: default_reference_frequency_mhz(),
        }
    }
}

fn default_reference_frequency_mhz() -> f64 {
    REFERENCE_FREQUENCY_MHZ
}

/// `.dat` result log settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogToml {
    /// Write a log file for every query; `--log` forces this on.
    #[serde(default)]
    pub enabled: bool,
    /// Directory for log files, created on first write.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

impl Default for LogToml {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Loads the configuration file, or the built-in defaults when no path is
/// given.
pub fn load(path: Option<&Path>) -> Result<CyclesConfig> {
    let Some(path) = path else {
        return Ok(CyclesConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
