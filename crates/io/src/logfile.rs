//! Dated cycle log files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use cycles_ephemeris::CycleWindow;
use tracing::{debug, info};

use crate::error::IoError;
use crate::render::{LOG_HEADER, log_row};

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "S1cycles";

/// File name for a log written at `timestamp`: `S1_YYYYMMDD_HHMMSS.dat`.
pub fn log_file_name(timestamp: NaiveDateTime) -> String {
    format!("S1_{}.dat", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Writes `windows` to `dir/S1_<timestamp>.dat` and returns the file path.
///
/// The directory is created if missing. The file holds [`LOG_HEADER`]
/// followed by one row per window; an empty slice produces a header-only
/// file. An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns [`IoError::Time`] if a window cannot be rendered (checked before
/// anything touches the disk) and [`IoError::Io`] if the directory or file
/// cannot be written.
pub fn write_cycle_log(
    dir: &Path,
    windows: &[CycleWindow],
    timestamp: NaiveDateTime,
) -> Result<PathBuf, IoError> {
    let rows = windows
        .iter()
        .map(log_row)
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(dir).map_err(|e| IoError::at(dir, e))?;
    let path = dir.join(log_file_name(timestamp));

    let file = File::create(&path).map_err(|e| IoError::at(&path, e))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{LOG_HEADER}").map_err(|e| IoError::at(&path, e))?;
    for row in &rows {
        writeln!(out, "{row}").map_err(|e| IoError::at(&path, e))?;
    }
    out.flush().map_err(|e| IoError::at(&path, e))?;

    debug!(path = %path.display(), n_rows = rows.len(), "cycle log written");
    Ok(path)
}

/// Optional sink for query results.
///
/// When disabled, [`CycleLogger::log`] is a no-op.
#[derive(Debug, Clone)]
pub struct CycleLogger {
    dir: PathBuf,
    enabled: bool,
}

impl Default for CycleLogger {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_LOG_DIR),
            enabled: false,
        }
    }
}

impl CycleLogger {
    /// Sets the output directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Turns logging on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether results are written.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes `windows` to a new log stamped with the current local time.
    ///
    /// Returns the path written, or `None` when logging is disabled.
    ///
    /// # Errors
    ///
    /// Same as [`write_cycle_log`].
    pub fn log(&self, windows: &[CycleWindow]) -> Result<Option<PathBuf>, IoError> {
        self.log_at(windows, Local::now().naive_local())
    }

    /// Same as [`CycleLogger::log`] with an explicit timestamp.
    pub fn log_at(
        &self,
        windows: &[CycleWindow],
        timestamp: NaiveDateTime,
    ) -> Result<Option<PathBuf>, IoError> {
        if !self.enabled {
            return Ok(None);
        }
        let path = write_cycle_log(&self.dir, windows, timestamp)?;
        info!(path = %path.display(), "log saved");
        Ok(Some(path))
    }
}
