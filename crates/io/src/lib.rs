//! # cycles-io
//!
//! Text output for predicted cycle windows: the console block printed for
//! each window and the dated `S1_<YYYYMMDD_HHMMSS>.dat` log files.

mod error;
mod logfile;
mod render;

pub use error::IoError;
pub use logfile::{CycleLogger, DEFAULT_LOG_DIR, log_file_name, write_cycle_log};
pub use render::{LOG_HEADER, log_row, render_window};
