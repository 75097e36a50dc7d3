use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Activity-cycle predictor for periodic sources.
#[derive(Parser)]
#[command(
    name = "cycles",
    version,
    about = "Predict activity windows of a periodically repeating source"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write results to a dated log file.
    #[arg(long, global = true)]
    pub log: bool,

    /// Override the log directory from config.
    #[arg(long = "log-dir", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the cycle nearest to the current date.
    Nearest,
    /// List the cycles peaking in a given month.
    Month(MonthArgs),
    /// List N cycles starting from cycle 1.
    Range(CountArgs),
    /// List N cycles starting from the cycle nearest to now.
    FromNearest(CountArgs),
    /// Interactive menu.
    Menu,
    /// Correct a burst arrival time for dispersion delay.
    Toa(ToaArgs),
    /// Convert a time between calendar, MJD and JD.
    Time(TimeArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Calendar year (YYYY).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i32,

    /// Month number (1-12).
    #[arg(short, long)]
    pub month: u32,
}

/// Arguments for the `range` and `from-nearest` subcommands.
#[derive(clap::Args)]
pub struct CountArgs {
    /// Number of cycles to list.
    #[arg(short = 'n', long)]
    pub count: usize,
}

/// Arguments for the `toa` subcommand.
#[derive(clap::Args)]
pub struct ToaArgs {
    /// Observation start, as MJD.
    #[arg(long = "mjd-start", allow_negative_numbers = true)]
    pub mjd_start: f64,

    /// Burst offset from the observation start, in seconds.
    #[arg(long, allow_negative_numbers = true)]
    pub seconds: f64,

    /// Dispersion measure (pc cm^-3).
    #[arg(long)]
    pub dm: f64,

    /// Override the reference frequency (MHz) from config.
    #[arg(long = "frequency-mhz")]
    pub frequency_mhz: Option<f64>,
}

/// Input representation for the `time` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimeFormat {
    /// ISO-8601 calendar timestamp.
    Calendar,
    /// Modified Julian Date.
    Mjd,
    /// Julian Date.
    Jd,
}

/// Arguments for the `time` subcommand.
#[derive(clap::Args)]
pub struct TimeArgs {
    /// Value to convert.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// How to interpret the value.
    #[arg(long, value_enum, default_value_t = TimeFormat::Calendar)]
    pub from: TimeFormat,
}
