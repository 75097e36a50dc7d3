//! Cycle queries shared by the subcommands and the interactive menu.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cycles_ephemeris::{CycleWindow, Ephemeris};
use cycles_io::{CycleLogger, render_window};
use cycles_time::Mjd;

/// One cycle listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// The cycle nearest to now.
    Nearest,
    /// Cycles peaking in a calendar month.
    Month { year: i32, month: u32 },
    /// `count` cycles from cycle 1.
    Range { count: usize },
    /// `count` cycles from the cycle nearest to now.
    FromNearest { count: usize },
}

/// Evaluates `query` against the ephemeris.
pub fn execute(ephemeris: &Ephemeris, query: Query, now: Mjd) -> Result<Vec<CycleWindow>> {
    let windows = match query {
        Query::Nearest => vec![ephemeris.nearest_to(now)],
        Query::Month { year, month } => ephemeris
            .cycles_in_month(year, month)
            .with_context(|| format!("cannot list cycles for {year}-{month:02}"))?,
        Query::Range { count } => ephemeris.range(count).collect(),
        Query::FromNearest { count } => ephemeris.from_nearest(count, now).collect(),
    };
    Ok(windows)
}

/// Prints each window as a console block, then hands the listing to the
/// logger.
pub fn report<W: Write>(
    out: &mut W,
    query: Query,
    windows: &[CycleWindow],
    logger: &CycleLogger,
) -> Result<()> {
    if windows.is_empty() && matches!(query, Query::Month { .. }) {
        writeln!(out, "No cycles found for this month.")?;
    }
    for window in windows {
        writeln!(out, "{}", render_window(window)?)?;
    }
    if let Some(path) = logger.log(windows).context("failed to write cycle log")? {
        writeln!(out, "Log saved to: {}", path.display())?;
    }
    Ok(())
}

/// Runs one query end to end.
pub fn run<W: Write>(
    ephemeris: &Ephemeris,
    logger: &CycleLogger,
    query: Query,
    now: Mjd,
    out: &mut W,
) -> Result<()> {
    let _cmd = info_span!("query", ?query).entered();
    let windows = execute(ephemeris, query, now)?;
    info!(n_windows = windows.len(), "query complete");
    report(out, query, &windows, logger)
}
