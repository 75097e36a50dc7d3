//! Text rendering of cycle windows.

use cycles_ephemeris::CycleWindow;

use crate::error::IoError;

/// Header line of a cycle log file.
pub const LOG_HEADER: &str = "Cycle_Number Start_Date Peak_Date End_Date";

/// Renders a window as the console block
///
/// ```text
/// CYCLE <n>
/// Start: <calendar>
/// Peak: <calendar>
/// End: <calendar>
/// ```
///
/// # Errors
///
/// Returns [`IoError::Time`] if any of the three instants has no calendar
/// representation.
pub fn render_window(window: &CycleWindow) -> Result<String, IoError> {
    Ok(format!(
        "CYCLE {}\nStart: {}\nPeak: {}\nEnd: {}\n",
        window.index(),
        window.start().to_calendar()?,
        window.peak().to_calendar()?,
        window.end().to_calendar()?,
    ))
}

/// Renders a window as one space-separated log row (no trailing newline).
///
/// # Errors
///
/// Same as [`render_window`].
pub fn log_row(window: &CycleWindow) -> Result<String, IoError> {
    Ok(format!(
        "{} {} {} {}",
        window.index(),
        window.start().to_calendar()?,
        window.peak().to_calendar()?,
        window.end().to_calendar()?,
    ))
}
