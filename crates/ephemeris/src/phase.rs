//! Cycle phase queries: consecutive ranges, nearest cycle, cycles in a month.

use std::iter::FusedIterator;

use cycles_time::{Mjd, month_bounds};
use tracing::debug;

use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::window::CycleWindow;

/// Lazy sequence of consecutive cycle windows.
///
/// Produced by [`Ephemeris::range`] and [`Ephemeris::range_from`]. Window `i`
/// (1-based) peaks at `start_phase + (i - 1) * P`. Each call to `range*`
/// returns a fresh iterator; no state is shared between them.
#[derive(Debug, Clone)]
pub struct CycleRange {
    ephemeris: Ephemeris,
    start_phase: Mjd,
    next: usize,
    count: usize,
}

impl Iterator for CycleRange {
    type Item = CycleWindow;

    fn next(&mut self) -> Option<CycleWindow> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let peak = self.start_phase + i as f64 * self.ephemeris.period();
        Some(self.ephemeris.window_at(i as u64 + 1, peak))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CycleRange {}

impl FusedIterator for CycleRange {}

impl Ephemeris {
    /// Builds the window labelled `index` around `peak`.
    pub fn window_at(&self, index: u64, peak: Mjd) -> CycleWindow {
        CycleWindow::around(index, peak, self.half_window())
    }

    /// Peak of the cycle `n` periods after `phi_0` (`n = 0` is cycle 1).
    pub fn peak_of(&self, n: u64) -> Mjd {
        self.phi_0() + n as f64 * self.period()
    }

    /// The first `count` cycles, starting at cycle 1.
    pub fn range(&self, count: usize) -> CycleRange {
        self.range_from(count, self.phi_0())
    }

    /// `count` consecutive windows whose first peak is `start_phase`,
    /// labelled `1..=count`.
    ///
    /// `count = 0` yields an empty sequence.
    pub fn range_from(&self, count: usize, start_phase: Mjd) -> CycleRange {
        CycleRange {
            ephemeris: *self,
            start_phase,
            next: 0,
            count,
        }
    }

    /// Signed number of periods between `phi_0` and the cycle nearest `now`.
    ///
    /// Ties (exactly mid-period) round to the even neighbour.
    fn nearest_offset(&self, now: Mjd) -> f64 {
        ((now - self.phi_0()) / self.period()).round_ties_even()
    }

    /// True 1-based cycle number of the cycle nearest `now`.
    ///
    /// Zero or negative for instants nearer to a cycle before cycle 1.
    pub fn nearest_cycle_number(&self, now: Mjd) -> i64 {
        self.nearest_offset(now) as i64 + 1
    }

    /// The window whose peak is nearest to `now`.
    ///
    /// The returned window is always labelled index 1; call
    /// [`Ephemeris::nearest_cycle_number`] for the true cycle number.
    pub fn nearest_to(&self, now: Mjd) -> CycleWindow {
        let n = self.nearest_offset(now);
        let peak = self.phi_0() + n * self.period();
        debug!(now = now.value(), n, peak = peak.value(), "nearest cycle");
        self.window_at(1, peak)
    }

    /// `count` consecutive windows starting from the cycle nearest `now`.
    pub fn from_nearest(&self, count: usize, now: Mjd) -> CycleRange {
        self.range_from(count, self.nearest_to(now).peak())
    }

    /// All windows whose peak falls within the calendar month, labelled with
    /// their true cycle number and ordered by peak.
    ///
    /// A window belongs to the month iff `M0 <= peak < M1`, where `M0` and
    /// `M1` are the first instants of this month and the next. Only cycles
    /// from cycle 1 onwards are considered.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::InvalidMonth`] if `month` is outside 1..=12
    /// and [`EphemerisError::InvalidYear`] if the year has no calendar
    /// representation.
    pub fn cycles_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<CycleWindow>, EphemerisError> {
        let (m0, m1) = month_bounds(year, month)?;

        // Start one cycle early so rounding in the division cannot skip a peak.
        let first = ((m0 - self.phi_0()) / self.period()).ceil() - 1.0;
        let mut n = first.max(0.0) as u64;

        let mut windows = Vec::new();
        loop {
            let peak = self.peak_of(n);
            if peak >= m1 {
                break;
            }
            if peak >= m0 {
                windows.push(self.window_at(n + 1, peak));
            }
            n += 1;
        }
        debug!(year, month, n_cycles = windows.len(), "cycles in month");
        Ok(windows)
    }
}
