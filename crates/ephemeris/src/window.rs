//! A single predicted activity window.

use cycles_time::Mjd;

/// One predicted cycle: a window `[start, end]` centred on `peak`.
///
/// `index` is the 1-based label attached by the query that produced the
/// window. It is the true cycle number for month queries, the position in the
/// sequence for range queries, and always 1 for the nearest-cycle query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleWindow {
    index: u64,
    start: Mjd,
    peak: Mjd,
    end: Mjd,
}

impl CycleWindow {
    /// Builds a window of half-width `half_window` days around `peak`.
    pub fn around(index: u64, peak: Mjd, half_window: f64) -> Self {
        Self {
            index,
            start: peak - half_window,
            peak,
            end: peak + half_window,
        }
    }

    /// 1-based label of this window.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Opening of the window.
    pub fn start(&self) -> Mjd {
        self.start
    }

    /// Predicted peak.
    pub fn peak(&self) -> Mjd {
        self.peak
    }

    /// Close of the window.
    pub fn end(&self) -> Mjd {
        self.end
    }
}
