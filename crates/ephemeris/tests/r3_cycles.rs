//! Integration tests against the FRB 20180916B model
//! (`phi_0 = 58377.565`, `P = 16.33`, `DeltaT = 5.2`).

use approx::assert_abs_diff_eq;
use cycles_ephemeris::{CycleWindow, Ephemeris};
use cycles_time::{Mjd, month_bounds};

const EPS: f64 = 1e-9;

fn assert_symmetric(w: &CycleWindow, eph: &Ephemeris) {
    assert_abs_diff_eq!(w.peak() - w.start(), eph.window() / 2.0, epsilon = EPS);
    assert_abs_diff_eq!(w.end() - w.peak(), eph.window() / 2.0, epsilon = EPS);
}

#[test]
fn first_cycle() {
    let eph = Ephemeris::r3();
    let windows: Vec<_> = eph.range(1).collect();
    assert_eq!(windows.len(), 1);
    let w = windows[0];
    assert_eq!(w.index(), 1);
    assert_abs_diff_eq!(w.peak().value(), 58_377.565, epsilon = EPS);
    assert_abs_diff_eq!(w.start().value(), 58_374.965, epsilon = EPS);
    assert_abs_diff_eq!(w.end().value(), 58_380.165, epsilon = EPS);
    assert_eq!(w.peak().to_calendar().unwrap(), "2018-09-16T13:33:36.000");
    assert_eq!(w.start().to_calendar().unwrap(), "2018-09-13T23:09:36.000");
    assert_eq!(w.end().to_calendar().unwrap(), "2018-09-19T03:57:36.000");
}

#[test]
fn third_cycle_peak() {
    let eph = Ephemeris::r3();
    let w = eph.range(3).nth(2).unwrap();
    assert_eq!(w.index(), 3);
    assert_abs_diff_eq!(w.peak().value(), 58_410.225, epsilon = EPS);
}

#[test]
fn consecutive_peaks_are_one_period_apart() {
    let eph = Ephemeris::r3();
    for i in [0usize, 1, 7, 100, 999] {
        let windows: Vec<_> = eph.range(i + 2).collect();
        assert_abs_diff_eq!(
            windows[i + 1].peak() - windows[i].peak(),
            eph.period(),
            epsilon = 1e-8
        );
    }
}

#[test]
fn every_window_is_symmetric() {
    let eph = Ephemeris::r3();
    for w in eph.range(500) {
        assert_symmetric(&w, &eph);
    }
    for w in eph.cycles_in_month(2025, 3).unwrap() {
        assert_symmetric(&w, &eph);
    }
    assert_symmetric(&eph.nearest_to(Mjd::new(61_000.123)), &eph);
}

#[test]
fn september_2024() {
    let eph = Ephemeris::r3();
    let windows = eph.cycles_in_month(2024, 9).unwrap();
    let (m0, m1) = month_bounds(2024, 9).unwrap();

    let indices: Vec<u64> = windows.iter().map(|w| w.index()).collect();
    assert_eq!(indices, vec![135, 136]);
    for w in &windows {
        assert!(m0 <= w.peak() && w.peak() < m1);
    }
    assert_eq!(windows[0].peak().to_calendar().unwrap(), "2024-09-12T18:50:24.000");
    assert_eq!(windows[1].peak().to_calendar().unwrap(), "2024-09-29T02:45:36.000");
}

#[test]
fn month_membership_is_complete() {
    let eph = Ephemeris::r3();
    let mut seen = Vec::new();
    for year in 2019..=2026 {
        for month in 1..=12 {
            let (m0, m1) = month_bounds(year, month).unwrap();
            let windows = eph.cycles_in_month(year, month).unwrap();
            for pair in windows.windows(2) {
                assert!(pair[0].peak() < pair[1].peak());
            }
            for w in &windows {
                assert!(m0 <= w.peak() && w.peak() < m1);
            }
            seen.extend(windows.iter().map(|w| w.index()));
        }
    }
    // Every cycle peaking between 2019-01-01 and 2027-01-01 shows up exactly once.
    let (lo, _) = month_bounds(2019, 1).unwrap();
    let (hi, _) = month_bounds(2027, 1).unwrap();
    let expected: Vec<u64> = (0..1_000u64)
        .filter(|&n| {
            let p = eph.peak_of(n);
            p >= lo && p < hi
        })
        .map(|n| n + 1)
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn nearest_is_within_half_period() {
    let eph = Ephemeris::r3();
    let mut t = 55_000.0;
    while t < 65_000.0 {
        let now = Mjd::new(t);
        let w = eph.nearest_to(now);
        assert!((now - w.peak()).abs() <= eph.period() / 2.0 + 1e-9, "t = {t}");
        assert_eq!(w.index(), 1);
        t += 3.217;
    }
}

#[test]
fn nearest_exactly_on_a_peak() {
    let eph = Ephemeris::r3();
    let now = eph.phi_0() + 10.0 * eph.period();
    let w = eph.nearest_to(now);
    assert_eq!(w.peak(), now);
    assert_eq!(w.index(), 1);
    assert_eq!(eph.nearest_cycle_number(now), 11);
}

#[test]
fn queries_are_idempotent() {
    let eph = Ephemeris::r3();
    let a: Vec<_> = eph.range(20).collect();
    let b: Vec<_> = eph.range(20).collect();
    assert_eq!(a, b);
    assert_eq!(
        eph.cycles_in_month(2025, 7).unwrap(),
        eph.cycles_in_month(2025, 7).unwrap()
    );
    let now = Mjd::new(60_700.5);
    assert_eq!(eph.nearest_to(now), eph.nearest_to(now));
}

#[test]
fn custom_ephemeris_substitutes_cleanly() {
    let eph = Ephemeris::new(Mjd::new(60_000.0), 4.0, 1.0).unwrap();
    assert_eq!(eph.phi_0().value(), 60_002.0);
    let w: Vec<_> = eph.range(2).collect();
    assert_eq!(w[1].peak().value(), 60_006.0);
}
