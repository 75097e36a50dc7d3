//! # cycles-ephemeris
//!
//! Periodic activity model and the cycle-phase engine built on it.
//!
//! An [`Ephemeris`] fixes where cycles fall: cycle 1 peaks at `phi_0`, every
//! later cycle one period `P` after the previous, and each window spans
//! `DeltaT` days centred on its peak.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Ephemeris (phi_0, P, DeltaT)"] -->|".range(n)"| B["CycleRange"]
//!     A -->|".nearest_to(now)"| C["CycleWindow"]
//!     A -->|".cycles_in_month(y, m)"| D["Vec of CycleWindow"]
//!     B --> C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cycles_ephemeris::Ephemeris;
//! use cycles_time::Mjd;
//!
//! let eph = Ephemeris::r3();
//! let first_three: Vec<_> = eph.range(3).collect();
//! let nearest = eph.nearest_to(Mjd::now());
//! let september = eph.cycles_in_month(2024, 9).unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ephemeris` | Model constants and validation |
//! | `window` | `CycleWindow` value type |
//! | `phase` | Range, nearest and month queries |
//! | `error` | Error types |

mod ephemeris;
mod error;
mod phase;
mod window;

pub use ephemeris::{Ephemeris, R3_FIRST_CYCLE_MJD, R3_PERIOD_DAYS, R3_WINDOW_DAYS};
pub use error::EphemerisError;
pub use phase::CycleRange;
pub use window::CycleWindow;
