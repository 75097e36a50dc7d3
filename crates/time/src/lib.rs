//! # cycles-time
//!
//! Time representations used by the cycle predictor: calendar timestamps,
//! Modified Julian Date and Julian Date.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["calendar string"] -->|"Mjd::from_calendar()"| B["Mjd"]
//!     B -->|".to_calendar()"| A
//!     B -->|".to_jd()"| C["JD"]
//!     C -->|"Mjd::from_jd()"| B
//!     D["(year, month)"] -->|"month_bounds()"| E["[M0, M1)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cycles_time::{Mjd, month_bounds};
//!
//! let t = Mjd::from_calendar("2024-09-01T00:00:00.000").unwrap();
//! assert_eq!(t.value(), 60554.0);
//! assert_eq!(t.to_jd(), 2460554.5);
//! assert_eq!(t.to_calendar().unwrap(), "2024-09-01T00:00:00.000");
//!
//! let (start, end) = month_bounds(2024, 9).unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `mjd` | `Mjd` newtype, calendar and JD conversions |
//! | `month` | Calendar-month boundaries in MJD |
//! | `error` | Error types |

mod error;
mod mjd;
mod month;

pub use error::TimeError;
pub use mjd::{JD_MJD_OFFSET, Mjd, SECONDS_PER_DAY, jd_to_mjd, mjd_to_jd};
pub use month::{first_of_month, month_bounds};
