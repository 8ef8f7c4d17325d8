//! Equivalent-therapy-time solver
//!
//! Solves the central question of a schedule switch: how long must each
//! session run under the new weekly schedule to deliver a chosen
//! standardized Kt/V, given what the current regimen delivers today.
//!
//! # Method
//!
//! The current single-pool Kt/V and session time fix an effective urea
//! clearance rate, which is assumed independent of session length. The
//! solver then walks the trial session time in fixed 0.1-minute steps,
//! evaluating the Leypoldt standardized Kt/V closed form at each step,
//! corrected for convective removal (ultrafiltration) and residual renal
//! clearance, until the trial value is within a relative tolerance of the
//! target. The walk is a bounded fixed-point search: both an iteration
//! cap and a session-time ceiling are enforced, and exceeding either is a
//! typed failure rather than a hang.
//!
//! # Result fields
//!
//! | Field | Description |
//! |-------|-------------|
//! | `session_minutes` | Converged per-session time, whole minutes |
//! | `std_ktv` | Standardized Kt/V delivered at that time |
//! | `sp_ktv` | Single-pool Kt/V delivered at that time |
//! | `uf_rate` | Projected ultrafiltration rate, mL/kg/hr |
//! | `uf_advisory` | Longer safe time when `uf_rate` breaches the ceiling |
//!
//! # Usage
//!
//! ```rust
//! use dialysol::prelude::*;
//!
//! let params = ClinicalParameters::new(1.4, 240.0, 2.2, 70.0)
//!     .with_weekly_uf(6.0)
//!     .with_kru(0.5);
//!
//! // How long would twice-weekly sessions need to be?
//! let result = solve(&params, 35.7, Schedule::TwiceWeekly, &SolverOptions::default())?;
//! assert!(result.session_minutes > 240);
//! # Ok::<(), dialysol::SolverError>(())
//! ```

mod error;
mod kinetics;
mod solve;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use error::SolverError;
pub use kinetics::{
    dialyzer_clearance, effective_clearance, equilibrated_ktv, leypoldt_std_ktv, MINUTES_PER_WEEK,
    REBOUND_MINUTES,
};
pub use solve::solve;
pub use traits::{prescribe_datafile, PatientPrescription, Prescribe};
pub use types::{Schedule, SolverOptions, SolverResult, UFAdvisory};
