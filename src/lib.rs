//! Urea kinetic modeling for hemodialysis prescription equivalence
//!
//! `dialysol` computes equivalent dialysis prescriptions for patients moving
//! between thrice-weekly and twice-weekly hemodialysis. Given a patient's
//! current regimen and a target standardized Kt/V, it solves for the
//! per-session treatment time that reproduces the target under the new
//! weekly schedule, using the Leypoldt standardized Kt/V equivalence.
//!
//! # Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`patient`] | Patient anthropometrics, urea distribution volume (Watson), clinical parameters, cohort datafiles |
//! | [`solver`] | The bounded equivalent-therapy-time search, kinetics primitives, batch solving |
//! | [`error`] | Crate-level error type |
//!
//! # Usage
//!
//! ```rust
//! use dialysol::prelude::*;
//!
//! let profile = PatientProfile::Anthropometric {
//!     age_years: 50.0,
//!     height_cm: 170.0,
//!     weight_kg: 70.0,
//!     sex: Sex::Male,
//! };
//! let volume = profile.urea_volume().expect("complete anthropometrics");
//!
//! let params = ClinicalParameters::new(1.4, 240.0, 2.5, 70.0).with_weekly_uf(6.0);
//! let result = solve(&params, volume, Schedule::ThriceWeekly, &SolverOptions::default())?;
//!
//! assert!(result.session_minutes > 240);
//! # Ok::<(), dialysol::solver::SolverError>(())
//! ```
//!
//! Every solve is a pure function of its inputs: no shared state, no I/O.
//! Recomputing both candidate schedules, or a whole cohort, parallelizes
//! trivially; see [`solver::Prescribe`] and [`patient::Cohort`].

pub mod error;
pub mod patient;
pub mod solver;

pub use error::DialysolError;
pub use patient::{
    read_cohort, read_cohort_from_reader, ClinicalParameters, Cohort, CohortError, Patient,
    PatientProfile, Sex,
};
pub use solver::{
    prescribe_datafile, solve, PatientPrescription, Prescribe, Schedule, SolverError,
    SolverOptions, SolverResult, UFAdvisory,
};

pub mod prelude {
    pub use crate::error::DialysolError;
    pub use crate::patient::{
        read_cohort, read_cohort_from_reader, ClinicalParameters, Cohort, CohortError, Patient,
        PatientProfile, Sex,
    };
    pub use crate::solver::{
        prescribe_datafile, solve, PatientPrescription, Prescribe, Schedule, SolverError,
        SolverOptions, SolverResult, UFAdvisory,
    };
}
