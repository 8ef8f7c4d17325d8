//! Extension traits for solving on patient data types
//!
//! The [`Prescribe`] trait adds equivalence solving to [`Patient`] without
//! creating a dependency from `patient` to `solver`. Cohort-level batch
//! solving lives here for the same reason.

use rayon::prelude::*;
use std::path::Path;

use crate::error::DialysolError;
use crate::patient::{read_cohort, Cohort, Patient};
use crate::solver::error::SolverError;
use crate::solver::solve::solve;
use crate::solver::types::{Schedule, SolverOptions, SolverResult};

/// Solver outcome for one patient in a batch
///
/// Errors are carried per patient so one bad record does not abort a
/// cohort run.
#[derive(Debug, Clone)]
pub struct PatientPrescription {
    /// Patient identifier
    pub id: String,
    /// Solver outcome for this patient
    pub result: Result<SolverResult, SolverError>,
}

/// Extension trait for equivalence solving
///
/// # Example
///
/// ```rust
/// use dialysol::prelude::*;
///
/// let patient = Patient::new(
///     "patient_001",
///     PatientProfile::VolumeOverride { liters: 35.0 },
///     ClinicalParameters::new(1.4, 240.0, 2.3, 70.0).with_weekly_uf(6.0),
/// );
///
/// let result = patient.prescribe(Schedule::ThriceWeekly, &SolverOptions::default())?;
/// println!("{} min", result.session_minutes);
/// # Ok::<(), dialysol::SolverError>(())
/// ```
pub trait Prescribe {
    /// Solve for the equivalent session time under one schedule
    fn prescribe(
        &self,
        schedule: Schedule,
        options: &SolverOptions,
    ) -> Result<SolverResult, SolverError>;

    /// Solve both candidate schedules concurrently
    ///
    /// Returns `(twice_weekly, thrice_weekly)`. The two solves share no
    /// state and run on separate rayon tasks.
    fn prescribe_pair(
        &self,
        options: &SolverOptions,
    ) -> (
        Result<SolverResult, SolverError>,
        Result<SolverResult, SolverError>,
    );
}

impl Prescribe for Patient {
    fn prescribe(
        &self,
        schedule: Schedule,
        options: &SolverOptions,
    ) -> Result<SolverResult, SolverError> {
        let volume = self
            .profile()
            .urea_volume()
            .ok_or(SolverError::IncompleteInput {
                field: "urea distribution volume is not computable from this profile",
            })?;
        solve(self.parameters(), volume, schedule, options)
    }

    fn prescribe_pair(
        &self,
        options: &SolverOptions,
    ) -> (
        Result<SolverResult, SolverError>,
        Result<SolverResult, SolverError>,
    ) {
        rayon::join(
            || self.prescribe(Schedule::TwiceWeekly, options),
            || self.prescribe(Schedule::ThriceWeekly, options),
        )
    }
}

impl Cohort {
    /// Solve every patient under one schedule, in parallel
    ///
    /// Results come back in cohort order, one [`PatientPrescription`] per
    /// patient, with per-patient errors preserved.
    pub fn prescribe_all(
        &self,
        schedule: Schedule,
        options: &SolverOptions,
    ) -> Vec<PatientPrescription> {
        self.patients()
            .par_iter()
            .map(|patient| PatientPrescription {
                id: patient.id().to_string(),
                result: patient.prescribe(schedule, options),
            })
            .collect()
    }
}

/// Read a cohort datafile and solve every patient under one schedule
///
/// Convenience wrapper over [`read_cohort`] and [`Cohort::prescribe_all`].
/// A malformed datafile fails the whole call; solver failures stay
/// per-patient in the returned vector.
pub fn prescribe_datafile(
    path: impl AsRef<Path>,
    schedule: Schedule,
    options: &SolverOptions,
) -> Result<Vec<PatientPrescription>, DialysolError> {
    let cohort = read_cohort(path)?;
    Ok(cohort.prescribe_all(schedule, options))
}
