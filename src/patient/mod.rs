//! Patient data model
//!
//! This module holds everything the solver consumes: the patient profile
//! (either direct anthropometrics or a measured urea distribution volume),
//! the per-calculation clinical parameters, and cohort containers with a
//! CSV datafile reader for batch work.
//!
//! The volume estimate is the only derived quantity here. Everything else
//! is plain data, validated at solve time rather than at construction, so
//! partially filled inputs can be represented without panicking.

pub mod clinical;
pub mod cohort;
pub mod parse;
pub mod profile;

pub use clinical::ClinicalParameters;
pub use cohort::{Cohort, Patient};
pub use parse::{read_cohort, read_cohort_from_reader, CohortError};
pub use profile::{watson_volume, ParseSexError, PatientProfile, Sex, VOLUME_CALIBRATION};
