//! Patient and cohort containers

use serde::{Deserialize, Serialize};

use crate::patient::{ClinicalParameters, PatientProfile};

/// One patient: an identifier, a volume source, and clinical parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    id: String,
    profile: PatientProfile,
    parameters: ClinicalParameters,
}

impl Patient {
    pub fn new(
        id: impl Into<String>,
        profile: PatientProfile,
        parameters: ClinicalParameters,
    ) -> Self {
        Self {
            id: id.into(),
            profile,
            parameters,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    pub fn parameters(&self) -> &ClinicalParameters {
        &self.parameters
    }
}

/// A collection of patients, typically read from a datafile
///
/// See [`crate::patient::read_cohort`] for the datafile format and
/// [`Cohort::prescribe_all`] for batch solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    patients: Vec<Patient>,
}

impl Cohort {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
