use thiserror::Error;

use crate::patient::CohortError;
use crate::solver::SolverError;

#[derive(Error, Debug)]
pub enum DialysolError {
    #[error("Error in the solver: {0}")]
    SolverError(#[from] SolverError),
    #[error("Error reading cohort data: {0}")]
    CohortError(#[from] CohortError),
}
