//! Solver error types

use thiserror::Error;

/// Errors that can occur during an equivalence solve
///
/// A solve either fully succeeds or fails with one of these; no partial
/// results are returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A required input is missing or outside its admissible range
    #[error("Incomplete input: {field}")]
    IncompleteInput { field: &'static str },

    /// The kinetics left their numeric domain (division by zero or a
    /// non-finite intermediate)
    #[error("Urea kinetics out of domain: {reason}")]
    Domain { reason: String },

    /// The search bound was exceeded before the tolerance was met
    #[error("Failed to converge after {iterations} iterations: standardized Kt/V {last_std_ktv:.4} vs target {target_std_ktv:.4}")]
    ConvergenceFailure {
        iterations: usize,
        last_std_ktv: f64,
        target_std_ktv: f64,
    },
}
