//! Solver types: schedule, options, and result structures

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Configuration Types
// ============================================================================

/// Weekly hemodialysis schedule
///
/// The session count enters the Leypoldt standardized Kt/V term and the
/// ultrafiltration correction; everything else in the search is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schedule {
    TwiceWeekly,
    ThriceWeekly,
}

impl Schedule {
    /// Number of sessions per week as a float, for use in the kinetics
    pub fn sessions_per_week(&self) -> f64 {
        match self {
            Schedule::TwiceWeekly => 2.0,
            Schedule::ThriceWeekly => 3.0,
        }
    }

    /// Build a schedule from a session count; only 2 and 3 are supported
    pub fn from_sessions(sessions: u32) -> Option<Self> {
        match sessions {
            2 => Some(Schedule::TwiceWeekly),
            3 => Some(Schedule::ThriceWeekly),
            _ => None,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::TwiceWeekly => write!(f, "2x/wk"),
            Schedule::ThriceWeekly => write!(f, "3x/wk"),
        }
    }
}

/// Search configuration
///
/// The defaults reproduce the reference clinical behavior; the bounds
/// exist so a target that no admissible treatment time can reach fails
/// with a typed error instead of hanging the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Relative tolerance on standardized Kt/V (default: 0.001)
    ///
    /// The search stops once the trial value is within
    /// `tolerance * target` of the target.
    pub tolerance: f64,

    /// Time increment of the fixed-step walk, in minutes (default: 0.1)
    pub step_minutes: f64,

    /// Iteration bound for the walk (default: 100_000)
    pub max_iterations: usize,

    /// Upper bound on the trial session time, in minutes (default: 1440)
    pub max_session_minutes: f64,

    /// Ultrafiltration rate ceiling in mL/kg/hr (default: 13.0)
    ///
    /// At or above this rate the result carries a [`UFAdvisory`] with a
    /// longer session time that brings the rate back under the ceiling.
    pub uf_rate_limit: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            step_minutes: 0.1,
            max_iterations: 100_000,
            max_session_minutes: 1440.0,
            uf_rate_limit: 13.0,
        }
    }
}

impl SolverOptions {
    /// Set the relative tolerance on standardized Kt/V
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the walk step, in minutes
    pub fn with_step_minutes(mut self, step_minutes: f64) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    /// Set the iteration bound
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the upper bound on trial session time, in minutes
    pub fn with_max_session_minutes(mut self, max_session_minutes: f64) -> Self {
        self.max_session_minutes = max_session_minutes;
        self
    }

    /// Set the ultrafiltration rate ceiling, in mL/kg/hr
    pub fn with_uf_rate_limit(mut self, uf_rate_limit: f64) -> Self {
        self.uf_rate_limit = uf_rate_limit;
        self
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Advisory attached to a result whose ultrafiltration rate is unsafe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UFAdvisory {
    /// The ceiling that was exceeded, in mL/kg/hr
    pub limit: f64,
    /// Session time that brings the rate back under the ceiling, in minutes
    pub safer_session_minutes: u32,
}

/// Converged output of one equivalence solve
///
/// | Field | Meaning |
/// |-------|---------|
/// | `session_minutes` | Per-session treatment time achieving the target |
/// | `std_ktv` | Standardized Kt/V at the converged time |
/// | `sp_ktv` | Single-pool Kt/V at the converged time |
/// | `uf_rate` | Projected ultrafiltration rate, mL/kg/hr |
/// | `uf_advisory` | Present when `uf_rate` reaches the safety ceiling |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Treatment time per session under the new schedule, whole minutes
    pub session_minutes: u32,
    /// Standardized Kt/V delivered at the converged time
    pub std_ktv: f64,
    /// Single-pool Kt/V delivered at the converged time
    pub sp_ktv: f64,
    /// Projected ultrafiltration rate at the converged time, mL/kg/hr
    pub uf_rate: f64,
    /// Safety advisory, present when `uf_rate` is at or above the ceiling
    pub uf_advisory: Option<UFAdvisory>,
}

impl SolverResult {
    /// Whether the projected ultrafiltration rate reached the ceiling
    pub fn exceeds_safe_uf_rate(&self) -> bool {
        self.uf_advisory.is_some()
    }
}
