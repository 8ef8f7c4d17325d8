//! Clinical parameters of the current regimen and the prescription target

use serde::{Deserialize, Serialize};

/// Inputs describing the current regimen and the equivalence target
///
/// Supplied fresh for each calculation; the solver never mutates them.
/// Validation happens at solve time so a partially entered parameter set
/// can exist without error.
///
/// `weight_kg` lives here, not on the profile, because the projected
/// ultrafiltration rate needs it even when the urea volume was entered
/// directly and no anthropometrics are available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalParameters {
    /// Current single-pool Kt/V (dimensionless)
    pub sp_ktv: f64,
    /// Current treatment time per session, in minutes
    pub session_minutes: f64,
    /// Total ultrafiltration volume per week, in liters
    pub weekly_uf_liters: f64,
    /// Residual renal urea clearance, in mL/min
    pub kru_ml_min: f64,
    /// Standardized Kt/V the new schedule must reproduce
    pub target_std_ktv: f64,
    /// Patient weight, in kg
    pub weight_kg: f64,
}

impl ClinicalParameters {
    /// Create a parameter set with no ultrafiltration and no residual
    /// renal clearance; use the `with_*` methods to add them.
    pub fn new(sp_ktv: f64, session_minutes: f64, target_std_ktv: f64, weight_kg: f64) -> Self {
        Self {
            sp_ktv,
            session_minutes,
            weekly_uf_liters: 0.0,
            kru_ml_min: 0.0,
            target_std_ktv,
            weight_kg,
        }
    }

    /// Set the weekly ultrafiltration volume, in liters
    pub fn with_weekly_uf(mut self, liters: f64) -> Self {
        self.weekly_uf_liters = liters;
        self
    }

    /// Set the residual renal urea clearance, in mL/min
    pub fn with_kru(mut self, ml_min: f64) -> Self {
        self.kru_ml_min = ml_min;
        self
    }
}
