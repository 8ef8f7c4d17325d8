//! The bounded equivalent-therapy-time search

use crate::patient::ClinicalParameters;
use crate::solver::error::SolverError;
use crate::solver::kinetics::{
    effective_clearance, equilibrated_ktv, leypoldt_std_ktv, MINUTES_PER_WEEK, REBOUND_MINUTES,
};
use crate::solver::types::{Schedule, SolverOptions, SolverResult, UFAdvisory};

/// Convective solute removal coefficient in the ultrafiltration correction
const UF_CLEARANCE_COEFFICIENT: f64 = 0.74;

/// Solve for the session time that delivers the target standardized Kt/V
///
/// The current regimen fixes an effective clearance rate; that rate is
/// held constant while the session time is walked in fixed steps until
/// the Leypoldt standardized Kt/V, corrected for ultrafiltration and
/// residual renal clearance, lands within `tolerance * target` of the
/// target. The walk is bounded by `max_iterations` and
/// `max_session_minutes`; exceeding either is a
/// [`SolverError::ConvergenceFailure`].
///
/// `volume_liters` is the urea distribution volume, normally obtained
/// from [`PatientProfile::urea_volume`](crate::patient::PatientProfile::urea_volume).
/// Callers must resolve the `None` (not yet computable) state before
/// calling; a non-positive volume here is a [`SolverError::Domain`].
///
/// # Examples
///
/// ```rust
/// use dialysol::{solve, ClinicalParameters, Schedule, SolverOptions};
///
/// let params = ClinicalParameters::new(1.4, 240.0, 2.5, 70.0).with_weekly_uf(6.0);
/// let result = solve(&params, 35.69, Schedule::ThriceWeekly, &SolverOptions::default()).unwrap();
///
/// assert!(result.session_minutes > 240);
/// assert!((result.std_ktv - 2.5).abs() <= 0.001 * 2.5);
/// ```
pub fn solve(
    params: &ClinicalParameters,
    volume_liters: f64,
    schedule: Schedule,
    options: &SolverOptions,
) -> Result<SolverResult, SolverError> {
    validate(params)?;
    if !(volume_liters > 0.0) {
        return Err(SolverError::Domain {
            reason: format!("urea distribution volume must be positive, got {volume_liters} L"),
        });
    }

    let sessions = schedule.sessions_per_week();
    let volume_ml = volume_liters * 1000.0;
    let target = params.target_std_ktv;
    let tolerance = options.tolerance * target;

    // The delivered dose of the current regimen pins the clearance rate;
    // only time varies across the search.
    let ektv = equilibrated_ktv(params.sp_ktv, params.session_minutes);
    let keff = effective_clearance(volume_liters, ektv, params.session_minutes);

    let uf_denominator =
        1.0 - UF_CLEARANCE_COEFFICIENT * params.weekly_uf_liters / (sessions * volume_liters);
    if uf_denominator <= 0.0 {
        return Err(SolverError::Domain {
            reason: format!(
                "ultrafiltration correction denominator is non-positive ({uf_denominator:.4}); \
                 weekly ultrafiltration volume is too large for this patient"
            ),
        });
    }
    let uf_factor = 1.0 / uf_denominator;
    let kru_add = MINUTES_PER_WEEK * params.kru_ml_min / volume_ml;

    let mut t_prime = params.session_minutes;
    let mut sp_ktv_prime;
    let mut trial;
    let mut iterations = 0usize;

    loop {
        sp_ktv_prime = keff * (t_prime + REBOUND_MINUTES) / volume_ml;
        let ektv_prime = equilibrated_ktv(sp_ktv_prime, t_prime);
        trial = uf_factor * leypoldt_std_ktv(ektv_prime, t_prime, schedule) + kru_add;

        if !trial.is_finite() {
            return Err(SolverError::Domain {
                reason: format!(
                    "standardized Kt/V became non-finite at trial time {t_prime:.1} min"
                ),
            });
        }
        if (trial - target).abs() <= tolerance {
            break;
        }

        iterations += 1;
        if iterations > options.max_iterations {
            return Err(SolverError::ConvergenceFailure {
                iterations: options.max_iterations,
                last_std_ktv: trial,
                target_std_ktv: target,
            });
        }

        // adjust time for the next trial
        if trial < target {
            t_prime += options.step_minutes;
        } else {
            t_prime -= options.step_minutes;
        }

        if t_prime <= 0.0 {
            return Err(SolverError::Domain {
                reason: "trial session time fell to zero; the target is below any \
                         dose this regimen can deliver"
                    .to_string(),
            });
        }
        if t_prime > options.max_session_minutes {
            return Err(SolverError::ConvergenceFailure {
                iterations,
                last_std_ktv: trial,
                target_std_ktv: target,
            });
        }
    }

    let session_minutes = t_prime.round();
    if session_minutes < 1.0 {
        return Err(SolverError::Domain {
            reason: "converged session time rounds to zero minutes".to_string(),
        });
    }

    // Projected fluid removal at the converged time
    let gain_per_day = params.weekly_uf_liters / 7.0;
    let accumulation_g = gain_per_day * sessions * 1000.0;
    let uf_rate = accumulation_g / (session_minutes / 60.0 * params.weight_kg);

    let uf_advisory = if uf_rate >= options.uf_rate_limit {
        // Rounded up so the advised time never itself breaches the ceiling
        let safer =
            (60.0 * accumulation_g / (params.weight_kg * options.uf_rate_limit)).ceil();
        Some(UFAdvisory {
            limit: options.uf_rate_limit,
            safer_session_minutes: safer as u32,
        })
    } else {
        None
    };

    Ok(SolverResult {
        session_minutes: session_minutes as u32,
        std_ktv: trial,
        sp_ktv: sp_ktv_prime,
        uf_rate,
        uf_advisory,
    })
}

fn validate(params: &ClinicalParameters) -> Result<(), SolverError> {
    // NaN and infinity fail these checks as well; the walk's stopping
    // criterion is meaningless against a non-finite target
    if !(params.sp_ktv.is_finite() && params.sp_ktv > 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "current single-pool Kt/V must be positive",
        });
    }
    if !(params.session_minutes.is_finite() && params.session_minutes > 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "current session time must be positive",
        });
    }
    if !(params.target_std_ktv.is_finite() && params.target_std_ktv > 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "target standardized Kt/V must be positive",
        });
    }
    if !(params.weight_kg.is_finite() && params.weight_kg > 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "patient weight must be positive",
        });
    }
    if !(params.weekly_uf_liters.is_finite() && params.weekly_uf_liters >= 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "weekly ultrafiltration volume must be non-negative",
        });
    }
    if !(params.kru_ml_min.is_finite() && params.kru_ml_min >= 0.0) {
        return Err(SolverError::IncompleteInput {
            field: "residual renal urea clearance must be non-negative",
        });
    }
    Ok(())
}
