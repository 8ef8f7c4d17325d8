//! Urea kinetics primitives
//!
//! The closed-form pieces the solver composes, exposed individually for
//! callers that want a single quantity without running the full search.
//!
//! | Function | Quantity |
//! |----------|----------|
//! | [`equilibrated_ktv`] | Rebound-corrected Kt/V for one session |
//! | [`effective_clearance`] | Clearance rate implied by a delivered dose |
//! | [`leypoldt_std_ktv`] | Weekly standardized Kt/V at a trial time |
//! | [`dialyzer_clearance`] | Dialyzer urea clearance net of renal clearance |

use crate::solver::types::Schedule;

/// Minutes in one week, the horizon of every standardized dose measure
pub const MINUTES_PER_WEEK: f64 = 10080.0;

/// Post-dialysis urea rebound equilibration time, in minutes
pub const REBOUND_MINUTES: f64 = 30.0;

/// Equilibrated Kt/V from a single-pool value and session time
///
/// `eKtV = spKtV * t / (t + 30)`, the rate-based rebound correction.
/// Session time must be positive.
pub fn equilibrated_ktv(sp_ktv: f64, session_minutes: f64) -> f64 {
    sp_ktv * session_minutes / (session_minutes + REBOUND_MINUTES)
}

/// Effective urea clearance in mL/min implied by a delivered dose
///
/// `Keff = V * 1000 * eKtV / t` for a volume in liters. The solver holds
/// this constant across trial times: the dialyzer clears at the same rate
/// however long the session runs, so dose scales with time alone.
pub fn effective_clearance(volume_liters: f64, ektv: f64, session_minutes: f64) -> f64 {
    volume_liters * 1000.0 * ektv / session_minutes
}

/// Leypoldt closed-form standardized Kt/V for one schedule
///
/// With `a = 1 - exp(-eKtV)` and `N` sessions per week over a session of
/// `t` minutes:
///
/// `stdKtV = (10080 * a / t) / (a / eKtV + 10080 / (N * t) - 1)`
///
/// Both `ektv` and `minutes` must be positive; the ultrafiltration and
/// residual-clearance corrections are applied by the caller on top.
pub fn leypoldt_std_ktv(ektv: f64, minutes: f64, schedule: Schedule) -> f64 {
    let sessions = schedule.sessions_per_week();
    let a = 1.0 - (-ektv).exp();
    (MINUTES_PER_WEEK * a / minutes)
        / (a / ektv + MINUTES_PER_WEEK / (sessions * minutes) - 1.0)
}

/// Dialyzer urea clearance in mL/min, net of residual renal clearance
///
/// `Kd = spKtV * V * 1000 / t - Kru` for a volume in liters. Returns
/// `None` unless volume and session time are positive.
pub fn dialyzer_clearance(
    sp_ktv: f64,
    session_minutes: f64,
    volume_liters: f64,
    kru_ml_min: f64,
) -> Option<f64> {
    if volume_liters <= 0.0 || session_minutes <= 0.0 {
        return None;
    }
    Some(sp_ktv * volume_liters * 1000.0 / session_minutes - kru_ml_min)
}
