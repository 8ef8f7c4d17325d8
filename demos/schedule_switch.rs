//! Equivalent prescriptions for a patient considering a schedule switch
//!
//! Run with: cargo run --example schedule_switch

use anyhow::Result;
use dialysol::prelude::*;
use dialysol::solver::dialyzer_clearance;

fn main() -> Result<()> {
    let profile = PatientProfile::Anthropometric {
        age_years: 50.0,
        height_cm: 170.0,
        weight_kg: 70.0,
        sex: Sex::Male,
    };
    let volume = profile
        .urea_volume()
        .expect("anthropometrics are complete");

    let params = ClinicalParameters::new(1.4, 240.0, 2.2, 70.0)
        .with_weekly_uf(6.0)
        .with_kru(0.5);
    let patient = Patient::new("patient_001", profile, params);

    println!("Urea distribution volume: {volume:.2} L");
    if let Some(kd) = dialyzer_clearance(
        params.sp_ktv,
        params.session_minutes,
        volume,
        params.kru_ml_min,
    ) {
        println!("Dialyzer urea clearance:  {kd:.1} mL/min");
    }
    println!();

    let options = SolverOptions::default();
    let (twice, thrice) = patient.prescribe_pair(&options);

    report(Schedule::TwiceWeekly, &twice);
    report(Schedule::ThriceWeekly, &thrice);

    Ok(())
}

fn report(schedule: Schedule, outcome: &std::result::Result<SolverResult, SolverError>) {
    println!("--- {schedule} ---");
    match outcome {
        Ok(result) => {
            println!("  Session time: {} min", result.session_minutes);
            println!("  stdKt/V:      {:.2}", result.std_ktv);
            println!("  spKt/V:       {:.2}", result.sp_ktv);
            println!("  UF rate:      {:.1} mL/kg/hr", result.uf_rate);
            if let Some(advisory) = result.uf_advisory {
                println!(
                    "  NOTE: UF rate exceeds {} mL/kg/hr; extending to {} min would bring it under the limit",
                    advisory.limit, advisory.safer_session_minutes
                );
            }
        }
        Err(e) => println!("  Failed: {e}"),
    }
    println!();
}
