//! Batch prescriptions for a cohort datafile
//!
//! Run with: cargo run --example cohort [path/to/cohort.csv]

use anyhow::{Context, Result};
use dialysol::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/cohort.csv".to_string());

    let options = SolverOptions::default();
    for schedule in [Schedule::TwiceWeekly, Schedule::ThriceWeekly] {
        println!("\n=== {schedule} ===");
        let prescriptions = prescribe_datafile(&path, schedule, &options)
            .with_context(|| format!("reading cohort from {path}"))?;
        for prescription in prescriptions {
            match &prescription.result {
                Ok(result) => {
                    let advisory = match result.uf_advisory {
                        Some(a) => format!(" (UF high; advise {} min)", a.safer_session_minutes),
                        None => String::new(),
                    };
                    println!(
                        "{:<8} {:>4} min  stdKt/V {:.2}  spKt/V {:.2}  UF {:>5.1} mL/kg/hr{}",
                        prescription.id,
                        result.session_minutes,
                        result.std_ktv,
                        result.sp_ktv,
                        result.uf_rate,
                        advisory
                    );
                    println!("         {}", serde_json::to_string(result)?);
                }
                Err(e) => println!("{:<8} failed: {e}", prescription.id),
            }
        }
    }

    Ok(())
}
