//! Cohort CSV datafile reader
//!
//! A cohort datafile carries one patient per row with the columns
//!
//! ```text
//! id, age, height, weight, sex, volume, sp_ktv, time, weekly_uf, kru, target_std_ktv
//! ```
//!
//! Headers are case-insensitive and lines starting with `#` are skipped.
//! A non-empty `volume` selects override mode and the anthropometric
//! columns (`age`, `height`, `sex`) may be left blank; otherwise all of
//! them are required. `weight` is always required since the projected
//! ultrafiltration rate depends on it. `weekly_uf` and `kru` default to
//! zero when blank.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::patient::{ClinicalParameters, Cohort, Patient, PatientProfile};

/// Custom error type for the module
#[derive(Error, Debug)]
pub enum CohortError {
    #[error("CSV error: {0}")]
    ReadError(#[from] csv::Error),
    #[error("Required column {field} is missing for ID {id}")]
    MissingField { id: String, field: &'static str },
    #[error("Unrecognized sex {value:?} for ID {id}")]
    InvalidSex { id: String, value: String },
}

/// One raw datafile row; blanks deserialize to `None`
#[derive(Debug, Clone, Deserialize)]
struct Row {
    id: String,
    age: Option<f64>,
    height: Option<f64>,
    weight: Option<f64>,
    sex: Option<String>,
    volume: Option<f64>,
    sp_ktv: Option<f64>,
    time: Option<f64>,
    weekly_uf: Option<f64>,
    kru: Option<f64>,
    target_std_ktv: Option<f64>,
}

impl Row {
    fn require<T>(value: Option<T>, id: &str, field: &'static str) -> Result<T, CohortError> {
        value.ok_or_else(|| CohortError::MissingField {
            id: id.to_string(),
            field,
        })
    }

    fn into_patient(self) -> Result<Patient, CohortError> {
        let id = self.id;

        let weight = Self::require(self.weight, &id, "weight")?;
        let profile = match self.volume {
            Some(liters) => PatientProfile::VolumeOverride { liters },
            None => {
                let age_years = Self::require(self.age, &id, "age")?;
                let height_cm = Self::require(self.height, &id, "height")?;
                let sex_text = Self::require(self.sex, &id, "sex")?;
                let sex = sex_text.parse().map_err(|_| CohortError::InvalidSex {
                    id: id.clone(),
                    value: sex_text,
                })?;
                PatientProfile::Anthropometric {
                    age_years,
                    height_cm,
                    weight_kg: weight,
                    sex,
                }
            }
        };

        let sp_ktv = Self::require(self.sp_ktv, &id, "sp_ktv")?;
        let time = Self::require(self.time, &id, "time")?;
        let target = Self::require(self.target_std_ktv, &id, "target_std_ktv")?;

        let parameters = ClinicalParameters::new(sp_ktv, time, target, weight)
            .with_weekly_uf(self.weekly_uf.unwrap_or(0.0))
            .with_kru(self.kru.unwrap_or(0.0));

        Ok(Patient::new(id, profile, parameters))
    }
}

/// Read a cohort datafile and convert it to a [`Cohort`]
///
/// For the expected columns, see the module documentation. Reading stops
/// at the first malformed row; batch solving tolerates per-patient
/// failures, but a malformed datafile is a caller error.
pub fn read_cohort(path: impl AsRef<Path>) -> Result<Cohort, CohortError> {
    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_path(path.as_ref())?;
    collect_rows(reader)
}

/// Read a cohort from any [`Read`] source, e.g. an in-memory buffer
pub fn read_cohort_from_reader<R: Read>(source: R) -> Result<Cohort, CohortError> {
    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_reader(source);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Cohort, CohortError> {
    // Convert headers to lowercase
    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    reader.set_headers(csv::StringRecord::from(headers));

    let mut patients = Vec::new();
    for row_result in reader.deserialize() {
        let row: Row = row_result?;
        patients.push(row.into_patient()?);
    }

    Ok(Cohort::new(patients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Sex;

    const DATAFILE: &str = "\
id,age,height,weight,sex,volume,sp_ktv,time,weekly_uf,kru,target_std_ktv
p001,50,170,70,male,,1.4,240,6.0,0.0,2.5
p002,,,65,,32.5,1.3,210,8.0,1.5,2.2
";

    #[test]
    fn test_read_cohort_modes() {
        let cohort = read_cohort_from_reader(DATAFILE.as_bytes()).unwrap();
        assert_eq!(cohort.len(), 2);

        let p001 = &cohort.patients()[0];
        assert_eq!(p001.id(), "p001");
        assert_eq!(
            *p001.profile(),
            PatientProfile::Anthropometric {
                age_years: 50.0,
                height_cm: 170.0,
                weight_kg: 70.0,
                sex: Sex::Male,
            }
        );
        assert_eq!(p001.parameters().weekly_uf_liters, 6.0);

        let p002 = &cohort.patients()[1];
        assert_eq!(
            *p002.profile(),
            PatientProfile::VolumeOverride { liters: 32.5 }
        );
        assert_eq!(p002.parameters().kru_ml_min, 1.5);
        assert_eq!(p002.parameters().weight_kg, 65.0);
    }

    #[test]
    fn test_headers_are_case_insensitive_and_comments_skipped() {
        let data = "\
ID,AGE,HEIGHT,WEIGHT,SEX,VOLUME,SP_KTV,TIME,WEEKLY_UF,KRU,TARGET_STD_KTV
# a comment line
p010,61,182,91,M,,1.25,255,7.5,,2.1
";
        let cohort = read_cohort_from_reader(data.as_bytes()).unwrap();
        assert_eq!(cohort.len(), 1);
        assert_eq!(cohort.patients()[0].parameters().kru_ml_min, 0.0);
    }

    #[test]
    fn test_missing_weight_is_an_error() {
        let data = "\
id,age,height,weight,sex,volume,sp_ktv,time,weekly_uf,kru,target_std_ktv
p001,50,170,,male,,1.4,240,6.0,0.0,2.5
";
        let err = read_cohort_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CohortError::MissingField { field: "weight", .. }
        ));
    }

    #[test]
    fn test_missing_anthropometrics_without_override() {
        let data = "\
id,age,height,weight,sex,volume,sp_ktv,time,weekly_uf,kru,target_std_ktv
p001,,170,70,male,,1.4,240,6.0,0.0,2.5
";
        let err = read_cohort_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CohortError::MissingField { field: "age", .. }
        ));
    }

    #[test]
    fn test_invalid_sex() {
        let data = "\
id,age,height,weight,sex,volume,sp_ktv,time,weekly_uf,kru,target_std_ktv
p001,50,170,70,unknown,,1.4,240,6.0,0.0,2.5
";
        let err = read_cohort_from_reader(data.as_bytes()).unwrap_err();
        match err {
            CohortError::InvalidSex { id, value } => {
                assert_eq!(id, "p001");
                assert_eq!(value, "unknown");
            }
            other => panic!("expected InvalidSex, got {other:?}"),
        }
    }
}
