//! Patient profile and urea distribution volume estimation
//!
//! The urea distribution volume is the denominator of every Kt/V quantity,
//! so it is the first thing computed for a patient. Two input modes exist,
//! modeled as the two variants of [`PatientProfile`]:
//!
//! - [`PatientProfile::Anthropometric`]: volume is estimated from age,
//!   height, weight and sex via the Watson regression, scaled by
//!   [`VOLUME_CALIBRATION`].
//! - [`PatientProfile::VolumeOverride`]: an operator-supplied volume in
//!   liters, used as-is. Typical when the volume was measured directly.
//!
//! A profile with missing or non-positive inputs is not an error, it is
//! simply not yet computable: [`PatientProfile::urea_volume`] returns
//! `None` and the caller decides when to proceed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calibration factor applied to the raw Watson estimate.
///
/// The Watson regression systematically overestimates total body water in
/// the dialysis population; the estimate is scaled down by 10% before use.
pub const VOLUME_CALIBRATION: f64 = 0.9;

/// Patient sex, as used by the sex-specific Watson regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Error returned when parsing a [`Sex`] from text fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized sex: {0}")]
pub struct ParseSexError(pub String);

impl FromStr for Sex {
    type Err = ParseSexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(ParseSexError(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Source of the urea distribution volume for one patient
///
/// Exactly one input mode is active at a time. Construct the variant that
/// matches how the volume is known; there is no runtime mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PatientProfile {
    /// Estimate the volume from anthropometrics via the Watson regression
    Anthropometric {
        age_years: f64,
        height_cm: f64,
        weight_kg: f64,
        sex: Sex,
    },
    /// Use an operator-supplied volume directly, in liters
    VolumeOverride { liters: f64 },
}

impl PatientProfile {
    /// Urea distribution volume in liters, or `None` if not yet computable
    ///
    /// In anthropometric mode all of age, height and weight must be
    /// positive; the Watson estimate is then scaled by
    /// [`VOLUME_CALIBRATION`]. In override mode the supplied value must be
    /// positive. `None` means the inputs are incomplete, and the solver
    /// will reject the patient rather than compute with a placeholder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dialysol::{PatientProfile, Sex};
    ///
    /// let profile = PatientProfile::Anthropometric {
    ///     age_years: 50.0,
    ///     height_cm: 170.0,
    ///     weight_kg: 70.0,
    ///     sex: Sex::Male,
    /// };
    /// let volume = profile.urea_volume().unwrap();
    /// assert!((volume - 35.69).abs() < 0.01);
    ///
    /// let incomplete = PatientProfile::Anthropometric {
    ///     age_years: 0.0,
    ///     height_cm: 170.0,
    ///     weight_kg: 70.0,
    ///     sex: Sex::Male,
    /// };
    /// assert!(incomplete.urea_volume().is_none());
    /// ```
    pub fn urea_volume(&self) -> Option<f64> {
        match self {
            PatientProfile::VolumeOverride { liters } if *liters > 0.0 => Some(*liters),
            PatientProfile::VolumeOverride { .. } => None,
            PatientProfile::Anthropometric {
                age_years,
                height_cm,
                weight_kg,
                sex,
            } => watson_volume(*sex, *age_years, *height_cm, *weight_kg)
                .map(|v| v * VOLUME_CALIBRATION),
        }
    }
}

/// Raw Watson total body water estimate in liters
///
/// Sex-specific linear regression on age, height and weight:
///
/// - male: `V = 2.447 - 0.09156*age + 0.1074*height + 0.3362*weight`
/// - female: `V = -2.097 + 0.1069*height + 0.2466*weight`
///
/// Age does not enter the female regression. Returns `None` unless age,
/// height and weight are all positive. Note this is the unscaled textbook
/// value; [`PatientProfile::urea_volume`] applies [`VOLUME_CALIBRATION`]
/// on top.
pub fn watson_volume(sex: Sex, age_years: f64, height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(age_years > 0.0 && height_cm > 0.0 && weight_kg > 0.0) {
        return None;
    }
    let volume = match sex {
        Sex::Male => 2.447 - 0.09156 * age_years + 0.1074 * height_cm + 0.3362 * weight_kg,
        Sex::Female => -2.097 + 0.1069 * height_cm + 0.2466 * weight_kg,
    };
    Some(volume)
}
