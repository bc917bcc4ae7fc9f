use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Why the patient was referred for adrenal imaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Referral {
    /// Staging or work-up of a known extra-adrenal cancer.
    CancerWorkup,
    /// Clinical or biochemical suspicion of hormone excess.
    HormonalImbalance,
    /// Mass found on imaging done for an unrelated reason.
    Incidentaloma,
    #[default]
    Unspecified,
}

impl FromStr for Referral {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "unspecified" => Ok(Self::Unspecified),
            "Cancer work-up" | "cancer_workup" => Ok(Self::CancerWorkup),
            "Hormonal imbalance" | "hormonal_imbalance" => Ok(Self::HormonalImbalance),
            "Incidentaloma" | "incidentaloma" => Ok(Self::Incidentaloma),
            other => Err(ValidationError::UnknownOption {
                field: "referral",
                value: other.to_string(),
            }),
        }
    }
}

/// Size change relative to prior imaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Growth {
    /// No prior scan, or no change recorded.
    #[default]
    None,
    /// Increased by less than 5 mm/year.
    SlowIncrease,
    /// Increased by more than 5 mm/year.
    FastIncrease,
    InDoubt,
}

impl FromStr for Growth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "No prior scanning" => Ok(Self::None),
            "Increased < 5 mm/year" | "slow_increase" => Ok(Self::SlowIncrease),
            "Increased > 5 mm/year" | "fast_increase" => Ok(Self::FastIncrease),
            "In doubt" | "in_doubt" => Ok(Self::InDoubt),
            other => Err(ValidationError::UnknownOption {
                field: "growth",
                value: other.to_string(),
            }),
        }
    }
}

/// Non-contrast CT findings. Present as a whole or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CtFindings {
    pub size_cm: f64,
    pub hu_non_contrast: f64,
    pub growth: Growth,
    pub bilateral: bool,
    pub heterogeneous: bool,
    pub macroscopic_fat: bool,
    pub cystic: bool,
    pub calcification: bool,
}

/// Attenuation in the contrast-enhanced phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ContrastPhases {
    /// Portal venous phase HU.
    pub hu_venous: f64,
    /// Delayed (typically 15 min) phase HU.
    pub hu_delayed: f64,
}

/// A validated observation set. Built once per request and never mutated.
///
/// Serialize-only. Untrusted input reaches this type only through
/// [`ObservationForm::validate`](crate::ObservationForm::validate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ClinicalObservation {
    pub age: Option<u32>,
    pub referral_reason: Referral,
    pub ct: Option<CtFindings>,
    pub contrast: Option<ContrastPhases>,
}

impl ClinicalObservation {
    /// The three attenuation values needed for washout, if all were measured.
    ///
    /// Returns `(non_contrast, venous, delayed)`.
    pub fn washout_phases(&self) -> Option<(f64, f64, f64)> {
        let ct = self.ct.as_ref()?;
        let contrast = self.contrast?;
        Some((ct.hu_non_contrast, contrast.hu_venous, contrast.hu_delayed))
    }
}
