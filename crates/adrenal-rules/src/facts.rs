use adrenal_core::{ClinicalObservation, CtFindings, Growth, Referral};

use crate::washout::Washout;

/// Read-only view of one observation that rule predicates test against.
/// Derived values (washout) are computed once here, not per rule.
#[derive(Debug, Clone)]
pub struct Facts {
    pub age: Option<u32>,
    pub referral: Referral,
    pub ct: Option<CtFindings>,
    pub washout: Option<Washout>,
}

impl Facts {
    pub fn from_observation(obs: &ClinicalObservation) -> Self {
        let washout = obs
            .washout_phases()
            .map(|(non, venous, delayed)| Washout::measure(non, venous, delayed));
        Self {
            age: obs.age,
            referral: obs.referral_reason,
            ct: obs.ct.clone(),
            washout,
        }
    }

    pub fn size(&self) -> Option<f64> {
        self.ct.as_ref().map(|ct| ct.size_cm)
    }

    pub fn hu_non_contrast(&self) -> Option<f64> {
        self.ct.as_ref().map(|ct| ct.hu_non_contrast)
    }

    pub fn growth(&self) -> Growth {
        self.ct.as_ref().map(|ct| ct.growth).unwrap_or_default()
    }

    /// True when a CT block is present and `flag` holds for it.
    pub fn ct_has(&self, flag: impl Fn(&CtFindings) -> bool) -> bool {
        self.ct.as_ref().is_some_and(flag)
    }

    pub fn relative_washout(&self) -> Option<f64> {
        self.washout.and_then(|w| w.relative)
    }

    pub fn absolute_washout(&self) -> Option<f64> {
        self.washout.and_then(|w| w.absolute)
    }
}
