use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};

use super::observation::{ClinicalObservation, ContrastPhases, CtFindings, Growth, Referral};

/// One form entry as it arrives: a checkbox, a number, or text. Anything
/// else is kept so validation can name the field it came in on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FormValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FormValue {
    fn is_blank(&self) -> bool {
        matches!(self, FormValue::Text(s) if s.trim().is_empty())
    }

    fn describe(&self) -> String {
        match self {
            FormValue::Flag(b) => b.to_string(),
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.clone(),
            FormValue::Other(v) => v.to_string(),
        }
    }

    /// Parse to a finite number. Blank text counts as "not entered".
    fn to_number(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        let not_numeric = || ValidationError::NotNumeric {
            field,
            value: self.describe(),
        };
        let value = match self {
            _ if self.is_blank() => return Ok(None),
            FormValue::Number(n) => *n,
            FormValue::Text(s) => s.trim().parse::<f64>().map_err(|_| not_numeric())?,
            FormValue::Flag(_) | FormValue::Other(_) => return Err(not_numeric()),
        };
        if !value.is_finite() {
            return Err(not_numeric());
        }
        Ok(Some(value))
    }

    fn to_flag(&self, field: &'static str) -> Result<Option<bool>, ValidationError> {
        match self {
            _ if self.is_blank() => Ok(None),
            FormValue::Flag(b) => Ok(Some(*b)),
            _ => Err(ValidationError::NotBoolean {
                field,
                value: self.describe(),
            }),
        }
    }

    fn to_label(&self, field: &'static str) -> Result<Option<&str>, ValidationError> {
        match self {
            FormValue::Text(s) if s.trim().is_empty() => Ok(None),
            FormValue::Text(s) => Ok(Some(s.trim())),
            _ => Err(ValidationError::UnknownOption {
                field,
                value: self.describe(),
            }),
        }
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Flag(b)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

/// Raw observation as entered in the assessment form, before validation.
///
/// The CT block counts as present when any CT field carries a value; the
/// contrast block likewise. A present block must be complete. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct ObservationForm {
    pub age: Option<FormValue>,
    pub referral: Option<FormValue>,

    pub size_cm: Option<FormValue>,
    pub hu_non_contrast: Option<FormValue>,
    pub growth: Option<FormValue>,
    pub bilateral: Option<FormValue>,
    /// "Homogeneous" or "Heterogeneous".
    pub heterogeneity: Option<FormValue>,
    pub macroscopic_fat: Option<FormValue>,
    pub cystic: Option<FormValue>,
    pub calcification: Option<FormValue>,

    pub hu_venous: Option<FormValue>,
    pub hu_delayed: Option<FormValue>,
}

fn number(value: &Option<FormValue>, field: &'static str) -> Result<Option<f64>, ValidationError> {
    value.as_ref().map_or(Ok(None), |v| v.to_number(field))
}

fn flag(value: &Option<FormValue>, field: &'static str) -> Result<Option<bool>, ValidationError> {
    value.as_ref().map_or(Ok(None), |v| v.to_flag(field))
}

fn label<'a>(
    value: &'a Option<FormValue>,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    value.as_ref().map_or(Ok(None), |v| v.to_label(field))
}

fn parse_heterogeneity(label: &str) -> Result<bool, ValidationError> {
    match label {
        "Homogeneous" | "homogeneous" => Ok(false),
        "Heterogeneous" | "heterogeneous" => Ok(true),
        other => Err(ValidationError::UnknownOption {
            field: "heterogeneity",
            value: other.to_string(),
        }),
    }
}

impl ObservationForm {
    /// Validate and normalize into a [`ClinicalObservation`].
    pub fn validate(&self) -> Result<ClinicalObservation, ValidationError> {
        let age = match number(&self.age, "age")? {
            None => None,
            Some(age) if !(0.0..=120.0).contains(&age) => {
                return Err(ValidationError::AgeOutOfRange { age });
            }
            Some(age) if age.fract() != 0.0 => {
                return Err(ValidationError::AgeNotWhole { age });
            }
            Some(age) => Some(age as u32),
        };

        let referral_reason = match label(&self.referral, "referral")? {
            Some(label) => label.parse::<Referral>()?,
            None => Referral::Unspecified,
        };

        Ok(ClinicalObservation {
            age,
            referral_reason,
            ct: self.ct_block()?,
            contrast: self.contrast_block()?,
        })
    }

    fn ct_block(&self) -> Result<Option<CtFindings>, ValidationError> {
        let size_cm = number(&self.size_cm, "size_cm")?;
        let hu_non_contrast = number(&self.hu_non_contrast, "hu_non_contrast")?;
        let growth = label(&self.growth, "growth")?;
        let heterogeneity = label(&self.heterogeneity, "heterogeneity")?;
        let bilateral = flag(&self.bilateral, "bilateral")?;
        let macroscopic_fat = flag(&self.macroscopic_fat, "macroscopic_fat")?;
        let cystic = flag(&self.cystic, "cystic")?;
        let calcification = flag(&self.calcification, "calcification")?;
        let flags = [bilateral, macroscopic_fat, cystic, calcification];

        let any_supplied = size_cm.is_some()
            || hu_non_contrast.is_some()
            || growth.is_some()
            || heterogeneity.is_some()
            || flags.iter().any(|f| *f == Some(true));
        if !any_supplied {
            return Ok(None);
        }

        let size_cm = size_cm.ok_or(ValidationError::PartialBlock {
            block: "ct",
            missing: "size_cm",
        })?;
        let hu_non_contrast = hu_non_contrast.ok_or(ValidationError::PartialBlock {
            block: "ct",
            missing: "hu_non_contrast",
        })?;
        if size_cm < 0.0 {
            return Err(ValidationError::Negative {
                field: "size_cm",
                value: size_cm,
            });
        }

        Ok(Some(CtFindings {
            size_cm,
            hu_non_contrast,
            growth: growth.map(str::parse::<Growth>).transpose()?.unwrap_or(Growth::None),
            bilateral: bilateral.unwrap_or(false),
            heterogeneous: heterogeneity
                .map(parse_heterogeneity)
                .transpose()?
                .unwrap_or(false),
            macroscopic_fat: macroscopic_fat.unwrap_or(false),
            cystic: cystic.unwrap_or(false),
            calcification: calcification.unwrap_or(false),
        }))
    }

    fn contrast_block(&self) -> Result<Option<ContrastPhases>, ValidationError> {
        match (
            number(&self.hu_venous, "hu_venous")?,
            number(&self.hu_delayed, "hu_delayed")?,
        ) {
            (None, None) => Ok(None),
            (Some(hu_venous), Some(hu_delayed)) => Ok(Some(ContrastPhases {
                hu_venous,
                hu_delayed,
            })),
            (None, Some(_)) => Err(ValidationError::PartialBlock {
                block: "contrast",
                missing: "hu_venous",
            }),
            (Some(_), None) => Err(ValidationError::PartialBlock {
                block: "contrast",
                missing: "hu_delayed",
            }),
        }
    }
}

impl TryFrom<ObservationForm> for ClinicalObservation {
    type Error = ValidationError;

    fn try_from(form: ObservationForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}

impl ClinicalObservation {
    /// Parse a JSON-encoded [`ObservationForm`] and validate it.
    pub fn from_form_json(json: &str) -> Result<Self, CoreError> {
        let form: ObservationForm = serde_json::from_str(json)?;
        Ok(form.validate()?)
    }
}
