//! Contrast washout arithmetic.
//!
//! Both ratios are returned as percentages and may be negative when the
//! delayed phase enhances more than the venous phase.

use crate::error::RuleError;

/// `(venous - delayed) / (venous - non_contrast) * 100`.
pub fn absolute_washout(non_contrast: f64, venous: f64, delayed: f64) -> Result<f64, RuleError> {
    let enhancement = venous - non_contrast;
    if enhancement == 0.0 {
        return Err(RuleError::UndefinedComputation {
            metric: "absolute",
            reason: "venous HU equals non-contrast HU",
        });
    }
    Ok((venous - delayed) / enhancement * 100.0)
}

/// `(venous - delayed) / venous * 100`.
pub fn relative_washout(venous: f64, delayed: f64) -> Result<f64, RuleError> {
    if venous == 0.0 {
        return Err(RuleError::UndefinedComputation {
            metric: "relative",
            reason: "venous HU is zero",
        });
    }
    Ok((venous - delayed) / venous * 100.0)
}

/// All three phases plus whichever ratios are defined for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Washout {
    pub hu_non_contrast: f64,
    pub hu_venous: f64,
    pub hu_delayed: f64,
    pub absolute: Option<f64>,
    pub relative: Option<f64>,
}

impl Washout {
    pub fn measure(hu_non_contrast: f64, hu_venous: f64, hu_delayed: f64) -> Self {
        let absolute = absolute_washout(hu_non_contrast, hu_venous, hu_delayed)
            .inspect_err(|e| tracing::debug!(error = %e, "absolute washout omitted"))
            .ok();
        let relative = relative_washout(hu_venous, hu_delayed)
            .inspect_err(|e| tracing::debug!(error = %e, "relative washout omitted"))
            .ok();
        Self {
            hu_non_contrast,
            hu_venous,
            hu_delayed,
            absolute,
            relative,
        }
    }

    /// Spread between the highest and lowest of the three phases.
    pub fn spread(&self) -> f64 {
        let phases = [self.hu_non_contrast, self.hu_venous, self.hu_delayed];
        let max = phases.iter().copied().fold(f64::MIN, f64::max);
        let min = phases.iter().copied().fold(f64::MAX, f64::min);
        max - min
    }
}
