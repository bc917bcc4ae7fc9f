use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One annotated finding. `importance` is a fixed per-rule priority weight
/// used only for ordering, not a probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub text: String,
    pub importance: u32,
}

impl Finding {
    pub fn new(text: impl Into<String>, importance: u32) -> Self {
        Self {
            text: text.into(),
            importance,
        }
    }
}

/// The single finding selected as the final conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Conclusion {
    pub text: String,
    pub importance: u32,
}

impl Conclusion {
    pub const NO_CONCLUSION: &'static str = "No conclusion based on current inputs.";

    /// Sentinel returned when there is nothing to conclude from.
    pub fn none() -> Self {
        Self {
            text: Self::NO_CONCLUSION.to_string(),
            importance: 0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.importance == 0 && self.text == Self::NO_CONCLUSION
    }
}

impl From<Finding> for Conclusion {
    fn from(finding: Finding) -> Self {
        Self {
            text: finding.text,
            importance: finding.importance,
        }
    }
}
