use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::finding::{Conclusion, Finding};

/// Output of one evaluation request: every finding in rule order plus the
/// conclusion drawn from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub findings: Vec<Finding>,
    pub conclusion: Conclusion,
}
