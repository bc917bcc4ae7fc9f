//! adrenal-rules
//!
//! The adrenal-mass rules engine. A fixed, ordered rule table is evaluated
//! against a validated [`ClinicalObservation`]; the resulting findings are
//! then reduced to one conclusion. Everything here is pure and stateless.

pub mod error;
pub mod facts;
pub mod resolve;
pub mod table;
pub mod washout;

use adrenal_core::{Assessment, ClinicalObservation, Finding};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use facts::Facts;
pub use resolve::{rank, resolve};
pub use table::{rule_table, Rule, Template};

/// Evaluate every rule in table order.
///
/// Findings sharing a text are emitted once, at the position of the first,
/// carrying the highest importance among them.
pub fn evaluate(obs: &ClinicalObservation) -> Vec<Finding> {
    let facts = Facts::from_observation(obs);
    let mut findings: Vec<Finding> = Vec::new();

    for rule in rule_table() {
        if !rule.applies(&facts) {
            continue;
        }
        let Some(text) = rule.template.render(&facts) else {
            continue;
        };
        debug!(rule = rule.id, importance = rule.importance, "rule fired");

        match findings.iter_mut().find(|f| f.text == text) {
            Some(existing) => existing.importance = existing.importance.max(rule.importance),
            None => findings.push(Finding::new(text, rule.importance)),
        }
    }
    findings
}

/// Evaluate and resolve in one step.
pub fn assess(obs: &ClinicalObservation) -> Assessment {
    let findings = evaluate(obs);
    let conclusion = resolve(&findings);
    info!(
        findings = findings.len(),
        conclusion = %conclusion.text,
        importance = conclusion.importance,
        "assessment complete"
    );
    Assessment {
        findings,
        conclusion,
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RuleSummary {
    pub id: String,
    pub importance: u32,
    pub template: String,
}

/// The rule table in a shape fit for listing.
pub fn rule_summaries() -> Vec<RuleSummary> {
    rule_table()
        .iter()
        .map(|r| RuleSummary {
            id: r.id.to_string(),
            importance: r.importance,
            template: r.template.to_string(),
        })
        .collect()
}
