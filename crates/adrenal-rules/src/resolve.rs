use adrenal_core::{Conclusion, Finding};

/// Findings ordered by descending importance. The sort is stable, so equally
/// important findings keep their evaluation order.
pub fn rank(findings: &[Finding]) -> Vec<Finding> {
    let mut ranked = findings.to_vec();
    ranked.sort_by(|a, b| b.importance.cmp(&a.importance));
    ranked
}

/// Pick the single most important finding as the conclusion.
///
/// Ties go to the finding evaluated first. An empty input yields
/// [`Conclusion::none`].
pub fn resolve(findings: &[Finding]) -> Conclusion {
    rank(findings)
        .into_iter()
        .next()
        .map(Conclusion::from)
        .unwrap_or_else(Conclusion::none)
}
