use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// A washout ratio whose denominator is zero. Recovered by omitting the
    /// findings that depend on it.
    #[error("{metric} washout is undefined: {reason}")]
    UndefinedComputation {
        metric: &'static str,
        reason: &'static str,
    },
}
