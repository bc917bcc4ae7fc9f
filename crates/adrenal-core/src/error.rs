use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid observation: {0}")]
    Validation(#[from] ValidationError),
}

/// Reasons a raw [`ObservationForm`](crate::ObservationForm) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("age {age} is outside range [0, 120]")]
    AgeOutOfRange { age: f64 },

    #[error("age {age} is not a whole number of years")]
    AgeNotWhole { age: f64 },

    #[error("{field}: '{value}' is not a number")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a checkbox value (true/false)")]
    NotBoolean { field: &'static str, value: String },

    #[error("{field}: {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    #[error("{block} block is incomplete: missing {missing}")]
    PartialBlock {
        block: &'static str,
        missing: &'static str,
    },

    #[error("{field}: unknown option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}
