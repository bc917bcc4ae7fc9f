//! adrenal-core
//!
//! Pure domain types for adrenal-mass assessment: the validated observation
//! record, the raw entry form it is built from, and the findings and
//! conclusion produced by the rules engine. No I/O.

pub mod error;
pub mod models;

pub use error::{CoreError, ValidationError};
pub use models::assessment::Assessment;
pub use models::finding::{Conclusion, Finding};
pub use models::form::{FormValue, ObservationForm};
pub use models::observation::{ClinicalObservation, ContrastPhases, CtFindings, Growth, Referral};
