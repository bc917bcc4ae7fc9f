pub mod assessment;
pub mod finding;
pub mod form;
pub mod observation;
