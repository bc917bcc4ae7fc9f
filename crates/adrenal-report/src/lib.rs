//! adrenal-report
//!
//! Markdown and JSON rendering of assessments for display shells.

pub mod error;
pub mod render;

pub use error::ReportError;
pub use render::{render, render_markdown, ReportFormat};
