//! adrenal-cli
//!
//! Command-line shell around the rules engine: config handling, input
//! parsing and report output. No clinical logic lives here.

pub mod config;
pub mod input;
pub mod logging;
