//! CLI library components for the ATC export integrity checker.

pub mod logging;
pub mod pipeline;

pub use pipeline::{CheckedFile, check_file, run_batch, validate_file};
