//! Error types for the validation pipeline.
//!
//! Only faults that stop a file from being checked are errors. Defects in
//! the data are findings and end up in the report.

use thiserror::Error;

use atc_ingest::IngestError;

use crate::pipeline::Stage;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The export could not be read.
    #[error(transparent)]
    Read(#[from] IngestError),

    /// A time field is not a valid `HH:MM[:SS[.fff]]` time of day.
    #[error("line {address}: invalid time '{value}': expected HH:MM:SS")]
    TimeParse { address: usize, value: String },
}

impl ValidationError {
    /// Pipeline stage the error aborted.
    pub fn stage(&self) -> Stage {
        match self {
            ValidationError::Read(_) => Stage::Reading,
            ValidationError::TimeParse { .. } => Stage::SchemaChecks,
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn read_errors_belong_to_reading_stage() {
        let err: ValidationError = IngestError::FileNotFound {
            path: PathBuf::from("a_config.csv"),
        }
        .into();
        assert_eq!(err.stage(), Stage::Reading);
        assert_eq!(err.to_string(), "file not found: a_config.csv");
    }

    #[test]
    fn time_parse_message_names_line() {
        let err = ValidationError::TimeParse {
            address: 12,
            value: "25:00:00".to_string(),
        };
        assert_eq!(err.stage(), Stage::SchemaChecks);
        assert!(err.to_string().starts_with("line 12: invalid time '25:00:00'"));
    }
}
