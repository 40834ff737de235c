use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Schema;

/// Processing status of one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Classified and waiting to be checked.
    Ready,
    /// Checked; an integrity report was produced.
    Validated,
    /// Reading, parsing or writing failed; an error report was produced.
    Failed,
    /// The filename suffix matches no schema.
    UnknownType,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Ready => "Ready",
            FileStatus::Validated => "Validated",
            FileStatus::Failed => "Failed",
            FileStatus::UnknownType => "Unknown type",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of checking one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub schema: Option<Schema>,
    pub status: FileStatus,
    /// Where the integrity or error report was written, if anywhere.
    pub report_path: Option<PathBuf>,
    /// Number of report sections that carry defects.
    pub findings: usize,
    /// Failure message when `status` is `Failed`.
    pub error: Option<String>,
}

impl FileOutcome {
    /// Outcome of a file that has been classified but not processed.
    pub fn ready(path: impl Into<PathBuf>, schema: Option<Schema>) -> Self {
        let status = if schema.is_some() {
            FileStatus::Ready
        } else {
            FileStatus::UnknownType
        };
        Self {
            path: path.into(),
            schema,
            status,
            report_path: None,
            findings: 0,
            error: None,
        }
    }

    /// True when the file was validated. Findings do not count as failure.
    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Validated
    }
}
