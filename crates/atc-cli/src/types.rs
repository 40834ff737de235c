use serde::Serialize;

use atc_model::{FileOutcome, FileStatus};

/// Result of a `check` run over every input file.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub files: Vec<FileOutcome>,
    pub validated: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl BatchResult {
    pub fn new(files: Vec<FileOutcome>) -> Self {
        let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();
        let validated = count(FileStatus::Validated);
        let failed = count(FileStatus::Failed);
        let unknown = count(FileStatus::UnknownType);
        Self {
            files,
            validated,
            failed,
            unknown,
        }
    }

    /// True when at least one file could not be checked or written.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
