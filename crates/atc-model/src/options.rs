//! Configuration options for integrity checks.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options controlling how a file is checked and where its report goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Emit a status section for every check, even when it found nothing.
    pub detail: bool,

    /// Exclude rows that fail a cross-field consistency check from the
    /// checks that follow it.
    ///
    /// Off by default: inconsistent rows are reported but stay in the
    /// working sequence.
    pub remove_inconsistencies: bool,

    /// Directory that receives reports. When unset, reports go to a
    /// `reports` directory next to each input file.
    pub reports_dir: Option<PathBuf>,

    /// Run the checks without writing any report artifact.
    pub dry_run: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail(mut self, enable: bool) -> Self {
        self.detail = enable;
        self
    }

    pub fn with_remove_inconsistencies(mut self, enable: bool) -> Self {
        self.remove_inconsistencies = enable;
        self
    }

    pub fn with_reports_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.reports_dir = dir;
        self
    }

    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}
