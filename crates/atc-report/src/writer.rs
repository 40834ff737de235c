//! Report persistence.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use atc_model::{ErrorReport, Report};

use crate::error::{ReportError, Result};

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "artifact written");
    Ok(())
}

/// Write the integrity report, one report line per text line.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    write_text(path, &report.to_string())?;
    info!(
        file = %report.file_name,
        path = %path.display(),
        findings = report.finding_count(),
        "integrity report written"
    );
    Ok(())
}

/// Write the artifact for a file that could not be checked.
pub fn write_error_report(report: &ErrorReport, path: &Path) -> Result<()> {
    write_text(path, &report.to_string())?;
    info!(file = %report.file_name, path = %path.display(), "error report written");
    Ok(())
}
