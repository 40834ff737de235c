//! Artifact locations.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Directory created next to the input when no reports directory is given.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

const REPORT_EXTENSION: &str = "txt";
const ERROR_SUFFIX: &str = "-ERROR";

/// Where the integrity report and the error artifact of one input go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub error: PathBuf,
}

impl ReportPaths {
    /// `<dir>/<stem>.txt` and `<dir>/<stem>-ERROR.txt`, where `dir` is
    /// `reports_dir` or the `reports` sibling of the input.
    pub fn for_input(input: &Path, reports_dir: Option<&Path>) -> Result<Self> {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| ReportError::NoFileName {
                path: input.to_path_buf(),
            })?;
        let dir = match reports_dir {
            Some(dir) => dir.to_path_buf(),
            None => input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_REPORTS_DIR),
        };
        Ok(Self {
            report: dir.join(format!("{stem}.{REPORT_EXTENSION}")),
            error: dir.join(format!("{stem}{ERROR_SUFFIX}.{REPORT_EXTENSION}")),
        })
    }

    pub fn dir(&self) -> Option<&Path> {
        self.report.parent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sibling_reports_dir() {
        let paths =
            ReportPaths::for_input(Path::new("/data/20240310_config.csv"), None).unwrap();
        assert_eq!(
            paths.report,
            PathBuf::from("/data/reports/20240310_config.txt")
        );
        assert_eq!(
            paths.error,
            PathBuf::from("/data/reports/20240310_config-ERROR.txt")
        );
        assert_eq!(paths.dir(), Some(Path::new("/data/reports")));
    }

    #[test]
    fn honors_override() {
        let paths = ReportPaths::for_input(
            Path::new("/data/20240310_flights.csv"),
            Some(Path::new("/out")),
        )
        .unwrap();
        assert_eq!(paths.report, PathBuf::from("/out/20240310_flights.txt"));
    }

    #[test]
    fn bare_file_name_uses_relative_dir() {
        let paths = ReportPaths::for_input(Path::new("a_config.csv"), None).unwrap();
        assert_eq!(paths.report, PathBuf::from("reports/a_config.txt"));
    }

    #[test]
    fn rejects_path_without_file_name() {
        let err = ReportPaths::for_input(Path::new("/"), None).unwrap_err();
        assert!(matches!(err, ReportError::NoFileName { .. }));
    }
}
