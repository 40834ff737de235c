//! File discovery and schema classification.

use std::path::{Path, PathBuf};

use tracing::debug;

use atc_model::Schema;

use crate::error::{IngestError, Result};

/// An export file with its schema classification.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path to the export file.
    pub path: PathBuf,
    /// Schema selected by filename suffix, `None` when no suffix matches.
    pub schema: Option<Schema>,
}

impl DiscoveredFile {
    pub fn classify(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let schema = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(Schema::from_file_name);
        Self { path, schema }
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Lists and classifies all CSV files in a directory.
pub fn discover_files(dir: &Path) -> Result<Vec<DiscoveredFile>> {
    let files = list_csv_files(dir)?;
    let discovered: Vec<DiscoveredFile> = files.into_iter().map(DiscoveredFile::classify).collect();
    debug!(
        dir = %dir.display(),
        file_count = discovered.len(),
        classified = discovered.iter().filter(|f| f.schema.is_some()).count(),
        "discovered export files"
    );
    Ok(discovered)
}

/// Expand command line inputs: directories become the CSV files they contain,
/// anything else is taken as a file path as given. Order is preserved.
///
/// A file path that does not exist is still returned so that the pipeline can
/// report it as a read failure.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(discover_files(input)?);
        } else {
            files.push(DiscoveredFile::classify(input.clone()));
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &[
            "20240101_config.csv",
            "20240101_sect_config.csv",
            "20240101_flights.CSV",
            "README.csv",
            "notes.txt",
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, "header\ndata").unwrap();
        }
        std::fs::create_dir(dir.path().join("reports.csv")).unwrap();

        dir
    }

    #[test]
    fn test_list_csv_files() {
        let dir = create_test_dir();
        let files = list_csv_files(dir.path()).unwrap();

        // notes.txt and the directory are skipped
        assert_eq!(files.len(), 4);
        assert!(
            files[0]
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("20240101_config")
        );
    }

    #[test]
    fn test_discover_files() {
        let dir = create_test_dir();
        let discovered = discover_files(dir.path()).unwrap();

        let schemas: Vec<Option<Schema>> = discovered.iter().map(|f| f.schema).collect();
        assert_eq!(
            schemas,
            vec![
                Some(Schema::DailyConfig),
                Some(Schema::FlightRecord),
                Some(Schema::SectorConfig),
                None,
            ]
        );
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        assert!(matches!(
            list_csv_files(&missing),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
