//! Per-file processing with failure isolation.
//!
//! Each file moves through reading, checking and writing. Any fault is
//! caught here, turned into an error report and a `Failed` outcome, and the
//! batch carries on with the next file.

use std::path::{Path, PathBuf};

use tracing::{error, info, info_span, warn};

use atc_ingest::DiscoveredFile;
use atc_model::{ErrorReport, FileOutcome, FileStatus, Report, ValidationOptions};
use atc_report::{ReportPaths, write_error_report, write_report};
use atc_validate::{Stage, validate_path};

/// Outcome of one file together with the text of the report it produced.
#[derive(Debug, Clone)]
pub struct CheckedFile {
    pub outcome: FileOutcome,
    /// Rendered integrity or error report; `None` for unknown file types.
    pub rendered: Option<String>,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Check one file and persist its report.
pub fn check_file(file: &DiscoveredFile, options: &ValidationOptions) -> CheckedFile {
    let mut outcome = FileOutcome::ready(&file.path, file.schema);
    let Some(schema) = file.schema else {
        warn!(path = %file.path.display(), "unknown export type, skipped");
        return CheckedFile {
            outcome,
            rendered: None,
        };
    };

    let file_name = display_name(&file.path);
    let span = info_span!("file", file = %file_name, schema = %schema);
    let _guard = span.enter();

    let paths = ReportPaths::for_input(&file.path, options.reports_dir.as_deref());
    let report = validate_path(&file.path, schema, options);

    match (report, paths) {
        (Ok(report), Ok(paths)) => {
            outcome.findings = report.finding_count();
            let rendered = report.to_string();
            match persist_report(&report, &paths, options) {
                Ok(report_path) => {
                    outcome.status = FileStatus::Validated;
                    outcome.report_path = report_path;
                    info!(stage = %Stage::Done, findings = outcome.findings, "file checked");
                    CheckedFile {
                        outcome,
                        rendered: Some(rendered),
                    }
                }
                Err(err) => {
                    let cause = err.to_string();
                    fail(outcome, &file_name, Stage::Writing, cause, Some(&paths), options)
                }
            }
        }
        (Err(err), paths) => {
            let stage = err.stage();
            fail(outcome, &file_name, stage, err.to_string(), paths.ok().as_ref(), options)
        }
        (Ok(_), Err(err)) => fail(outcome, &file_name, Stage::Writing, err.to_string(), None, options),
    }
}

fn persist_report(
    report: &Report,
    paths: &ReportPaths,
    options: &ValidationOptions,
) -> atc_report::Result<Option<PathBuf>> {
    if options.dry_run {
        return Ok(None);
    }
    write_report(report, &paths.report)?;
    Ok(Some(paths.report.clone()))
}

/// Record a failure and write the error artifact when possible.
fn fail(
    mut outcome: FileOutcome,
    file_name: &str,
    stage: Stage,
    cause: String,
    paths: Option<&ReportPaths>,
    options: &ValidationOptions,
) -> CheckedFile {
    let error_report = ErrorReport {
        file_name: file_name.to_string(),
        message: stage.failure_message(file_name),
        cause,
    };
    error!(
        stage = %Stage::Failed,
        failed_in = %stage,
        cause = %error_report.cause,
        "{}",
        error_report.message
    );

    outcome.status = FileStatus::Failed;
    outcome.findings = 0;
    outcome.report_path = None;
    outcome.error = Some(format!("{}: {}", error_report.message, error_report.cause));

    if let Some(paths) = paths.filter(|_| !options.dry_run) {
        match write_error_report(&error_report, &paths.error) {
            Ok(()) => outcome.report_path = Some(paths.error.clone()),
            Err(err) => error!(path = %paths.error.display(), error = %err, "could not write error report"),
        }
    }

    CheckedFile {
        outcome,
        rendered: Some(error_report.to_string()),
    }
}

/// Check one file and return its outcome.
pub fn validate_file(file: &DiscoveredFile, options: &ValidationOptions) -> FileOutcome {
    check_file(file, options).outcome
}

/// Check files one at a time. A failing file never stops the batch.
pub fn run_batch(files: &[DiscoveredFile], options: &ValidationOptions) -> Vec<CheckedFile> {
    let span = info_span!("batch", files = files.len());
    let _guard = span.enter();
    let checked: Vec<CheckedFile> = files.iter().map(|file| check_file(file, options)).collect();
    let failed = checked
        .iter()
        .filter(|file| file.outcome.status == FileStatus::Failed)
        .count();
    info!(files = checked.len(), failed, "batch complete");
    checked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::LogBuffer;
    use crate::logging::{LogConfig, LogFormat, output_layer};
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn failure_event_names_failed_and_origin_stage() {
        let dir = tempfile::tempdir().unwrap();
        let file = DiscoveredFile::classify(dir.path().join("a_config.csv"));
        let options = ValidationOptions::default().with_dry_run(true);

        let buffer = LogBuffer::default();
        let sink = buffer.clone();
        let config = LogConfig::default().with_format(LogFormat::Json);
        let subscriber =
            tracing_subscriber::registry().with(output_layer(&config, move || sink.clone()));
        let checked = tracing::subscriber::with_default(subscriber, || check_file(&file, &options));

        assert_eq!(checked.outcome.status, FileStatus::Failed);
        let text = buffer.contents();
        assert!(text.contains("\"stage\":\"failed\""));
        assert!(text.contains("\"failed_in\":\"reading\""));
        assert!(text.contains("Could not read file a_config.csv"));
    }
}
