//! Per-schema validation pipeline.
//!
//! Each schema is described by a [`SchemaPipeline`]: its header, the number
//! of fields a row must carry, and the ordered list of checks to run. Checks
//! share one working line sequence; filters shrink it, the others only read
//! it. Every check may append one section to the report.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, info_span};

use atc_ingest::read_lines;
use atc_model::{Line, Report, SECTOR_CODES, Schema, Section, ValidationOptions};

use crate::checks::time_slots::{self, MINUTES_PER_DAY, TimeSlotMap};
use crate::checks::{blank, consistency, field_count, fields, header, line_count};
use crate::error::Result;

/// Where a file is in its validation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Reading,
    Filtering,
    SchemaChecks,
    Assembling,
    Writing,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Reading => "reading",
            Stage::Filtering => "filtering",
            Stage::SchemaChecks => "schema checks",
            Stage::Assembling => "assembling",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }

    /// Message for the error report of a file that failed in this stage.
    pub fn failure_message(&self, file_name: &str) -> String {
        match self {
            Stage::Reading => format!("Could not read file {file_name}"),
            Stage::Writing => format!("Could not write integrity report for {file_name}"),
            _ => format!("Could not process file {file_name}"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a schema pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Header,
    FieldCount,
    BlankField,
    LineCount { expected: usize },
    MissingSlots,
    DuplicateSlots,
    OverflowSlots { capacity: usize },
    ControllerCount,
    AssistantCount,
    InvalidField,
}

impl Check {
    pub fn stage(&self) -> Stage {
        match self {
            Check::Header | Check::FieldCount | Check::BlankField => Stage::Filtering,
            _ => Stage::SchemaChecks,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Check::Header => "header",
            Check::FieldCount => "field_count",
            Check::BlankField => "blank_field",
            Check::LineCount { .. } => "line_count",
            Check::MissingSlots => "missing_slots",
            Check::DuplicateSlots => "duplicate_slots",
            Check::OverflowSlots { .. } => "overflow_slots",
            Check::ControllerCount => "controller_count",
            Check::AssistantCount => "assistant_count",
            Check::InvalidField => "invalid_field",
        }
    }
}

/// Schema descriptor driving the shared check functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPipeline {
    pub schema: Schema,
    pub header: &'static str,
    pub expected_field_count: usize,
    pub checks: Vec<Check>,
}

impl SchemaPipeline {
    pub fn for_schema(schema: Schema) -> Self {
        let checks = match schema {
            Schema::DailyConfig => vec![
                Check::Header,
                Check::FieldCount,
                Check::BlankField,
                Check::LineCount {
                    expected: MINUTES_PER_DAY,
                },
                Check::MissingSlots,
                Check::DuplicateSlots,
            ],
            Schema::SectorConfig => vec![
                Check::Header,
                Check::FieldCount,
                Check::BlankField,
                Check::MissingSlots,
                Check::OverflowSlots {
                    capacity: SECTOR_CODES.len(),
                },
                Check::ControllerCount,
                Check::AssistantCount,
            ],
            Schema::FlightRecord => vec![Check::Header, Check::FieldCount, Check::InvalidField],
        };
        Self {
            schema,
            header: schema.header(),
            expected_field_count: schema.expected_field_count(),
            checks,
        }
    }

    /// Run every check in order over `lines`.
    pub fn run(&self, lines: Vec<Line>, options: &ValidationOptions) -> Result<Vec<Section>> {
        let mut state = PipelineState {
            lines,
            slots: None,
            sections: Vec::new(),
        };
        for check in &self.checks {
            let before = state.lines.len();
            self.apply(*check, &mut state, options)?;
            debug!(
                check = check.name(),
                stage = %check.stage(),
                before,
                after = state.lines.len(),
                "check complete"
            );
        }
        Ok(state.sections)
    }

    fn apply(
        &self,
        check: Check,
        state: &mut PipelineState,
        options: &ValidationOptions,
    ) -> Result<()> {
        let detail = options.detail;
        match check {
            Check::Header => {
                let partition = header::locate(state.take_lines(), self.header);
                if partition.removed.is_empty() {
                    debug!(schema = %self.schema, "header not found");
                }
                state.lines = partition.kept;
                state.push(header::section(&partition.removed, detail));
            }
            Check::FieldCount => {
                let partition = field_count::filter(state.take_lines(), self.expected_field_count);
                state.lines = partition.kept;
                state.push(field_count::section(&partition.removed, detail));
            }
            Check::BlankField => {
                let partition = blank::filter(state.take_lines());
                state.lines = partition.kept;
                state.push(blank::section(&partition.removed, detail));
            }
            Check::LineCount { expected } => {
                let found = state.lines.len();
                state.push(line_count::section(found, expected, detail));
            }
            Check::MissingSlots => {
                let section = time_slots::missing_section(state.slots()?, detail);
                state.push(section);
            }
            Check::DuplicateSlots => {
                let section = time_slots::duplicate_section(state.slots()?, detail);
                state.push(section);
            }
            Check::OverflowSlots { capacity } => {
                let section = time_slots::overflow_section(state.slots()?, capacity, detail);
                state.push(section);
            }
            Check::ControllerCount => {
                let partition =
                    consistency::controller_counts(state.take_lines(), options.remove_inconsistencies);
                state.lines = partition.kept;
                state.push(consistency::controller_section(&partition.removed, detail));
            }
            Check::AssistantCount => {
                let partition =
                    consistency::assistant_counts(state.take_lines(), options.remove_inconsistencies);
                state.lines = partition.kept;
                state.push(consistency::assistant_section(&partition.removed, detail));
            }
            Check::InvalidField => {
                let invalid = fields::check(&state.lines, self.expected_field_count);
                state.push(fields::section(&invalid, detail));
            }
        }
        Ok(())
    }
}

struct PipelineState {
    lines: Vec<Line>,
    /// Slot map of the current `lines`; dropped whenever they change.
    slots: Option<TimeSlotMap>,
    sections: Vec<Section>,
}

impl PipelineState {
    fn take_lines(&mut self) -> Vec<Line> {
        self.slots = None;
        std::mem::take(&mut self.lines)
    }

    fn slots(&mut self) -> Result<&TimeSlotMap> {
        let map = match self.slots.take() {
            Some(map) => map,
            None => TimeSlotMap::build(&self.lines)?,
        };
        Ok(self.slots.insert(map))
    }

    fn push(&mut self, section: Option<Section>) {
        self.sections.extend(section);
    }
}

/// Validate already-read lines and assemble the integrity report.
pub fn validate_lines(
    schema: Schema,
    file_name: &str,
    lines: Vec<Line>,
    options: &ValidationOptions,
) -> Result<Report> {
    let span = info_span!("validate", file = file_name, schema = %schema);
    let _guard = span.enter();

    let line_count = lines.len();
    let sections = SchemaPipeline::for_schema(schema).run(lines, options)?;

    debug!(stage = %Stage::Assembling, sections = sections.len(), "assembling report");
    let mut report = Report::new(file_name);
    report.extend(sections);
    info!(
        lines = line_count,
        findings = report.finding_count(),
        clean = report.is_clean(),
        "validation complete"
    );
    Ok(report)
}

/// Read `path` and validate it as `schema`.
pub fn validate_path(path: &Path, schema: Schema, options: &ValidationOptions) -> Result<Report> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(stage = %Stage::Reading, path = %path.display(), "reading export");
    let lines = read_lines(path)?;
    validate_lines(schema, &file_name, lines, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::lines;

    #[test]
    fn pipeline_orders() {
        let daily = SchemaPipeline::for_schema(Schema::DailyConfig);
        assert_eq!(daily.expected_field_count, 8);
        assert_eq!(
            daily.checks.iter().map(Check::name).collect::<Vec<_>>(),
            vec![
                "header",
                "field_count",
                "blank_field",
                "line_count",
                "missing_slots",
                "duplicate_slots"
            ]
        );

        let sector = SchemaPipeline::for_schema(Schema::SectorConfig);
        assert!(sector.checks.contains(&Check::OverflowSlots { capacity: 20 }));
        assert_eq!(sector.checks.last(), Some(&Check::AssistantCount));

        let flights = SchemaPipeline::for_schema(Schema::FlightRecord);
        assert_eq!(
            flights.checks,
            vec![Check::Header, Check::FieldCount, Check::InvalidField]
        );
    }

    #[test]
    fn failure_messages_by_stage() {
        assert_eq!(
            Stage::Reading.failure_message("a_config.csv"),
            "Could not read file a_config.csv"
        );
        assert_eq!(
            Stage::SchemaChecks.failure_message("a_config.csv"),
            "Could not process file a_config.csv"
        );
        assert_eq!(
            Stage::Writing.failure_message("a_config.csv"),
            "Could not write integrity report for a_config.csv"
        );
    }

    #[test]
    fn filtered_lines_never_reach_time_slots() {
        // the malformed time sits on a short row, removed before slots are built
        let input = lines(&[
            Schema::DailyConfig.header(),
            "1;2;00:00:00;\"5.12.2\";5;2;12;A",
            "1;2;bad",
        ]);
        let report = validate_lines(
            Schema::DailyConfig,
            "x_config.csv",
            input,
            &ValidationOptions::default(),
        )
        .unwrap();
        assert!(report.section(field_count::TITLE).is_some());
        assert!(report.section(time_slots::MISSING_TITLE).is_some());
    }
}
