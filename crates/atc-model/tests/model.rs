//! Tests for atc-model types.

use atc_model::{FileStatus, Line, Report, Schema, Section, ValidationOptions, split_fields};

#[test]
fn every_header_splits_to_its_expected_count() {
    for schema in Schema::ALL {
        assert_eq!(
            split_fields(schema.header()).len(),
            schema.expected_field_count()
        );
        let header = Line::new(1, schema.header()).expect("valid line");
        assert_eq!(header.field_count(), schema.expected_field_count());
    }
}

#[test]
fn every_suffix_classifies_to_its_schema() {
    for schema in Schema::ALL {
        let name = format!("20240315{}", schema.suffix());
        assert_eq!(Schema::from_file_name(&name), Some(schema));
    }
}

#[test]
fn report_renders_sections_in_order() {
    let mut report = Report::new("20240315_config.csv");
    let mut blank = Section::findings("BLANK FIELD");
    blank.push("Line    4 - 11;3;00:02:00;\"5.10.2\";5;2; ;A");
    blank.push("Filtered: 1");
    report.push(blank);
    report.push(Section::status("DUPLICATE TIME SLOT", "No duplicate time slots"));

    let text = report.to_string();
    let expected = "INTEGRITY REPORT\n\
                    20240315_config.csv\n\
                    \n\
                    BLANK FIELD\n\
                    \tLine    4 - 11;3;00:02:00;\"5.10.2\";5;2; ;A\n\
                    \tFiltered: 1\n\
                    \n\
                    DUPLICATE TIME SLOT\n\
                    \tNo duplicate time slots\n";
    assert_eq!(text, expected);
    assert_eq!(report.finding_count(), 1);
}

#[test]
fn options_builder_and_defaults() {
    let defaults = ValidationOptions::default();
    assert!(!defaults.detail);
    assert!(!defaults.remove_inconsistencies);
    assert!(defaults.reports_dir.is_none());

    let options = ValidationOptions::new()
        .with_detail(true)
        .with_remove_inconsistencies(true)
        .with_reports_dir(Some("out".into()));
    assert!(options.detail);
    assert!(options.remove_inconsistencies);
    assert_eq!(options.reports_dir.as_deref(), Some(std::path::Path::new("out")));
}

#[test]
fn status_labels() {
    assert_eq!(FileStatus::UnknownType.to_string(), "Unknown type");
    assert_eq!(FileStatus::Validated.to_string(), "Validated");
}
