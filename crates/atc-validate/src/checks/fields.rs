//! Per-field format contracts for flight records.
//!
//! Each row is checked field by field against a fixed table of patterns.
//! Failures become `|label: value|` tokens in field order. The check never
//! removes rows.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use atc_model::{Line, Section, is_blank_field};

pub const TITLE: &str = "INVALID FIELD";

/// Length of the `YYYY-MM-DD` prefix of the timestamp field.
const DATE_LEN: usize = 10;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("Invalid date regex")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").expect("Invalid time regex")
});

static CONFIG_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"([2-9]|1[0-8])\.[0-9]{1,5}\.([0-9]|1[0-8])"$"#)
        .expect("Invalid config_id regex")
});

static CTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"CTR([01][0-9]|2[01])"$"#).expect("Invalid CTR regex"));

static ASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(ASS([01][0-9]|2[01]))?"$"#).expect("Invalid ASS regex"));

static SECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"(S0[1-9]|S1[0-8]|S6F|18F)"$"#).expect("Invalid sector regex")
});

static SECTOR_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9]|1[0-8])$").expect("Invalid sector count regex"));

static ASSISTANT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]|1[0-8])$").expect("Invalid assistant count regex"));

static CALLSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,7}$").expect("Invalid callsign regex"));

static AERODROME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[A-Z0-9]{2}$").expect("Invalid aerodrome regex"));

static DOF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid DOF regex"));

static EOBT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3])[0-5][0-9]$").expect("Invalid EOBT regex")
});

static SSR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A[0-7]{4}$").expect("Invalid SSR regex"));

static FLIGHT_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(I|V|Y|Z)$").expect("Invalid flight rule regex"));

/// Contract for one field of a flight record.
struct FieldRule {
    index: usize,
    label: &'static str,
    pattern: &'static LazyLock<Regex>,
    optional: bool,
}

const fn rule(index: usize, label: &'static str, pattern: &'static LazyLock<Regex>) -> FieldRule {
    FieldRule {
        index,
        label,
        pattern,
        optional: false,
    }
}

/// Fields after the timestamp. Index 2 (`sect_config`) is not validated.
static FIELD_RULES: [FieldRule; 13] = [
    rule(1, "config_id", &CONFIG_ID_RE),
    rule(3, "CTR", &CTR_RE),
    rule(4, "ASS", &ASS_RE),
    rule(5, "sector", &SECTOR_RE),
    rule(6, "sector_count", &SECTOR_COUNT_RE),
    rule(7, "assistant_count", &ASSISTANT_COUNT_RE),
    rule(8, "callsign", &CALLSIGN_RE),
    rule(9, "ADEP", &AERODROME_RE),
    rule(10, "ADES", &AERODROME_RE),
    rule(11, "DOF", &DOF_RE),
    FieldRule {
        index: 12,
        label: "EOBT",
        pattern: &EOBT_RE,
        optional: true,
    },
    rule(13, "SSR", &SSR_RE),
    rule(14, "flrul", &FLIGHT_RULE_RE),
];

/// One failed field contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not match the field's pattern.
    Invalid { label: &'static str, value: String },
    /// A mandatory field is empty or whitespace.
    Empty { label: &'static str },
    /// The row does not have the expected number of fields.
    FieldCount { expected: usize, found: usize },
}

impl FieldError {
    pub fn label(&self) -> &'static str {
        match self {
            FieldError::Invalid { label, .. } | FieldError::Empty { label } => label,
            FieldError::FieldCount { .. } => "field count",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Invalid { label, value } => write!(f, "|{label}: {value}|"),
            FieldError::Empty { label } => write!(f, "|{label}: empty field|"),
            FieldError::FieldCount { expected, found } => {
                write!(f, "|field count: expected {expected}, found {found}|")
            }
        }
    }
}

fn check_value(
    label: &'static str,
    value: &str,
    pattern: &Regex,
    optional: bool,
) -> Option<FieldError> {
    if is_blank_field(value) {
        return (!optional).then_some(FieldError::Empty { label });
    }
    (!pattern.is_match(value)).then(|| FieldError::Invalid {
        label,
        value: value.to_string(),
    })
}

/// Split the timestamp into its date (first ten characters) and time (the
/// rest, minus one leading space or `T`).
fn split_timestamp(timestamp: &str) -> (&str, &str) {
    match (timestamp.get(..DATE_LEN), timestamp.get(DATE_LEN..)) {
        (Some(date), Some(rest)) => {
            let time = rest
                .strip_prefix(' ')
                .or_else(|| rest.strip_prefix('T'))
                .unwrap_or(rest);
            (date, time)
        }
        _ => (timestamp, ""),
    }
}

/// Check every field contract of one row.
///
/// A row with the wrong number of fields yields a single field-count error
/// and no per-field checks.
pub fn validate_row(line: &Line, expected_fields: usize) -> Vec<FieldError> {
    let fields = line.fields();
    if fields.len() != expected_fields {
        return vec![FieldError::FieldCount {
            expected: expected_fields,
            found: fields.len(),
        }];
    }

    let (date, time) = split_timestamp(fields[0]);
    let mut errors = Vec::new();
    errors.extend(check_value("date", date, &DATE_RE, false));
    errors.extend(check_value("time", time, &TIME_RE, false));
    for rule in &FIELD_RULES {
        let value = fields.get(rule.index).copied().unwrap_or_default();
        errors.extend(check_value(rule.label, value, rule.pattern, rule.optional));
    }
    errors
}

/// A row that failed at least one field contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    pub line: Line,
    pub errors: Vec<FieldError>,
}

impl InvalidRow {
    /// The concatenated `|label: value|` tokens.
    pub fn tokens(&self) -> String {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for InvalidRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {:4} - {} - {}",
            self.line.address(),
            self.tokens(),
            self.line.content()
        )
    }
}

/// Rows with at least one failed contract, in input order.
pub fn check(lines: &[Line], expected_fields: usize) -> Vec<InvalidRow> {
    lines
        .iter()
        .filter_map(|line| {
            let errors = validate_row(line, expected_fields);
            (!errors.is_empty()).then(|| InvalidRow {
                line: line.clone(),
                errors,
            })
        })
        .collect()
}

pub fn section(invalid: &[InvalidRow], detail: bool) -> Option<Section> {
    if invalid.is_empty() {
        return detail.then(|| Section::status(TITLE, "No rows with errors"));
    }
    let mut section = Section::findings(TITLE);
    for row in invalid {
        section.push(row.to_string());
    }
    section.push(format!("Invalid: {}", invalid.len()));
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::lines;

    const FIELDS: usize = 15;
    const VALID: &str = "2024-01-01 13:07:00;\"5.123.2\";SC01;\"CTR03\";\"ASS01\";\"S6F\";5;2;TAP123;LPPT;EGLL;240101;1305;A1234;I;";

    fn with_field(index: usize, value: &str) -> String {
        let mut fields: Vec<&str> = VALID.split(';').collect();
        fields[index] = value;
        fields.join(";")
    }

    fn labels(content: &str) -> Vec<&'static str> {
        let line = Line::new(1, content).unwrap();
        validate_row(&line, FIELDS)
            .iter()
            .map(FieldError::label)
            .collect()
    }

    #[test]
    fn valid_row_has_no_errors() {
        assert!(labels(VALID).is_empty());
        assert!(labels(&with_field(0, "2024-01-01T13:07:00")).is_empty());
        assert!(labels(&with_field(4, "\"\"")).is_empty());
        assert!(labels(&with_field(12, "")).is_empty());
    }

    #[test]
    fn each_field_reports_its_own_label() {
        let cases = [
            (0, "2024-13-01 13:07:00", "date"),
            (0, "2024-01-01 24:00:00", "time"),
            (1, "\"1.123.2\"", "config_id"),
            (1, "\"5x123.2\"", "config_id"),
            (3, "\"CTR22\"", "CTR"),
            (4, "\"ASS22\"", "ASS"),
            (5, "\"S19\"", "sector"),
            (6, "19", "sector_count"),
            (7, "19", "assistant_count"),
            (8, "TP1", "callsign"),
            (9, "lppt", "ADEP"),
            (10, "EG-L", "ADES"),
            (11, "24011", "DOF"),
            (12, "2400", "EOBT"),
            (13, "A1238", "SSR"),
            (14, "X", "flrul"),
        ];
        for (index, value, label) in cases {
            assert_eq!(labels(&with_field(index, value)), vec![label], "{value}");
        }
    }

    #[test]
    fn sect_config_is_not_validated() {
        assert!(labels(&with_field(2, "anything at all")).is_empty());
    }

    #[test]
    fn blank_mandatory_field_is_empty_field() {
        let line = Line::new(1, with_field(8, " ")).unwrap();
        let errors = validate_row(&line, FIELDS);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "|callsign: empty field|");
    }

    #[test]
    fn wrong_field_count_skips_field_checks() {
        let line = Line::new(1, "2024-01-01 13:07:00;bad;row").unwrap();
        let errors = validate_row(&line, FIELDS);
        assert_eq!(
            errors,
            vec![FieldError::FieldCount {
                expected: 15,
                found: 3
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "|field count: expected 15, found 3|"
        );
    }

    #[test]
    fn short_timestamp_is_reported_not_panicking() {
        let found = labels(&with_field(0, "2024-01"));
        assert_eq!(found, vec!["date", "time"]);
    }

    #[test]
    fn section_lists_tokens_and_total() {
        let bad = with_field(8, "12");
        let input = lines(&[VALID, bad.as_str()]);
        let invalid = check(&input, FIELDS);
        assert_eq!(invalid.len(), 1);
        let section = section(&invalid, false).unwrap();
        assert_eq!(
            section.entries,
            vec![format!("Line    2 - |callsign: 12| - {bad}"), "Invalid: 1".to_string()]
        );
    }

    #[test]
    fn clean_section_in_detail_mode() {
        assert!(section(&[], false).is_none());
        assert_eq!(
            section(&[], true).unwrap().entries,
            vec!["No rows with errors"]
        );
    }
}
