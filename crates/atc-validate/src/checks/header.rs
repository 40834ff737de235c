//! Header location.
//!
//! Every line equal to the schema header is a header, wherever it appears:
//! concatenated exports carry one per original file.

use atc_model::{Line, Section};

use super::Partition;

pub const TITLE: &str = "HEADER";

/// Remove every exact (case-sensitive, untrimmed) occurrence of `header`.
pub fn locate(lines: Vec<Line>, header: &str) -> Partition {
    Partition::split_off(lines, |line| line.content() == header)
}

/// The header section is part of the detailed report only.
pub fn section(headers: &[Line], detail: bool) -> Option<Section> {
    if !detail {
        return None;
    }
    if headers.is_empty() {
        return Some(Section::findings(TITLE).with_entry("Header not found"));
    }
    let mut section = Section::status(TITLE, headers[0].to_string());
    for line in &headers[1..] {
        section.push(line.to_string());
    }
    Some(section)
}
