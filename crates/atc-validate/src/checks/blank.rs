//! Blank-field filter.

use atc_model::{Line, Section, is_blank_field};

use super::{Partition, filtered_lines_section};

pub const TITLE: &str = "BLANK FIELD";

/// True when any field of the line is empty or whitespace.
pub fn has_blank_field(line: &Line) -> bool {
    line.fields().into_iter().any(is_blank_field)
}

/// Remove lines that contain at least one blank field.
pub fn filter(lines: Vec<Line>) -> Partition {
    Partition::split_off(lines, has_blank_field)
}

pub fn section(removed: &[Line], detail: bool) -> Option<Section> {
    filtered_lines_section(TITLE, removed, detail)
}
