//! Cross-field consistency for sector configuration rows.
//!
//! `config_id` encodes `"<sectorSpan>.<movement>.<assistantCount>"`. The
//! sector span must equal `QTD_CTR` and the assistant count must equal
//! `QTD_ASS` on the same row.

use atc_model::{Line, Section};

use super::{Partition, offending_lines_section};

pub const CONTROLLER_TITLE: &str = "CONTROLLER COUNT MISMATCH";
pub const ASSISTANT_TITLE: &str = "ASSISTANT COUNT MISMATCH";

pub const CONFIG_ID_FIELD: usize = 3;
pub const CONTROLLER_COUNT_FIELD: usize = 7;
pub const ASSISTANT_COUNT_FIELD: usize = 8;

const SPAN_COMPONENT: usize = 0;
const ASSISTANT_COMPONENT: usize = 2;

/// Component `index` of the row's `config_id`, quotes stripped.
fn config_id_component(fields: &[&str], index: usize) -> Option<String> {
    let config_id = fields.get(CONFIG_ID_FIELD)?;
    config_id
        .split('.')
        .nth(index)
        .map(|component| component.replace('"', ""))
}

fn component_matches(line: &Line, component: usize, field: usize) -> bool {
    let fields = line.fields();
    match (config_id_component(&fields, component), fields.get(field)) {
        (Some(encoded), Some(value)) => encoded == *value,
        _ => false,
    }
}

/// Rows whose `config_id` sector span differs from `QTD_CTR`. With
/// `remove` set those rows leave the working sequence; otherwise they are
/// only reported and `kept` still holds every row.
pub fn controller_counts(lines: Vec<Line>, remove: bool) -> Partition {
    check_component(lines, SPAN_COMPONENT, CONTROLLER_COUNT_FIELD, remove)
}

/// Rows whose `config_id` assistant count differs from `QTD_ASS`.
pub fn assistant_counts(lines: Vec<Line>, remove: bool) -> Partition {
    check_component(lines, ASSISTANT_COMPONENT, ASSISTANT_COUNT_FIELD, remove)
}

fn check_component(lines: Vec<Line>, component: usize, field: usize, remove: bool) -> Partition {
    if remove {
        return Partition::split_off(lines, |line| !component_matches(line, component, field));
    }
    let removed = lines
        .iter()
        .filter(|line| !component_matches(line, component, field))
        .cloned()
        .collect();
    Partition {
        kept: lines,
        removed,
    }
}

pub fn controller_section(mismatched: &[Line], detail: bool) -> Option<Section> {
    offending_lines_section(CONTROLLER_TITLE, mismatched, "No lines with errors", detail)
}

pub fn assistant_section(mismatched: &[Line], detail: bool) -> Option<Section> {
    offending_lines_section(ASSISTANT_TITLE, mismatched, "No lines with errors", detail)
}
