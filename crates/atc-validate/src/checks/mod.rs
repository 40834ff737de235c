//! Validation check modules.
//!
//! Filters partition the working sequence into kept and removed lines; the
//! kept lines feed the next check. Read-only checks (time slots, field
//! contracts) only inspect the sequence. Every module renders its findings
//! into a report [`Section`](atc_model::Section), or into nothing when clean
//! and detail mode is off.

pub mod blank;
pub mod consistency;
pub mod field_count;
pub mod fields;
pub mod header;
pub mod line_count;
pub mod time_slots;

use atc_model::{Line, Section};

/// Result of splitting a line sequence with a predicate. Both halves keep
/// the original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub kept: Vec<Line>,
    pub removed: Vec<Line>,
}

impl Partition {
    /// Split `lines`, removing those for which `remove` returns true.
    pub fn split_off(lines: Vec<Line>, mut remove: impl FnMut(&Line) -> bool) -> Self {
        let (removed, kept) = lines.into_iter().partition(|line| remove(line));
        Self { kept, removed }
    }
}

/// Section listing removed lines followed by a `Filtered: <n>` total, or a
/// clean status in detail mode.
pub(crate) fn filtered_lines_section(
    title: &str,
    removed: &[Line],
    detail: bool,
) -> Option<Section> {
    if removed.is_empty() {
        return detail.then(|| Section::status(title, "No lines filtered"));
    }
    let mut section = Section::findings(title);
    for line in removed {
        section.push(line.to_string());
    }
    section.push(format!("Filtered: {}", removed.len()));
    Some(section)
}

/// Section listing offending lines verbatim, or a clean status in detail mode.
pub(crate) fn offending_lines_section(
    title: &str,
    lines: &[Line],
    clean_message: &str,
    detail: bool,
) -> Option<Section> {
    if lines.is_empty() {
        return detail.then(|| Section::status(title, clean_message));
    }
    let mut section = Section::findings(title);
    for line in lines {
        section.push(line.to_string());
    }
    Some(section)
}
