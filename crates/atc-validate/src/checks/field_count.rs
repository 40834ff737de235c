//! Field-count filter.

use atc_model::{Line, Section};

use super::{Partition, filtered_lines_section};

pub const TITLE: &str = "FIELD COUNT MISMATCH";

/// Remove lines whose field count differs from `expected`.
///
/// Idempotent: the kept lines all have `expected` fields.
pub fn filter(lines: Vec<Line>, expected: usize) -> Partition {
    Partition::split_off(lines, |line| line.field_count() != expected)
}

pub fn section(removed: &[Line], detail: bool) -> Option<Section> {
    filtered_lines_section(TITLE, removed, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{addresses, lines};

    #[test]
    fn removes_short_and_long_rows() {
        let input = lines(&["a;b;c", "a;b", "a;b;c;d", "", "a;;c", "a;b;c;"]);
        let partition = filter(input, 3);
        assert_eq!(addresses(&partition.kept), vec![1, 5, 6]);
        assert_eq!(addresses(&partition.removed), vec![2, 3, 4]);
    }

    #[test]
    fn trailing_empty_field_is_not_counted() {
        // an empty last field shortens the row
        let partition = filter(lines(&["a;b;"]), 3);
        assert_eq!(partition.removed.len(), 1);
    }

    #[test]
    fn section_lists_removed_lines_and_total() {
        let removed = lines(&["a;b"]);
        let section = section(&removed, false).unwrap();
        assert_eq!(section.title, TITLE);
        assert_eq!(section.entries, vec!["Line    1 - a;b", "Filtered: 1"]);
    }
}
