//! Line-count check for exports with one row per minute.

use atc_model::Section;

pub const TITLE: &str = "LINE COUNT";

pub fn section(found: usize, expected: usize, detail: bool) -> Option<Section> {
    if found == expected {
        return detail.then(|| Section::status(TITLE, "Result: OK"));
    }
    let difference = if found > expected {
        format!("Difference: {} lines more", found - expected)
    } else {
        format!("Difference: {} lines fewer", expected - found)
    };
    Some(
        Section::findings(TITLE)
            .with_entry(format!("Expected: {expected} lines"))
            .with_entry(format!("Found: {found} lines"))
            .with_entry(difference),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_count_is_clean() {
        assert!(section(1440, 1440, false).is_none());
        let status = section(1440, 1440, true).unwrap();
        assert_eq!(status.entries, vec!["Result: OK"]);
    }

    #[test]
    fn reports_surplus_and_shortfall() {
        let more = section(1442, 1440, false).unwrap();
        assert_eq!(
            more.entries,
            vec![
                "Expected: 1440 lines",
                "Found: 1442 lines",
                "Difference: 2 lines more"
            ]
        );
        let fewer = section(1439, 1440, false).unwrap();
        assert_eq!(fewer.entries[2], "Difference: 1 lines fewer");
    }
}
