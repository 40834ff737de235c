use proptest::prelude::*;

use atc_model::Line;
use atc_validate::checks::{field_count, header};
use atc_validate::{MINUTES_PER_DAY, TimeSlotMap};

const HEADER: &str = "week;day;time;config_id;QTD_CTR;QTD_ASS;MOV;SECT_CONFIG";

fn numbered(contents: Vec<String>) -> Vec<Line> {
    contents
        .into_iter()
        .enumerate()
        .map(|(index, content)| Line::new(index + 1, content).unwrap())
        .collect()
}

fn row(minute: u16) -> String {
    format!(
        "1;1;{:02}:{:02}:17;\"5.1.2\";5;2;1;S01",
        minute / 60,
        minute % 60
    )
}

proptest! {
    #[test]
    fn prop_field_count_filter_is_idempotent(
        contents in prop::collection::vec("[a;]{0,12}", 0..40),
        expected in 1usize..6,
    ) {
        let once = field_count::filter(numbered(contents), expected);
        let twice = field_count::filter(once.kept.clone(), expected);
        prop_assert!(twice.removed.is_empty());
        prop_assert_eq!(twice.kept, once.kept);
    }

    #[test]
    fn prop_header_removal_counts_exact_matches(
        is_header in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let contents: Vec<String> = is_header
            .iter()
            .map(|h| if *h { HEADER.to_string() } else { format!("{HEADER} ") })
            .collect();
        let expected = is_header.iter().filter(|h| **h).count();

        let partition = header::locate(numbered(contents), HEADER);
        prop_assert_eq!(partition.removed.len(), expected);
        prop_assert!(partition.kept.iter().all(|line| line.content() != HEADER));
    }

    #[test]
    fn prop_slot_map_always_covers_the_day(
        minutes in prop::collection::vec(0u16..1440, 0..200),
    ) {
        let lines = numbered(minutes.iter().map(|m| row(*m)).collect());
        let map = TimeSlotMap::build(&lines).unwrap();
        prop_assert_eq!(map.len(), MINUTES_PER_DAY);
        prop_assert_eq!(map.missing().count() + map.nonempty_count(), MINUTES_PER_DAY);

        let total: usize = map.slots().iter().map(|slot| slot.lines.len()).sum();
        prop_assert_eq!(total, minutes.len());
    }
}
