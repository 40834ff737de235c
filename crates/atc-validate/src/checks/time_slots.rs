//! Per-minute time-slot reconciliation.
//!
//! Rows are bucketed by the minute of their time field. The map always holds
//! all 1440 minutes of the day so that missing minutes are simply empty
//! slots. Building the map never removes lines from the working sequence.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use atc_model::{Line, Section};

use crate::error::{Result, ValidationError};

pub const MISSING_TITLE: &str = "MISSING TIME SLOT";
pub const DUPLICATE_TITLE: &str = "DUPLICATE TIME SLOT";
pub const OVERFLOW_TITLE: &str = "TIME SLOT OVERFLOW";

/// Minutes in a day, and so slots in a [`TimeSlotMap`].
pub const MINUTES_PER_DAY: usize = 1440;

/// Zero-based index of the time field in config exports.
pub const TIME_FIELD: usize = 2;

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// Two-digit hour and minute, optional seconds with up to nine fraction digits.
static TIME_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9](\.[0-9]{1,9})?)?$")
        .expect("Invalid time field regex")
});

/// Minute of the day, 0 (00:00) through 1439 (23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minute(u16);

impl Minute {
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    fn from_time(time: NaiveTime) -> Self {
        // hour < 24 and minute < 60, so this stays below 1440
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

/// Renders as `HH:MM:00`.
impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.0 / 60, self.0 % 60)
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let captures = TIME_FIELD_RE.captures(value)?;
    let format = if captures.get(2).is_some() {
        TIME_FORMAT
    } else {
        SHORT_TIME_FORMAT
    };
    NaiveTime::parse_from_str(value, format).ok()
}

/// Parse an `HH:MM[:SS[.fff]]` time field and truncate it to the minute.
///
/// Single-digit components, surrounding whitespace and leap seconds are
/// rejected.
pub fn parse_minute(line: &Line) -> Result<Minute> {
    let value = line.fields().get(TIME_FIELD).copied().unwrap_or_default();
    parse_time(value)
        .map(Minute::from_time)
        .ok_or_else(|| ValidationError::TimeParse {
            address: line.address(),
            value: value.to_string(),
        })
}

/// The lines of one minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub minute: Minute,
    pub lines: Vec<Line>,
}

/// All 1440 minutes of a day, in order, each with the lines that fall in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotMap {
    slots: Vec<Slot>,
}

impl TimeSlotMap {
    /// Bucket `lines` by minute. Fails on the first unparsable time field.
    pub fn build(lines: &[Line]) -> Result<Self> {
        let mut slots: Vec<Slot> = (0..MINUTES_PER_DAY as u16)
            .map(|minute| Slot {
                minute: Minute(minute),
                lines: Vec::new(),
            })
            .collect();
        for line in lines {
            let minute = parse_minute(line)?;
            slots[minute.index()].lines.push(line.clone());
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Minutes without any line.
    pub fn missing(&self) -> impl Iterator<Item = Minute> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.lines.is_empty())
            .map(|slot| slot.minute)
    }

    pub fn nonempty_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.lines.is_empty()).count()
    }

    /// Slots holding more than one line.
    pub fn duplicates(&self) -> impl Iterator<Item = &Slot> {
        self.over_capacity(1)
    }

    /// Slots holding more than `capacity` lines.
    pub fn over_capacity(&self, capacity: usize) -> impl Iterator<Item = &Slot> {
        self.slots
            .iter()
            .filter(move |slot| slot.lines.len() > capacity)
    }
}

pub fn missing_section(map: &TimeSlotMap, detail: bool) -> Option<Section> {
    let missing: Vec<Minute> = map.missing().collect();
    if missing.is_empty() {
        return detail.then(|| Section::status(MISSING_TITLE, "No missing time slots"));
    }
    let mut section = Section::findings(MISSING_TITLE);
    for minute in &missing {
        section.push(minute.to_string());
    }
    section.push(format!("Quantity: {}", missing.len()));
    Some(section)
}

/// Every line of every duplicated minute, one blank line after each minute.
pub fn duplicate_section(map: &TimeSlotMap, detail: bool) -> Option<Section> {
    let mut section = Section::findings(DUPLICATE_TITLE);
    for slot in map.duplicates() {
        for line in &slot.lines {
            section.push(format!("{} - {line}", slot.minute));
        }
        section.push_separator();
    }
    if section.entries.is_empty() {
        return detail.then(|| Section::status(DUPLICATE_TITLE, "No duplicate time slots"));
    }
    Some(section)
}

/// Each minute holding more than `capacity` lines, followed by its lines.
pub fn overflow_section(map: &TimeSlotMap, capacity: usize, detail: bool) -> Option<Section> {
    let mut section = Section::findings(OVERFLOW_TITLE);
    for slot in map.over_capacity(capacity) {
        section.push(slot.minute.to_string());
        for line in &slot.lines {
            section.push(line.to_string());
        }
    }
    if section.entries.is_empty() {
        return detail.then(|| Section::status(OVERFLOW_TITLE, "No overflowing time slots"));
    }
    Some(section)
}
