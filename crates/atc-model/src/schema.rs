//! Export schemas produced by the ATC data source.
//!
//! Each schema is identified by its filename suffix and fixes the header
//! row, and therefore the number of fields every data row must carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::line::split_fields;

/// Valid sector codes. Also the per-minute row capacity of a sector
/// configuration export: at most one row per sector.
pub const SECTOR_CODES: [&str; 20] = [
    "S01", "S02", "S03", "S04", "S05", "S06", "S6F", "S07", "S08", "S09", "S10", "S11", "S12",
    "S13", "S14", "S15", "S16", "S17", "S18", "18F",
];

/// Record family of an export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// Daily configuration counts: one row per minute of the day.
    DailyConfig,
    /// Per-sector console configuration: up to one row per sector per minute.
    SectorConfig,
    /// Individual flight records.
    FlightRecord,
}

impl Schema {
    pub const ALL: [Schema; 3] = [
        Schema::DailyConfig,
        Schema::SectorConfig,
        Schema::FlightRecord,
    ];

    /// Short label used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::DailyConfig => "config",
            Schema::SectorConfig => "sect_config",
            Schema::FlightRecord => "flights",
        }
    }

    /// Canonical header row, matched byte for byte.
    pub fn header(&self) -> &'static str {
        match self {
            Schema::DailyConfig => "week;day;time;config_id;QTD_CTR;QTD_ASS;MOV;SECT_CONFIG",
            Schema::SectorConfig => {
                "week;day;time;config_id;CTR;ASS;SETOR;QTD_CTR;QTD_ASS;MOV_ATCO;MOV_SET;SECT_CONFIG"
            }
            Schema::FlightRecord => {
                "timestamp;config_id;sect_config;CTR;ASS;sector;#sectors;#ASS;CALLSIGN;ADEP;ADES;DOF;EOBT;SSR;flrul;"
            }
        }
    }

    /// Filename suffix that selects this schema.
    pub fn suffix(&self) -> &'static str {
        match self {
            Schema::DailyConfig => "_config.csv",
            Schema::SectorConfig => "_sect_config.csv",
            Schema::FlightRecord => "_flights.csv",
        }
    }

    /// Number of fields in the header, and so in every valid row.
    pub fn expected_field_count(&self) -> usize {
        split_fields(self.header()).len()
    }

    /// Classify a file name by suffix, case-insensitively.
    ///
    /// `_sect_config.csv` also ends with `_config.csv`, so the more specific
    /// suffix is tried first.
    pub fn from_file_name(name: &str) -> Option<Schema> {
        let lower = name.to_lowercase();
        [
            Schema::SectorConfig,
            Schema::DailyConfig,
            Schema::FlightRecord,
        ]
        .into_iter()
        .find(|schema| lower.ends_with(schema.suffix()))
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Schema {
    type Err = crate::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "config" | "daily_config" => Ok(Schema::DailyConfig),
            "sect_config" | "sector_config" => Ok(Schema::SectorConfig),
            "flights" | "flight_record" => Ok(Schema::FlightRecord),
            _ => Err(crate::ModelError::UnknownSchema(s.to_string())),
        }
    }
}
