//! Integrity checks for ATC export files.
//!
//! [`validate_lines`] runs the schema pipeline over an in-memory line
//! sequence; [`validate_path`] reads the file first. Both return the
//! assembled [`Report`](atc_model::Report) or the fault that stopped the
//! file from being checked.

pub mod checks;
pub mod error;
pub mod pipeline;

pub use checks::Partition;
pub use checks::fields::{FieldError, InvalidRow, validate_row};
pub use checks::time_slots::{MINUTES_PER_DAY, Minute, TimeSlotMap};
pub use error::{Result, ValidationError};
pub use pipeline::{Check, SchemaPipeline, Stage, validate_lines, validate_path};
