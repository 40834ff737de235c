pub mod error;
pub mod line;
pub mod options;
pub mod outcome;
pub mod report;
pub mod schema;

pub use error::{ModelError, Result};
pub use line::{FIELD_SEPARATOR, Line, is_blank_field, split_fields};
pub use options::ValidationOptions;
pub use outcome::{FileOutcome, FileStatus};
pub use report::{CLEAN_SENTINEL, ERROR_REPORT_TITLE, ErrorReport, REPORT_TITLE, Report, Section};
pub use schema::{SECTOR_CODES, Schema};
