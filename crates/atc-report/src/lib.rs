//! Report artifacts for ATC export validation.
//!
//! - **Integrity report**: `<reports_dir>/<stem>.txt`
//! - **Error report**: `<reports_dir>/<stem>-ERROR.txt`, written when a file
//!   could not be checked

mod error;
mod paths;
mod writer;

pub use error::{ReportError, Result};
pub use paths::{DEFAULT_REPORTS_DIR, ReportPaths};
pub use writer::{write_error_report, write_report};
