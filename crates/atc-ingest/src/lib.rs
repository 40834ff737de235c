pub mod discovery;
pub mod error;
pub mod reader;

pub use discovery::{DiscoveredFile, discover_files, expand_inputs, list_csv_files};
pub use error::{IngestError, Result};
pub use reader::{parse_lines, read_lines};
