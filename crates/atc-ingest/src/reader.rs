//! Line reader: turns an export file into addressed lines.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use atc_model::Line;

use crate::error::{IngestError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read an export file into its lines, numbered from 1.
///
/// Invalid UTF-8 sequences are replaced rather than rejected so that a single
/// bad byte still yields a report for the rest of the file.
pub fn read_lines(path: &Path) -> Result<Vec<Line>> {
    debug!(path = %path.display(), "reading export file");
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            warn!(
                path = %path.display(),
                valid_up_to = error.utf8_error().valid_up_to(),
                "file is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    };

    let lines = parse_lines(&text)?;
    debug!(path = %path.display(), line_count = lines.len(), "export file read");
    Ok(lines)
}

/// Split text into addressed lines. Accepts `\n`, `\r\n` and bare `\r`
/// endings and drops a leading byte order mark.
pub fn parse_lines(text: &str) -> Result<Vec<Line>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    split_records(text)
        .enumerate()
        .map(|(index, content)| Line::new(index + 1, content).map_err(IngestError::from))
        .collect()
}

/// Records of `text`. A final terminator does not open an empty record.
fn split_records(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(end) => {
                let terminator = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                let next = &current[end + terminator..];
                rest = (!next.is_empty()).then_some(next);
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_start_at_one() {
        let lines = parse_lines("a;b\nc;d\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].address(), 1);
        assert_eq!(lines[0].content(), "a;b");
        assert_eq!(lines[1].address(), 2);
        assert_eq!(lines[1].content(), "c;d");
    }

    #[test]
    fn keeps_blank_lines_and_crlf() {
        let lines = parse_lines("a\r\n\r\nb").unwrap();
        let contents: Vec<&str> = lines.iter().map(Line::content).collect();
        assert_eq!(contents, vec!["a", "", "b"]);
        assert_eq!(lines[2].address(), 3);
    }

    #[test]
    fn bare_carriage_returns_end_records() {
        let lines = parse_lines("week;day\r1;2\r\r3;4\r").unwrap();
        let contents: Vec<&str> = lines.iter().map(Line::content).collect();
        assert_eq!(contents, vec!["week;day", "1;2", "", "3;4"]);
        assert_eq!(lines[3].address(), 4);
    }

    #[test]
    fn mixed_endings() {
        let lines = parse_lines("a\r\nb\nc\rd").unwrap();
        let contents: Vec<&str> = lines.iter().map(Line::content).collect();
        assert_eq!(contents, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let lines = parse_lines("\u{feff}week;day\n").unwrap();
        assert_eq!(lines[0].content(), "week;day");
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(parse_lines("").unwrap().is_empty());
    }
}
