#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Separator between fields in every export schema.
pub const FIELD_SEPARATOR: char = ';';

/// One physical line of an export file.
///
/// The address is the 1-based line number assigned when the file was read.
/// Neither the address nor the content changes afterwards; checks only drop
/// lines from the working sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    address: usize,
    content: String,
}

impl Line {
    pub fn new(address: usize, content: impl Into<String>) -> Result<Self, ModelError> {
        if address == 0 {
            return Err(ModelError::InvalidAddress(address));
        }
        Ok(Self {
            address,
            content: content.into(),
        })
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Fields of the line, split with [`split_fields`].
    pub fn fields(&self) -> Vec<&str> {
        split_fields(&self.content)
    }

    pub fn field_count(&self) -> usize {
        self.fields().len()
    }
}

/// Renders the line the way report entries cite it: `Line   42 - <content>`.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {:4} - {}", self.address, self.content)
    }
}

/// Split a record on `;`.
///
/// Trailing empty fields are not counted and a record without any separator
/// is a single field. The exporter terminates flight records with a `;`, so
/// the header and its rows agree on the count under this rule.
pub fn split_fields(content: &str) -> Vec<&str> {
    if !content.contains(FIELD_SEPARATOR) {
        return vec![content];
    }
    let mut fields: Vec<&str> = content.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// A field is blank when it is empty or only whitespace.
pub fn is_blank_field(field: &str) -> bool {
    field.trim().is_empty()
}
