use std::fmt;

use serde::{Deserialize, Serialize};

/// First line of every integrity report.
pub const REPORT_TITLE: &str = "INTEGRITY REPORT";

/// First line of the artifact written when a file could not be checked.
pub const ERROR_REPORT_TITLE: &str = "ERROR REPORT";

/// Body of a report in which no check produced a section.
pub const CLEAN_SENTINEL: &str = "OK";

/// A titled block of report entries produced by one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<String>,
    /// False for the status-only sections emitted in detail mode.
    pub has_findings: bool,
}

impl Section {
    /// Start a section that reports defects.
    pub fn findings(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            has_findings: true,
        }
    }

    /// A clean section holding a single status message.
    pub fn status(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: vec![message.into()],
            has_findings: false,
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.push(entry);
        self
    }

    /// Append an empty separator line.
    pub fn push_separator(&mut self) {
        self.entries.push(String::new());
    }

    /// Text lines of the section: a blank line, the title, then the entries
    /// indented by a tab. Separators stay empty.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(String::new());
        lines.push(self.title.clone());
        for entry in &self.entries {
            if entry.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("\t{entry}"));
            }
        }
        lines
    }
}

/// Integrity report for one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub file_name: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    /// True when no check contributed a section.
    pub fn is_clean(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections that carry defects.
    pub fn finding_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|section| section.has_findings)
            .count()
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Text lines of the whole report.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![REPORT_TITLE.to_string(), self.file_name.clone()];
        if self.is_clean() {
            lines.push(CLEAN_SENTINEL.to_string());
        } else {
            for section in &self.sections {
                lines.extend(section.lines());
            }
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Short report written in place of an integrity report when checking a
/// file failed. Findings gathered before the failure are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub file_name: String,
    pub message: String,
    pub cause: String,
}

impl ErrorReport {
    pub fn lines(&self) -> Vec<String> {
        vec![
            ERROR_REPORT_TITLE.to_string(),
            self.file_name.clone(),
            self.message.clone(),
            self.cause.clone(),
        ]
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
