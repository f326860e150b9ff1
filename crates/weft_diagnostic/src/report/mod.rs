//! Plain-text error reports in the classic caret layout:
//!
//! ```text
//! In line 2:
//! Error! Expecting: "bar" here:
//!   foo
//! __^_
//! ```
//!
//! The indicator line has one `_` per character before the error position
//! (a tab counts as `tab_width` of them), then `^_`.

use std::fmt::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::ExpectationFailure;

/// Renders messages at byte positions of one source text.
pub struct Report<'s> {
    source: &'s str,
    file: Option<String>,
    tab_width: usize,
    lines: LineOffsetTable,
}

impl<'s> Report<'s> {
    pub fn new(source: &'s str) -> Self {
        Report {
            source,
            file: None,
            tab_width: 4,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Name shown in the header as `In file NAME, line N:`.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Write `message` pointing at `position`.
    pub fn write(&self, out: &mut impl Write, position: usize, message: &str) -> fmt::Result {
        let position = position.min(self.source.len());
        let line = self.lines.line_from_offset(position);
        match &self.file {
            Some(file) => writeln!(out, "In file {file}, line {line}:")?,
            None => writeln!(out, "In line {line}:")?,
        }
        writeln!(out, "{message}")?;

        let start = self.lines.line_start_offset(line).unwrap_or(0);
        writeln!(out, "{}", self.lines.line_text(self.source, line).unwrap_or_default())?;

        let before = self.source.get(start..position).unwrap_or_default();
        for c in before.chars() {
            if c == '\t' {
                for _ in 0..self.tab_width {
                    out.write_char('_')?;
                }
            } else {
                out.write_char('_')?;
            }
        }
        writeln!(out, "^_")
    }

    pub fn render(&self, position: usize, message: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write(&mut out, position, message);
        out
    }

    /// `Error! Expecting: WHICH here:` at the failure position.
    pub fn render_failure(&self, failure: &ExpectationFailure) -> String {
        self.render(
            failure.position,
            &format!("Error! Expecting: {} here:", failure.which),
        )
    }
}

#[cfg(test)]
mod tests;
