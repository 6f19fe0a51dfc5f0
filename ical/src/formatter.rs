// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! Writes a [`Component`] tree as content lines, to any `std::io::Write`
//! implementer, folding long lines.

use std::io::{self, Write};

use crate::keyword::{KW_BEGIN, KW_END};
use crate::syntax::{Component, Property};

/// Convenience function to format a `Component` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(component: &Component) -> io::Result<String> {
    FormatOptions::default().write_to_string(component)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Convenience method to write a `Component` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, component: &Component) -> io::Result<String> {
        let mut buffer = Vec::new();
        Formatter::new(&mut buffer, *self).write_component(component)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub const fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a component, its properties, and its children.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_component(&mut self, component: &Component) -> io::Result<()> {
        self.write_line(&format!("{KW_BEGIN}:{}", component.name))?;
        for property in &component.properties {
            self.write_property(property)?;
        }
        for child in &component.children {
            self.write_component(child)?;
        }
        self.write_line(&format!("{KW_END}:{}", component.name))
    }

    /// Write a single content line for a property.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_property(&mut self, property: &Property) -> io::Result<()> {
        let mut line = property.name.clone();
        for parameter in &property.parameters {
            line.push(';');
            line.push_str(&parameter.name);
            line.push('=');
            for (i, value) in parameter.values.iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                if value.contains([':', ';', ',']) {
                    line.push('"');
                    line.push_str(value);
                    line.push('"');
                } else {
                    line.push_str(value);
                }
            }
        }
        line.push(':');
        line.push_str(&property.value);
        self.write_line(&line)
    }

    /// Write a logical line followed by CRLF, folding it if needed.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let Some(max_len) = self.options.folding else {
            self.writer.write_all(line.as_bytes())?;
            return self.writer.write_all(b"\r\n");
        };

        let mut remaining = line;
        let mut limit = max_len;
        while remaining.len() > limit {
            let split = safe_split_index(remaining, limit);
            let (head, tail) = remaining.split_at(split);
            self.writer.write_all(head.as_bytes())?;
            self.writer
                .write_all(self.options.folding_style.as_bytes())?;
            remaining = tail;
            // Continuation lines start with one whitespace octet
            limit = max_len.saturating_sub(1).max(1);
        }
        self.writer.write_all(remaining.as_bytes())?;
        self.writer.write_all(b"\r\n")
    }
}

/// Largest char boundary not after `limit`, but at least one character.
fn safe_split_index(s: &str, limit: usize) -> usize {
    let mut idx = limit.min(s.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    if idx == 0 {
        s.chars().next().map_or(s.len(), char::len_utf8)
    } else {
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_long_lines_at_75_octets() {
        let mut component = Component::new("VEVENT");
        component.push_property(Property::new("DESCRIPTION", "x".repeat(200)));

        let out = format(&component).unwrap();
        for line in out.split("\r\n") {
            assert!(line.len() <= 75, "line too long: {}", line.len());
        }
        let unfolded = out.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{}", "x".repeat(200))));
    }

    #[test]
    fn never_splits_multibyte_characters() {
        let mut component = Component::new("VEVENT");
        component.push_property(Property::new("SUMMARY", "é".repeat(100)));

        let out = format(&component).unwrap();
        let unfolded = out.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("SUMMARY:{}", "é".repeat(100))));
    }

    #[test]
    fn quotes_parameter_values_with_separators() {
        let mut component = Component::new("VEVENT");
        component.push_property(
            Property::new("ORGANIZER", "mailto:jane@example.com").with_parameter("CN", "Doe, Jane"),
        );

        let out = format(&component).unwrap();
        assert!(out.contains("ORGANIZER;CN=\"Doe, Jane\":mailto:jane@example.com\r\n"));
    }

    #[test]
    fn folding_can_be_disabled() {
        let mut component = Component::new("VEVENT");
        component.push_property(Property::new("DESCRIPTION", "y".repeat(100)));

        let out = FormatOptions::default()
            .folding(None)
            .write_to_string(&component)
            .unwrap();
        assert!(out.contains(&format!("DESCRIPTION:{}\r\n", "y".repeat(100))));
    }
}
