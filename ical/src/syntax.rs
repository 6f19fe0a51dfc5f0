// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Content-line syntax of iCalendar (RFC 5545 §3.1), without value typing.
//!
//! ```text
//! Source Text → Unfold → Lexer → Scanner → Content Lines → Tree Builder → Components
//! ```

mod lexer;
mod scanner;
mod tree_builder;

use std::fmt;

use crate::syntax::scanner::scan_content_line;
use crate::syntax::tree_builder::build_tree;

/// Parse iCalendar text into its top-level components (usually a single VCALENDAR).
///
/// Lines may end with CRLF or a bare LF, and folded lines (a line break followed
/// by a SPACE or TAB) are joined before scanning.
///
/// # Errors
///
/// Returns the first syntax error found, tagged with its 1-based line number.
///
/// # Examples
///
/// ```
/// # use nccal_ical::parse;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let roots = parse(src).unwrap();
/// assert_eq!(roots[0].name, "VCALENDAR");
/// assert_eq!(roots[0].children[0].name, "VEVENT");
/// ```
pub fn parse(src: &str) -> Result<Vec<Component>, ParseError> {
    let lines = unfold(src)
        .into_iter()
        .map(|(line, text)| scan_content_line(&text, line))
        .collect::<Result<Vec<_>, _>>()?;

    build_tree(lines)
}

/// Join folded lines, keeping the line number where each logical line starts.
fn unfold(src: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (idx, raw) in src.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(continuation) = raw.strip_prefix([' ', '\t']) {
            if let Some((_, last)) = lines.last_mut() {
                last.push_str(continuation);
                continue;
            }
        }

        if !raw.is_empty() {
            lines.push((idx + 1, raw.to_string()));
        }
    }
    lines
}

/// An iCalendar component (e.g., VCALENDAR, VEVENT, VTIMEZONE, STANDARD).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component name, upper-cased.
    pub name: String,
    /// Properties in original order.
    pub properties: Vec<Property>,
    /// Nested child components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates an empty component.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the first property with the given name (case-insensitive).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the number of properties with the given name.
    #[must_use]
    pub fn count_properties(&self, name: &str) -> usize {
        self.properties
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .count()
    }

    /// Returns the first child component with the given name (case-insensitive).
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Component> {
        self.children
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Appends a property.
    pub fn push_property(&mut self, property: Property) -> &mut Self {
        self.properties.push(property);
        self
    }

    /// Appends a child component.
    pub fn push_child(&mut self, child: Component) -> &mut Self {
        self.children.push(child);
        self
    }
}

/// An iCalendar property: name, parameters, and raw (still escaped) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, upper-cased.
    pub name: String,
    /// Property parameters (duplicates and multi-values allowed).
    pub parameters: Vec<Parameter>,
    /// Raw property value.
    pub value: String,
}

impl Property {
    /// Creates a property without parameters.
    #[must_use]
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            parameters: Vec::new(),
            value: value.into(),
        }
    }

    /// Adds a single-valued parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.to_ascii_uppercase(),
            values: vec![value.into()],
        });
        self
    }

    /// Returns the first value of the named parameter (case-insensitive).
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .and_then(|p| p.values.first())
            .map(String::as_str)
    }
}

/// A property parameter (e.g., `TZID=Europe/Berlin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, upper-cased.
    pub name: String,
    /// Parameter values split by commas, with quotes removed.
    pub values: Vec<String>,
}

/// Syntax error with the line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the unfolded source.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Kinds of iCalendar syntax errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Content line has no name before `;` or `:`.
    EmptyName,
    /// Content line has no `:` separating the value.
    MissingColon,
    /// Unexpected character at the given 1-based column.
    UnexpectedCharacter(usize),
    /// A quoted parameter value is not closed.
    UnterminatedQuote,
    /// `END` without a matching `BEGIN`.
    UnmatchedEnd(String),
    /// `BEGIN` that is never closed.
    UnmatchedBegin(String),
    /// `END` name does not match the open component.
    MismatchedNesting {
        /// Name of the open component.
        expected: String,
        /// Name found on the `END` line.
        found: String,
    },
    /// Property outside of any component.
    OrphanProperty(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "content line without a name"),
            Self::MissingColon => write!(f, "missing ':' before property value"),
            Self::UnexpectedCharacter(column) => {
                write!(f, "unexpected character at column {column}")
            }
            Self::UnterminatedQuote => write!(f, "unterminated quoted parameter value"),
            Self::UnmatchedEnd(name) => write!(f, "unmatched END:{name} (no corresponding BEGIN)"),
            Self::UnmatchedBegin(name) => write!(f, "unmatched BEGIN:{name} (component not closed)"),
            Self::MismatchedNesting { expected, found } => {
                write!(f, "mismatched nesting: expected END:{expected}, found END:{found}")
            }
            Self::OrphanProperty(name) => write!(f, "property {name} outside of any component"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn unfold_joins_continuation_lines() {
        let lines = unfold("SUMMARY:Long\r\n  line\r\n\t and more\r\nUID:1\r\n");
        assert_eq!(
            lines,
            vec![
                (1, "SUMMARY:Long line and more".to_string()),
                (4, "UID:1".to_string()),
            ]
        );
    }

    #[test]
    fn unfold_accepts_bare_line_feeds() {
        let lines = unfold("BEGIN:VEVENT\nEND:VEVENT\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], (2, "END:VEVENT".to_string()));
    }
}
