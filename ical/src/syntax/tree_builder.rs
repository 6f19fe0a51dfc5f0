// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tree builder for constructing component hierarchy from content lines.
//!
//! # Algorithm
//!
//! The tree builder uses a stack-based algorithm:
//! 1. On BEGIN:X, push a new component onto the stack
//! 2. On property, add to the current component (top of stack)
//! 3. On END:X, pop from stack and add to parent component

use crate::keyword::{KW_BEGIN, KW_END};
use crate::syntax::scanner::ContentLine;
use crate::syntax::{Component, ParseError, ParseErrorKind, Property};

/// Build a component tree from scanned content lines.
pub(crate) fn build_tree(lines: Vec<ContentLine>) -> Result<Vec<Component>, ParseError> {
    let mut roots = Vec::new();
    let mut stack: Vec<(Component, usize)> = Vec::new();

    for line in lines {
        if line.name == KW_BEGIN {
            stack.push((Component::new(line.value.trim()), line.line));
        } else if line.name == KW_END {
            let found = line.value.trim().to_ascii_uppercase();
            let Some((component, _)) = stack.pop() else {
                return Err(ParseError::new(line.line, ParseErrorKind::UnmatchedEnd(found)));
            };
            if component.name != found {
                return Err(ParseError::new(
                    line.line,
                    ParseErrorKind::MismatchedNesting {
                        expected: component.name,
                        found,
                    },
                ));
            }

            match stack.last_mut() {
                Some((parent, _)) => parent.children.push(component),
                None => roots.push(component),
            }
        } else {
            let Some((current, _)) = stack.last_mut() else {
                return Err(ParseError::new(
                    line.line,
                    ParseErrorKind::OrphanProperty(line.name),
                ));
            };
            current.properties.push(Property {
                name: line.name,
                parameters: line.parameters,
                value: line.value,
            });
        }
    }

    // Any remaining component on the stack is an unmatched BEGIN
    if let Some((component, line)) = stack.pop() {
        return Err(ParseError::new(
            line,
            ParseErrorKind::UnmatchedBegin(component.name),
        ));
    }

    Ok(roots)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::indexing_slicing)]

    use crate::syntax::scanner::scan_content_line;

    use super::*;

    fn build(src: &[&str]) -> Result<Vec<Component>, ParseError> {
        let lines = src
            .iter()
            .enumerate()
            .map(|(i, l)| scan_content_line(l, i + 1).unwrap())
            .collect();
        build_tree(lines)
    }

    #[test]
    fn builds_nested_components() {
        let roots = build(&[
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "UID:1",
            "END:VEVENT",
            "END:VCALENDAR",
        ])
        .unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].properties[0].name, "VERSION");
        assert_eq!(roots[0].children[0].name, "VEVENT");
        assert_eq!(roots[0].children[0].properties[0].value, "1");
    }

    #[test]
    fn component_names_are_case_insensitive() {
        let roots = build(&["BEGIN:vcalendar", "END:VCALENDAR"]).unwrap();
        assert_eq!(roots[0].name, "VCALENDAR");
    }

    #[test]
    fn reports_mismatched_nesting() {
        let err = build(&[
            "BEGIN:VCALENDAR",
            "BEGIN:VEVENT",
            "END:VCALENDAR",
            "END:VEVENT",
        ])
        .unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.kind,
            ParseErrorKind::MismatchedNesting {
                expected: "VEVENT".to_string(),
                found: "VCALENDAR".to_string(),
            }
        );
    }

    #[test]
    fn reports_unmatched_begin_and_end() {
        let err = build(&["BEGIN:VCALENDAR"]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedBegin("VCALENDAR".to_string()));

        let err = build(&["END:VEVENT"]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedEnd("VEVENT".to_string()));
    }

    #[test]
    fn reports_orphan_property() {
        let err = build(&["SUMMARY:x"]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::OrphanProperty("SUMMARY".to_string()));
    }
}
