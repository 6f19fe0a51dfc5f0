// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escapes text for iCalendar TEXT values.
///
/// Escapes: backslash, comma, semicolon, and line breaks. CRLF, LF and a
/// lone CR all become `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }
    result
}

/// Reverses [`escape_text`]. Unknown escapes keep the escaped character.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_text("hello, world"), "hello\\, world");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("semi;colon"), "semi\\;colon");
        assert_eq!(escape_text("old\rmac"), "old\\nmac");
        assert_eq!(escape_text("a\r\rb"), "a\\n\\nb");
    }

    #[test]
    fn unescapes_special_characters() {
        assert_eq!(unescape_text(r"Line1\nLine2"), "Line1\nLine2");
        assert_eq!(unescape_text(r"Line1\NLine2"), "Line1\nLine2");
        assert_eq!(unescape_text(r"a\,b\;c\\d"), "a,b;c\\d");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }

    #[test]
    fn unescape_reverses_escape() {
        let original = "Room 1; floor 2, \"north\"\nbring a \\ laptop";
        assert_eq!(unescape_text(&escape_text(original)), original);
    }
}
