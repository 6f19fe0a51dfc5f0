// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for unfolded iCalendar content lines as defined in RFC 5545.

use std::fmt::{self, Display};
use std::ops::Range;

use logos::Logos;

/// A lexed token and its byte range in the content line.
pub(crate) type SpannedToken<'src> = (Result<Token<'src>, ()>, Range<usize>);

/// Tokenize a single unfolded content line.
pub(crate) fn tokenize(src: &str) -> impl Iterator<Item = SpannedToken<'_>> {
    Token::lexer(src).spanned()
}

/// Token emitted by the iCalendar lexer
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
pub(crate) enum Token<'a> {
    /// Double Quote ("), decimal codepoint 22
    #[token(r#"""#)]
    DQuote,

    /// Comma (,), decimal codepoint 44
    #[token(",")]
    Comma,

    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// ASCII symbols: sequences of printable ASCII characters
    #[regex(r#"[\t !#$%&'()*+./<>?@\[\\\]\^`\{|\}~]+"#)]
    Symbol(&'a str),

    /// ASCII word characters: 0-9, A-Z, a-z, underscore, hyphen
    #[regex("[0-9A-Za-z_-]+")]
    Word(&'a str),

    /// NON-US-ASCII  = UTF8-2 / UTF8-3 / UTF8-4
    #[regex(r#"[^\x00-\x7F]+"#)]
    UnicodeText(&'a str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DQuote => write!(f, "DQuote"),
            Self::Comma => write!(f, "Comma"),
            Self::Colon => write!(f, "Colon"),
            Self::Semicolon => write!(f, "Semicolon"),
            Self::Equal => write!(f, "Equal"),
            Self::Symbol(s) => write!(f, "Symbol({s})"),
            Self::Word(s) => write!(f, "Word({s})"),
            Self::UnicodeText(s) => write!(f, "UnicodeText({s})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token::*;
    use super::*;

    fn assert_tokenize(src: &str, expected: &[Token]) {
        let tokens: Vec<_> = tokenize(src).map(|(t, _)| t.unwrap()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn tokenizes_special_ascii_chars() {
        let src = r#";:=,"\_"#;
        let expected = [
            Semicolon,
            Colon,
            Equal,
            Comma,
            DQuote,
            Symbol(r"\"),
            Word("_"),
        ];
        assert_tokenize(src, &expected);
    }

    #[test]
    fn tokenizes_property_with_parameter() {
        let src = "DTSTART;TZID=Europe/Berlin:20250101T090000";
        let expected = [
            Word("DTSTART"),
            Semicolon,
            Word("TZID"),
            Equal,
            Word("Europe"),
            Symbol("/"),
            Word("Berlin"),
            Colon,
            Word("20250101T090000"),
        ];
        assert_tokenize(src, &expected);
    }

    #[test]
    fn tokenizes_unicode_text() {
        let src = "SUMMARY:Café";
        let expected = [Word("SUMMARY"), Colon, Word("Caf"), UnicodeText("é")];
        assert_tokenize(src, &expected);
    }

    #[test]
    fn reports_control_characters_as_errors() {
        let tokens: Vec<_> = tokenize("A\u{1}B").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Ok(Word("A")), Err(()), Ok(Word("B"))]);
    }
}
