// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for iCalendar content lines.
//!
//! Per RFC 5545, a content line has the format:
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! param       = param-name "=" param-value *("," param-value)
//! ```
//!
//! The scanner works on a single unfolded line. Only the name and parameters
//! are tokenized; the value is everything after the first unquoted colon.

use std::iter::Peekable;

use crate::syntax::lexer::{SpannedToken, Token, tokenize};
use crate::syntax::{Parameter, ParseError, ParseErrorKind};

/// A scanned iCalendar content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentLine {
    /// Property name, upper-cased
    pub name: String,
    /// Property parameters
    pub parameters: Vec<Parameter>,
    /// Raw property value
    pub value: String,
    /// 1-based line number
    pub line: usize,
}

/// Scan one unfolded content line.
pub(crate) fn scan_content_line(src: &str, line: usize) -> Result<ContentLine, ParseError> {
    let mut tokens = tokenize(src).peekable();

    let name = match tokens.next() {
        Some((Ok(Token::Word(name)), _)) => name.to_ascii_uppercase(),
        Some((Ok(Token::Colon | Token::Semicolon), _)) | None => {
            return Err(ParseError::new(line, ParseErrorKind::EmptyName));
        }
        Some((_, span)) => return Err(unexpected(line, &span)),
    };

    let mut parameters = Vec::new();
    loop {
        match tokens.next() {
            Some((Ok(Token::Colon), span)) => {
                let value = src.get(span.end..).unwrap_or_default().to_string();
                return Ok(ContentLine {
                    name,
                    parameters,
                    value,
                    line,
                });
            }
            Some((Ok(Token::Semicolon), _)) => {
                parameters.push(scan_parameter(src, &mut tokens, line)?);
            }
            Some((_, span)) => return Err(unexpected(line, &span)),
            None => return Err(ParseError::new(line, ParseErrorKind::MissingColon)),
        }
    }
}

fn scan_parameter<'src>(
    src: &'src str,
    tokens: &mut Peekable<impl Iterator<Item = SpannedToken<'src>>>,
    line: usize,
) -> Result<Parameter, ParseError> {
    let name = match tokens.next() {
        Some((Ok(Token::Word(name)), _)) => name.to_ascii_uppercase(),
        Some((_, span)) => return Err(unexpected(line, &span)),
        None => return Err(ParseError::new(line, ParseErrorKind::MissingColon)),
    };

    match tokens.next() {
        Some((Ok(Token::Equal), _)) => {}
        Some((_, span)) => return Err(unexpected(line, &span)),
        None => return Err(ParseError::new(line, ParseErrorKind::MissingColon)),
    }

    let mut values = vec![scan_parameter_value(src, tokens, line)?];
    while matches!(tokens.peek(), Some((Ok(Token::Comma), _))) {
        tokens.next();
        values.push(scan_parameter_value(src, tokens, line)?);
    }

    Ok(Parameter { name, values })
}

fn scan_parameter_value<'src>(
    src: &'src str,
    tokens: &mut Peekable<impl Iterator<Item = SpannedToken<'src>>>,
    line: usize,
) -> Result<String, ParseError> {
    if let Some((Ok(Token::DQuote), _)) = tokens.peek() {
        let start = tokens.next().map_or(src.len(), |(_, span)| span.end);
        for (token, span) in tokens.by_ref() {
            if token == Ok(Token::DQuote) {
                return Ok(src.get(start..span.start).unwrap_or_default().to_string());
            }
        }
        return Err(ParseError::new(line, ParseErrorKind::UnterminatedQuote));
    }

    let start = tokens.peek().map_or(src.len(), |(_, span)| span.start);
    let mut end = start;
    while let Some((token, span)) = tokens.peek() {
        match token {
            Ok(Token::Comma | Token::Semicolon | Token::Colon) => break,
            Ok(Token::DQuote) | Err(()) => return Err(unexpected(line, span)),
            Ok(_) => {
                end = span.end;
                tokens.next();
            }
        }
    }

    Ok(src.get(start..end).unwrap_or_default().to_string())
}

fn unexpected(line: usize, span: &std::ops::Range<usize>) -> ParseError {
    ParseError::new(line, ParseErrorKind::UnexpectedCharacter(span.start + 1))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn scans_simple_property() {
        let line = scan_content_line("summary:Team sync", 3).unwrap();
        assert_eq!(line.name, "SUMMARY");
        assert!(line.parameters.is_empty());
        assert_eq!(line.value, "Team sync");
        assert_eq!(line.line, 3);
    }

    #[test]
    fn keeps_colons_inside_value() {
        let line = scan_content_line("URL:https://example.com:8443/a", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8443/a");
    }

    #[test]
    fn scans_quoted_and_multi_valued_parameters() {
        let line = scan_content_line(
            r#"ORGANIZER;CN="Doe, Jane";X-ROLES=a,b:mailto:jane@example.com"#,
            1,
        )
        .unwrap();
        assert_eq!(line.parameters.len(), 2);
        assert_eq!(line.parameters[0].name, "CN");
        assert_eq!(line.parameters[0].values, vec!["Doe, Jane".to_string()]);
        assert_eq!(line.parameters[1].values, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(line.value, "mailto:jane@example.com");
    }

    #[test]
    fn rejects_missing_colon() {
        let err = scan_content_line("SUMMARY", 7).unwrap_err();
        assert_eq!(err, ParseError::new(7, ParseErrorKind::MissingColon));
    }

    #[test]
    fn rejects_empty_name() {
        let err = scan_content_line(":value", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyName);
    }

    #[test]
    fn rejects_unterminated_quote() {
        let err = scan_content_line(r#"X;CN="open:value"#, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    }
}
