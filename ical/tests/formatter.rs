// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the iCalendar formatter.

use nccal_ical::formatter::{FoldingStyle, FormatOptions, format};
use nccal_ical::{Component, Property, parse};

#[test]
fn test_format_simple_event() {
    let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp.//Cal Client 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
DTSTART;TZID=Europe/Berlin:20250110T140000\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    let calendars = parse(input).unwrap();
    let formatted = format(&calendars[0]).unwrap();
    assert_eq!(formatted, input);
}

#[test]
fn test_format_quotes_parameter_values() {
    let property = Property::new("ORGANIZER", "mailto:jane@example.com")
        .with_parameter("CN", "Doe, Jane");
    let mut event = Component::new("VEVENT");
    event.push_property(property);

    let formatted = format(&event).unwrap();
    assert!(formatted.contains("ORGANIZER;CN=\"Doe, Jane\":mailto:jane@example.com\r\n"));

    let reparsed = parse(&formatted).unwrap();
    assert_eq!(reparsed[0], event);
}

#[test]
fn test_format_folds_long_lines() {
    let long = "x".repeat(200);
    let mut event = Component::new("VEVENT");
    event.push_property(Property::new("DESCRIPTION", long.clone()));

    let formatted = format(&event).unwrap();
    for line in formatted.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {}", line.len());
    }

    let reparsed = parse(&formatted).unwrap();
    assert_eq!(reparsed[0].property("DESCRIPTION").unwrap().value, long);
}

#[test]
fn test_format_folding_options() {
    let mut event = Component::new("VEVENT");
    event.push_property(Property::new("SUMMARY", "abcdefghij"));

    let unfolded = FormatOptions::default()
        .folding(None)
        .write_to_string(&event)
        .unwrap();
    assert!(unfolded.contains("SUMMARY:abcdefghij\r\n"));

    let tabbed = FormatOptions::default()
        .folding(Some(10))
        .folding_style(FoldingStyle::Tab)
        .write_to_string(&event)
        .unwrap();
    assert!(tabbed.contains("SUMMARY:ab\r\n\tcdefghij\r\n"));
    assert_eq!(parse(&tabbed).unwrap()[0], event);
}

#[test]
fn test_format_does_not_split_multibyte_characters() {
    let summary = "\u{1f4c5}".repeat(40);
    let mut event = Component::new("VEVENT");
    event.push_property(Property::new("SUMMARY", summary.clone()));

    let formatted = format(&event).unwrap();
    let reparsed = parse(&formatted).unwrap();
    assert_eq!(reparsed[0].property("SUMMARY").unwrap().value, summary);
}
