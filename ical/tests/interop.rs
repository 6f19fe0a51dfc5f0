// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the namespaced map form of `CalendarEvent`.

use jiff::Timestamp;
use nccal_ical::interop::{KEY_START_TIME, KEY_STATUS, KEY_SUMMARY, KEY_TIMEZONE};
use nccal_ical::{CalendarEvent, EventError, EventMap, EventStatus, InteropValue};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::default(),
        CalendarEvent::builder()
            .summary("Standup")
            .start_time(ts("2025-01-06T09:00:00Z"))
            .end_time(ts("2025-01-06T09:15:00.5Z"))
            .created_at(ts("2024-12-24T12:00:00Z"))
            .uid("standup@example.com")
            .url("https://example.com/standup")
            .description("Daily")
            .location("Online")
            .organizer("mailto:lead@example.com")
            .timezone("Asia/Tokyo")
            .status(EventStatus::Tentative)
            .build(),
        CalendarEvent::builder()
            .summary("")
            .status(EventStatus::Cancelled)
            .timezone("Not/AZone")
            .build(),
    ]
}

#[test]
fn test_map_round_trip() {
    for event in sample_events() {
        let map = event.to_map();
        assert_eq!(CalendarEvent::from_map(&map).unwrap(), event);
    }
}

#[test]
fn test_map_round_trip_through_json() {
    for event in sample_events() {
        let json = serde_json::to_string(&event.to_map()).unwrap();
        let map: EventMap = serde_json::from_str(&json).unwrap();
        assert_eq!(CalendarEvent::from_map(&map).unwrap(), event);
    }
}

#[test]
fn test_map_ignores_unknown_and_missing_keys() {
    let mut map = EventMap::new();
    map.insert(
        KEY_SUMMARY.to_string(),
        InteropValue::Text("Only this".to_string()),
    );
    map.insert(
        "app.other/flag".to_string(),
        InteropValue::Keyword("yes".to_string()),
    );

    let event = CalendarEvent::from_map(&map).unwrap();
    assert_eq!(event, CalendarEvent::builder().summary("Only this").build());
}

#[test]
fn test_map_nil_is_absent() {
    let mut map = CalendarEvent::builder().summary("x").build().to_map();
    map.insert(KEY_SUMMARY.to_string(), InteropValue::Nil);
    map.insert(KEY_STATUS.to_string(), InteropValue::Nil);

    let event = CalendarEvent::from_map(&map).unwrap();
    assert_eq!(event.summary(), None);
    assert_eq!(event.status(), EventStatus::Unknown);
}

#[test]
fn test_map_type_errors() {
    let mut map = EventMap::new();
    map.insert(
        KEY_START_TIME.to_string(),
        InteropValue::Text("2025-01-01".to_string()),
    );
    assert_eq!(
        CalendarEvent::from_map(&map),
        Err(EventError::InteropType {
            key: KEY_START_TIME.to_string(),
            expected: "instant",
            found: "text",
        })
    );

    let mut map = EventMap::new();
    map.insert(
        KEY_TIMEZONE.to_string(),
        InteropValue::Text("Europe/Paris".to_string()),
    );
    assert!(matches!(
        CalendarEvent::from_map(&map),
        Err(EventError::InteropType { expected: "zone", .. })
    ));

    let mut map = EventMap::new();
    map.insert(
        KEY_STATUS.to_string(),
        InteropValue::Keyword("ical.event.status/busy".to_string()),
    );
    assert!(matches!(
        CalendarEvent::from_map(&map),
        Err(EventError::InteropType { expected: "status keyword", .. })
    ));
}
