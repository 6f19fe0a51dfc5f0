// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Flat, namespaced key/value form of a [`CalendarEvent`] for exchange with
//! a dynamically-typed runtime.
//!
//! Every field lives under a fixed key in the `ical.event` namespace. Values
//! are tagged so that a host runtime can map them onto its own types:
//!
//! ```json
//! {
//!   "ical.event/summary": { "type": "text", "value": "Standup" },
//!   "ical.event/start-time": { "type": "instant", "value": "2025-01-01T09:00:00Z" },
//!   "ical.event/status": { "type": "keyword", "value": "ical.event.status/confirmed" },
//!   "ical.event/url": { "type": "nil" }
//! }
//! ```

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::EventError;
use crate::event::{CalendarEvent, EventStatus};

/// Version of the key schema below.
pub const SCHEMA_VERSION: u32 = 1;

/// Key of [`CalendarEvent::summary`].
pub const KEY_SUMMARY: &str = "ical.event/summary";
/// Key of [`CalendarEvent::start_time`].
pub const KEY_START_TIME: &str = "ical.event/start-time";
/// Key of [`CalendarEvent::end_time`].
pub const KEY_END_TIME: &str = "ical.event/end-time";
/// Key of [`CalendarEvent::created_at`].
pub const KEY_CREATED_AT: &str = "ical.event/created-at";
/// Key of [`CalendarEvent::uid`].
pub const KEY_UID: &str = "ical.event/uid";
/// Key of [`CalendarEvent::url`].
pub const KEY_URL: &str = "ical.event/url";
/// Key of [`CalendarEvent::description`].
pub const KEY_DESCRIPTION: &str = "ical.event/description";
/// Key of [`CalendarEvent::location`].
pub const KEY_LOCATION: &str = "ical.event/location";
/// Key of [`CalendarEvent::organizer`].
pub const KEY_ORGANIZER: &str = "ical.event/organizer";
/// Key of [`CalendarEvent::status`].
pub const KEY_STATUS: &str = "ical.event/status";
/// Key of [`CalendarEvent::timezone`].
pub const KEY_TIMEZONE: &str = "ical.event/timezone";

/// Every key written by [`CalendarEvent::to_map`].
pub const KEYS: [&str; 11] = [
    KEY_SUMMARY,
    KEY_START_TIME,
    KEY_END_TIME,
    KEY_CREATED_AT,
    KEY_UID,
    KEY_URL,
    KEY_DESCRIPTION,
    KEY_LOCATION,
    KEY_ORGANIZER,
    KEY_STATUS,
    KEY_TIMEZONE,
];

const STATUS_NAMESPACE: &str = "ical.event.status";

/// The map form of an event.
pub type EventMap = BTreeMap<String, InteropValue>;

/// A tagged value in an [`EventMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum InteropValue {
    /// Absent field.
    Nil,
    /// Free text.
    Text(String),
    /// Point in time.
    Instant(Timestamp),
    /// Namespaced keyword, e.g. `ical.event.status/confirmed`.
    Keyword(String),
    /// IANA timezone identifier.
    Zone(String),
}

impl InteropValue {
    /// Name of the variant, as used in the serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Text(_) => "text",
            Self::Instant(_) => "instant",
            Self::Keyword(_) => "keyword",
            Self::Zone(_) => "zone",
        }
    }
}

impl EventStatus {
    /// Namespaced keyword, e.g. `ical.event.status/tentative`.
    #[must_use]
    pub fn keyword(self) -> String {
        format!("{STATUS_NAMESPACE}/{}", self.as_ref())
    }

    /// Reverse of [`EventStatus::keyword`].
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::iter().find(|status| status.keyword() == keyword)
    }
}

impl CalendarEvent {
    /// Writes every field under its key; absent fields become [`InteropValue::Nil`].
    #[must_use]
    pub fn to_map(&self) -> EventMap {
        let text = |v: Option<&str>| v.map_or(InteropValue::Nil, |v| InteropValue::Text(v.to_string()));
        let instant = |v: Option<Timestamp>| v.map_or(InteropValue::Nil, InteropValue::Instant);

        [
            (KEY_SUMMARY, text(self.summary())),
            (KEY_START_TIME, instant(self.start_time())),
            (KEY_END_TIME, instant(self.end_time())),
            (KEY_CREATED_AT, instant(self.created_at())),
            (KEY_UID, text(self.uid())),
            (KEY_URL, text(self.url())),
            (KEY_DESCRIPTION, text(self.description())),
            (KEY_LOCATION, text(self.location())),
            (KEY_ORGANIZER, text(self.organizer())),
            (KEY_STATUS, InteropValue::Keyword(self.status().keyword())),
            (
                KEY_TIMEZONE,
                self.timezone()
                    .map_or(InteropValue::Nil, |tz| InteropValue::Zone(tz.to_string())),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Reads an event from its map form.
    ///
    /// Unknown keys are ignored. A missing key or [`InteropValue::Nil`] is an
    /// absent field, and a missing status is [`EventStatus::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InteropType`] when a known key holds a value of
    /// the wrong kind, or the status keyword is not one of the four statuses.
    pub fn from_map(map: &EventMap) -> Result<Self, EventError> {
        let reader = MapReader(map);
        let status = match reader.keyword(KEY_STATUS)? {
            None => EventStatus::Unknown,
            Some(kw) => EventStatus::from_keyword(kw).ok_or_else(|| EventError::InteropType {
                key: KEY_STATUS.to_string(),
                expected: "status keyword",
                found: "keyword",
            })?,
        };

        Ok(Self::default()
            .with_summary(reader.text(KEY_SUMMARY)?)
            .with_start_time(reader.instant(KEY_START_TIME)?)
            .with_end_time(reader.instant(KEY_END_TIME)?)
            .with_created_at(reader.instant(KEY_CREATED_AT)?)
            .with_uid(reader.text(KEY_UID)?)
            .with_url(reader.text(KEY_URL)?)
            .with_description(reader.text(KEY_DESCRIPTION)?)
            .with_location(reader.text(KEY_LOCATION)?)
            .with_organizer(reader.text(KEY_ORGANIZER)?)
            .with_timezone(reader.zone(KEY_TIMEZONE)?)
            .with_status(status))
    }
}

struct MapReader<'a>(&'a EventMap);

impl MapReader<'_> {
    fn get(&self, key: &str) -> Option<&InteropValue> {
        self.0.get(key).filter(|v| **v != InteropValue::Nil)
    }

    fn text(&self, key: &str) -> Result<Option<String>, EventError> {
        match self.get(key) {
            None => Ok(None),
            Some(InteropValue::Text(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(key, "text", other)),
        }
    }

    fn instant(&self, key: &str) -> Result<Option<Timestamp>, EventError> {
        match self.get(key) {
            None => Ok(None),
            Some(InteropValue::Instant(ts)) => Ok(Some(*ts)),
            Some(other) => Err(mismatch(key, "instant", other)),
        }
    }

    fn keyword(&self, key: &str) -> Result<Option<&str>, EventError> {
        match self.get(key) {
            None => Ok(None),
            Some(InteropValue::Keyword(kw)) => Ok(Some(kw.as_str())),
            Some(other) => Err(mismatch(key, "keyword", other)),
        }
    }

    fn zone(&self, key: &str) -> Result<Option<String>, EventError> {
        match self.get(key) {
            None => Ok(None),
            Some(InteropValue::Zone(tz)) => Ok(Some(tz.clone())),
            Some(other) => Err(mismatch(key, "zone", other)),
        }
    }
}

fn mismatch(key: &str, expected: &'static str, found: &InteropValue) -> EventError {
    EventError::InteropType {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keywords() {
        assert_eq!(EventStatus::Cancelled.keyword(), "ical.event.status/cancelled");
        for status in EventStatus::iter() {
            assert_eq!(EventStatus::from_keyword(&status.keyword()), Some(status));
        }
        assert_eq!(EventStatus::from_keyword("ical.event.status/busy"), None);
        assert_eq!(EventStatus::from_keyword("confirmed"), None);
    }

    #[test]
    fn to_map_writes_every_key() {
        let map = CalendarEvent::default().to_map();
        assert_eq!(map.len(), KEYS.len());
        for key in KEYS {
            assert!(map.contains_key(key), "missing {key}");
        }
        assert_eq!(map[KEY_SUMMARY], InteropValue::Nil);
        assert_eq!(
            map[KEY_STATUS],
            InteropValue::Keyword("ical.event.status/unknown".to_string())
        );
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(InteropValue::Text("hi".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "text", "value": "hi" }));

        let json = serde_json::to_value(InteropValue::Nil).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "nil" }));
    }
}
