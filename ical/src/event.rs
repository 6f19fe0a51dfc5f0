// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The canonical calendar event value.

use jiff::Timestamp;

use crate::keyword::{KW_EVENT_STATUS_CANCELLED, KW_EVENT_STATUS_CONFIRMED, KW_EVENT_STATUS_TENTATIVE};
use crate::semantic::generate_uid;

/// Status of an event.
///
/// `Unknown` covers both an absent STATUS property and any value without a
/// VEVENT equivalent; it is never written to iCalendar.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    /// No status, or a status this model does not know.
    #[default]
    Unknown,
    /// Event is tentative.
    Tentative,
    /// Event is cancelled.
    Cancelled,
    /// Event is confirmed.
    Confirmed,
}

impl EventStatus {
    /// The STATUS property value, or `None` for [`EventStatus::Unknown`].
    #[must_use]
    pub const fn as_wire(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Tentative => Some(KW_EVENT_STATUS_TENTATIVE),
            Self::Cancelled => Some(KW_EVENT_STATUS_CANCELLED),
            Self::Confirmed => Some(KW_EVENT_STATUS_CONFIRMED),
        }
    }

    /// Maps a STATUS property value; anything unrecognized is `Unknown`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(KW_EVENT_STATUS_CONFIRMED) {
            Self::Confirmed
        } else if value.eq_ignore_ascii_case(KW_EVENT_STATUS_CANCELLED) {
            Self::Cancelled
        } else if value.eq_ignore_ascii_case(KW_EVENT_STATUS_TENTATIVE) {
            Self::Tentative
        } else {
            Self::Unknown
        }
    }
}

/// A calendar event.
///
/// Values are immutable: every `with_*` method returns a new event. Equality
/// and hashing are structural over all fields. Two events denote the same
/// server resource when their UIDs are equal, see [`CalendarEvent::is_same_resource`].
///
/// # Example
///
/// ```
/// use nccal_ical::{CalendarEvent, EventStatus};
///
/// let event = CalendarEvent::builder()
///     .summary("Planning")
///     .start_time("2025-01-01T09:00:00Z".parse().unwrap())
///     .end_time("2025-01-01T10:00:00Z".parse().unwrap())
///     .status(EventStatus::Confirmed)
///     .build();
///
/// let moved = event.clone().with_location(Some("Room 4".to_string()));
/// assert_ne!(event, moved);
/// assert_eq!(moved.location(), Some("Room 4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CalendarEvent {
    summary: Option<String>,
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    created_at: Option<Timestamp>,
    uid: Option<String>,
    url: Option<String>,
    description: Option<String>,
    location: Option<String>,
    organizer: Option<String>,
    timezone: Option<String>,
    status: EventStatus,
}

impl CalendarEvent {
    /// Starts building an event with every field absent.
    #[must_use]
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::default()
    }

    /// Short summary (title).
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Start instant.
    #[must_use]
    pub const fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// End instant.
    #[must_use]
    pub const fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    /// Creation stamp, carried as DTSTAMP.
    #[must_use]
    pub const fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    /// Stable identifier.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// Associated URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Long description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Location.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Organizer calendar address, e.g. `mailto:jane@example.com`.
    #[must_use]
    pub fn organizer(&self) -> Option<&str> {
        self.organizer.as_deref()
    }

    /// IANA timezone identifier.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Status.
    #[must_use]
    pub const fn status(&self) -> EventStatus {
        self.status
    }

    /// Returns a copy with the summary replaced.
    #[must_use]
    pub fn with_summary(self, summary: Option<String>) -> Self {
        Self { summary, ..self }
    }

    /// Returns a copy with the start time replaced.
    #[must_use]
    pub fn with_start_time(self, start_time: Option<Timestamp>) -> Self {
        Self { start_time, ..self }
    }

    /// Returns a copy with the end time replaced.
    #[must_use]
    pub fn with_end_time(self, end_time: Option<Timestamp>) -> Self {
        Self { end_time, ..self }
    }

    /// Returns a copy with the creation stamp replaced.
    #[must_use]
    pub fn with_created_at(self, created_at: Option<Timestamp>) -> Self {
        Self { created_at, ..self }
    }

    /// Returns a copy with the UID replaced.
    #[must_use]
    pub fn with_uid(self, uid: Option<String>) -> Self {
        Self { uid, ..self }
    }

    /// Returns a copy with the URL replaced.
    #[must_use]
    pub fn with_url(self, url: Option<String>) -> Self {
        Self { url, ..self }
    }

    /// Returns a copy with the description replaced.
    #[must_use]
    pub fn with_description(self, description: Option<String>) -> Self {
        Self { description, ..self }
    }

    /// Returns a copy with the location replaced.
    #[must_use]
    pub fn with_location(self, location: Option<String>) -> Self {
        Self { location, ..self }
    }

    /// Returns a copy with the organizer replaced.
    #[must_use]
    pub fn with_organizer(self, organizer: Option<String>) -> Self {
        Self { organizer, ..self }
    }

    /// Returns a copy with the timezone replaced.
    #[must_use]
    pub fn with_timezone(self, timezone: Option<String>) -> Self {
        Self { timezone, ..self }
    }

    /// Returns a copy with the status replaced.
    #[must_use]
    pub fn with_status(self, status: EventStatus) -> Self {
        Self { status, ..self }
    }

    /// Returns the event unchanged if it has a UID, otherwise with a freshly
    /// generated one (see [`generate_uid`]).
    #[must_use]
    pub fn with_generated_uid(self) -> Self {
        match self.uid {
            Some(_) => self,
            None => self.with_uid(Some(generate_uid())),
        }
    }

    /// Whether both events carry the same UID.
    #[must_use]
    pub fn is_same_resource(&self, other: &Self) -> bool {
        self.uid.is_some() && self.uid == other.uid
    }
}

/// Builder for [`CalendarEvent`].
#[derive(Debug, Clone, Default)]
pub struct CalendarEventBuilder {
    event: CalendarEvent,
}

impl CalendarEventBuilder {
    /// Sets the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.event.summary = Some(summary.into());
        self
    }

    /// Sets the start instant.
    #[must_use]
    pub const fn start_time(mut self, start_time: Timestamp) -> Self {
        self.event.start_time = Some(start_time);
        self
    }

    /// Sets the end instant.
    #[must_use]
    pub const fn end_time(mut self, end_time: Timestamp) -> Self {
        self.event.end_time = Some(end_time);
        self
    }

    /// Sets the creation stamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: Timestamp) -> Self {
        self.event.created_at = Some(created_at);
        self
    }

    /// Sets the UID.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.event.uid = Some(uid.into());
        self
    }

    /// Sets the URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.event.url = Some(url.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.event.description = Some(description.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.event.location = Some(location.into());
        self
    }

    /// Sets the organizer.
    #[must_use]
    pub fn organizer(mut self, organizer: impl Into<String>) -> Self {
        self.event.organizer = Some(organizer.into());
        self
    }

    /// Sets the IANA timezone identifier.
    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.event.timezone = Some(timezone.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn status(mut self, status: EventStatus) -> Self {
        self.event.status = status;
        self
    }

    /// Finishes the event.
    #[must_use]
    pub fn build(self) -> CalendarEvent {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn status_wire_mapping() {
        assert_eq!(EventStatus::from_wire("CONFIRMED"), EventStatus::Confirmed);
        assert_eq!(EventStatus::from_wire("cancelled"), EventStatus::Cancelled);
        assert_eq!(EventStatus::from_wire(" TENTATIVE "), EventStatus::Tentative);
        assert_eq!(EventStatus::from_wire("NEEDS-ACTION"), EventStatus::Unknown);
        assert_eq!(EventStatus::Unknown.as_wire(), None);

        for status in EventStatus::iter().filter(|s| *s != EventStatus::Unknown) {
            let wire = status.as_wire().unwrap();
            assert_eq!(EventStatus::from_wire(wire), status);
        }
    }

    #[test]
    fn status_names() {
        assert_eq!(EventStatus::Confirmed.as_ref(), "confirmed");
        assert_eq!(EventStatus::from_str("tentative"), Ok(EventStatus::Tentative));
        assert!(EventStatus::from_str("busy").is_err());
    }

    #[test]
    fn with_methods_produce_new_values() {
        let base = CalendarEvent::builder().summary("a").uid("1").build();
        let changed = base.clone().with_summary(Some("b".to_string()));

        assert_eq!(base.summary(), Some("a"));
        assert_eq!(changed.summary(), Some("b"));
        assert_eq!(changed.uid(), Some("1"));
        assert!(base.is_same_resource(&changed));
        assert_ne!(base, changed);
    }

    #[test]
    fn equal_events_hash_equally() {
        let a = CalendarEvent::builder().summary("x").uid("1").build();
        let b = CalendarEvent::builder().uid("1").summary("x").build();
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn events_without_uid_are_never_the_same_resource() {
        let a = CalendarEvent::default();
        assert!(!a.is_same_resource(&a.clone()));
    }

    #[test]
    fn generated_uid_only_when_missing() {
        let kept = CalendarEvent::builder().uid("fixed").build().with_generated_uid();
        assert_eq!(kept.uid(), Some("fixed"));

        let generated = CalendarEvent::default().with_generated_uid();
        assert!(generated.uid().is_some_and(|uid| !uid.is_empty()));
    }
}
