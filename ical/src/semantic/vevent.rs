// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! VEVENT inside a VCALENDAR object.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::error::EventError;
use crate::event::{CalendarEvent, EventStatus};
use crate::formatter::format;
use crate::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART,
    KW_LOCATION, KW_ORGANIZER, KW_PRODID, KW_STATUS, KW_SUMMARY, KW_TZID, KW_UID, KW_URL,
    KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0, KW_VEVENT, KW_VTIMEZONE,
};
use crate::semantic::vtimezone::{resolve_zone, vtimezone_for};
use crate::syntax::{Component, Property, parse};
use crate::value::{escape_text, format_utc_date_time, parse_date_time, unescape_text};

/// Value of the PRODID header written on every calendar object.
pub const PRODUCT_ID: &str = "-//nccal//NONSGML nextcloud connector//EN";

/// Fixed trailing marker of generated UIDs.
pub const UID_MARKER: &str = "nextcloud";

/// Generates a fresh UID: `<UTC now>-<uuid v4>-nextcloud`.
///
/// ```
/// let a = nccal_ical::generate_uid();
/// let b = nccal_ical::generate_uid();
/// assert_ne!(a, b);
/// assert!(a.ends_with("-nextcloud"));
/// ```
#[must_use]
pub fn generate_uid() -> String {
    format!(
        "{}-{}-{UID_MARKER}",
        format_utc_date_time(Timestamp::now()),
        uuid::Uuid::new_v4()
    )
}

impl CalendarEvent {
    /// Decodes the first VEVENT of an iCalendar text.
    ///
    /// # Errors
    ///
    /// Fails on a syntax error, when there is no VCALENDAR or VEVENT, or when
    /// a date-time value cannot be read.
    pub fn from_ics(src: &str) -> Result<Self, EventError> {
        let roots = parse(src)?;
        let calendar = roots
            .iter()
            .find(|c| c.name == KW_VCALENDAR)
            .ok_or(EventError::MissingComponent(KW_VCALENDAR))?;
        decode_calendar(calendar)
    }

    /// Encodes the event as a complete iCalendar text.
    ///
    /// # Errors
    ///
    /// See [`encode_calendar`].
    pub fn to_ics(&self) -> Result<String, EventError> {
        let calendar = encode_calendar(self)?;
        format(&calendar).map_err(|e| EventError::MalformedEvent(e.to_string()))
    }
}

/// Decodes a VCALENDAR component into an event.
///
/// Floating date-times and DATE values, as well as those whose TZID cannot
/// be resolved, are read in the calendar's VTIMEZONE zone, or UTC without one.
///
/// # Errors
///
/// Fails when `calendar` is not a VCALENDAR or has no VEVENT, or when a
/// date-time value cannot be read.
pub fn decode_calendar(calendar: &Component) -> Result<CalendarEvent, EventError> {
    if calendar.name != KW_VCALENDAR {
        return Err(EventError::MissingComponent(KW_VCALENDAR));
    }

    let vevent = calendar
        .child(KW_VEVENT)
        .ok_or(EventError::MissingComponent(KW_VEVENT))?;
    let vevents = calendar
        .children
        .iter()
        .filter(|c| c.name == KW_VEVENT)
        .count();
    if vevents > 1 {
        tracing::warn!(count = vevents, "calendar object holds several events, reading the first");
    }

    let timezone = calendar
        .child(KW_VTIMEZONE)
        .and_then(|vtz| vtz.property(KW_TZID))
        .and_then(|tzid| match resolve_zone(&tzid.value) {
            Ok(tz) => Some((tzid.value.clone(), tz)),
            Err(_) => {
                tracing::warn!(tzid = %tzid.value, "ignoring VTIMEZONE with unknown TZID");
                None
            }
        });
    let default_tz = timezone
        .as_ref()
        .map_or(TimeZone::UTC, |(_, tz)| tz.clone());

    let text = |name: &str| vevent.property(name).map(|p| unescape_text(&p.value));
    let raw = |name: &str| vevent.property(name).map(|p| p.value.clone());
    let instant = |name: &'static str| -> Result<Option<Timestamp>, EventError> {
        vevent
            .property(name)
            .map(|p| read_instant(name, p, &default_tz))
            .transpose()
    };

    let status = vevent
        .property(KW_STATUS)
        .map_or(EventStatus::Unknown, |p| EventStatus::from_wire(&p.value));

    Ok(CalendarEvent::default()
        .with_summary(text(KW_SUMMARY))
        .with_start_time(instant(KW_DTSTART)?)
        .with_end_time(instant(KW_DTEND)?)
        .with_created_at(instant(KW_DTSTAMP)?)
        .with_uid(text(KW_UID))
        .with_url(raw(KW_URL))
        .with_description(text(KW_DESCRIPTION))
        .with_location(text(KW_LOCATION))
        .with_organizer(raw(KW_ORGANIZER))
        .with_timezone(timezone.map(|(id, _)| id))
        .with_status(status))
}

fn read_instant(
    name: &'static str,
    property: &Property,
    default_tz: &TimeZone,
) -> Result<Timestamp, EventError> {
    let tz = match property.parameter(KW_TZID) {
        Some(tzid) => resolve_zone(tzid).unwrap_or_else(|_| {
            tracing::warn!(property = name, tzid, "unknown TZID, using calendar default");
            default_tz.clone()
        }),
        None => default_tz.clone(),
    };

    parse_date_time(&property.value, &tz).map_err(|_| EventError::InvalidValue {
        property: name,
        value: property.value.clone(),
    })
}

/// Encodes an event as a VCALENDAR component with its VEVENT and, when the
/// event names a timezone, a VTIMEZONE.
///
/// A missing UID is replaced by [`generate_uid`], a missing creation stamp by
/// the current time.
///
/// # Errors
///
/// Returns [`EventError::UnknownTimezone`] when the timezone cannot be
/// resolved and [`EventError::MalformedEvent`] when the VEVENT breaks the
/// component rules of RFC 5545.
pub fn encode_calendar(event: &CalendarEvent) -> Result<Component, EventError> {
    let zone = event
        .timezone()
        .map(|id| resolve_zone(id).map(|tz| (id, tz)))
        .transpose()?;

    let created_at = event.created_at().unwrap_or_else(Timestamp::now);
    let uid = event.uid().map_or_else(generate_uid, ToString::to_string);

    let mut vevent = Component::new(KW_VEVENT);
    vevent
        .push_property(Property::new(KW_UID, escape_text(&uid)))
        .push_property(Property::new(KW_DTSTAMP, format_utc_date_time(created_at)));

    // UTC even with a VTIMEZONE: local times in the repeated hour are ambiguous
    if let Some(start) = event.start_time() {
        vevent.push_property(Property::new(KW_DTSTART, format_utc_date_time(start)));
    }
    if let Some(end) = event.end_time() {
        vevent.push_property(Property::new(KW_DTEND, format_utc_date_time(end)));
    }

    let texts = [
        (KW_SUMMARY, event.summary()),
        (KW_DESCRIPTION, event.description()),
        (KW_LOCATION, event.location()),
    ];
    for (name, value) in texts {
        if let Some(value) = value {
            vevent.push_property(Property::new(name, escape_text(value)));
        }
    }
    if let Some(organizer) = event.organizer() {
        vevent.push_property(Property::new(KW_ORGANIZER, organizer));
    }
    if let Some(url) = event.url() {
        vevent.push_property(Property::new(KW_URL, url));
    }
    if let Some(status) = event.status().as_wire() {
        vevent.push_property(Property::new(KW_STATUS, status));
    }

    validate(event, &uid)?;

    let mut calendar = Component::new(KW_VCALENDAR);
    calendar
        .push_property(Property::new(KW_PRODID, PRODUCT_ID))
        .push_property(Property::new(KW_VERSION, KW_VERSION_2_0))
        .push_property(Property::new(KW_CALSCALE, KW_CALSCALE_GREGORIAN));

    if let Some((id, tz)) = &zone {
        let anchor = event.start_time().unwrap_or(created_at);
        calendar.push_child(vtimezone_for(id, tz, anchor));
    }
    calendar.push_child(vevent);
    Ok(calendar)
}

fn validate(event: &CalendarEvent, uid: &str) -> Result<(), EventError> {
    let malformed = |msg: &str| Err(EventError::MalformedEvent(msg.to_string()));

    if uid.trim().is_empty() {
        return malformed("UID must not be empty");
    }
    match (event.start_time(), event.end_time()) {
        (None, Some(_)) => return malformed("DTEND requires DTSTART"),
        (Some(start), Some(end)) if end < start => {
            return malformed("DTEND must not be before DTSTART");
        }
        _ => {}
    }
    if event.url().is_some_and(|url| !has_uri_scheme(url)) {
        return malformed("URL must be an absolute URI");
    }
    for (name, value) in [(KW_ORGANIZER, event.organizer()), (KW_URL, event.url())] {
        if value.is_some_and(|v| v.chars().any(char::is_control)) {
            return Err(EventError::MalformedEvent(format!(
                "{name} must not contain control characters"
            )));
        }
    }
    Ok(())
}

/// `scheme ":" ...` with `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` (RFC 3986 §3.1).
fn has_uri_scheme(uri: &str) -> bool {
    let Some((scheme, _)) = uri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_scheme_check() {
        assert!(has_uri_scheme("https://example.com/x"));
        assert!(has_uri_scheme("mailto:jane@example.com"));
        assert!(has_uri_scheme("urn:uuid:1234"));
        assert!(!has_uri_scheme("example.com/x"));
        assert!(!has_uri_scheme("1http://x"));
        assert!(!has_uri_scheme(":nothing"));
    }

    #[test]
    fn generated_uid_shape() {
        let uid = generate_uid();
        let (stamp, rest) = uid.split_once('-').unwrap();
        assert_eq!(stamp.len(), "20250101T000000Z".len());
        assert!(stamp.ends_with('Z'));
        let token = rest.strip_suffix("-nextcloud").unwrap();
        assert!(uuid::Uuid::parse_str(token).is_ok());
    }

    #[test]
    fn rejects_non_calendar_root() {
        let err = decode_calendar(&Component::new(KW_VEVENT)).unwrap_err();
        assert_eq!(err, EventError::MissingComponent(KW_VCALENDAR));
    }
}
