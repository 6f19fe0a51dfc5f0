// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! VTIMEZONE generation from the IANA timezone database.

use jiff::tz::{Offset, TimeZone};
use jiff::{SignedDuration, Timestamp};

use crate::error::EventError;
use crate::keyword::{
    KW_DAYLIGHT, KW_DTSTART, KW_STANDARD, KW_TZID, KW_TZNAME, KW_TZOFFSETFROM, KW_TZOFFSETTO,
    KW_VTIMEZONE,
};
use crate::syntax::{Component, Property};
use crate::value::{format_local_date_time, format_utc_offset};

const DAY_SECS: i64 = 24 * 60 * 60;
const WINDOW_BEFORE: SignedDuration = SignedDuration::from_secs(366 * DAY_SECS);
const WINDOW_AFTER: SignedDuration = SignedDuration::from_secs(2 * 366 * DAY_SECS);

/// DTSTART of the single observance of a zone without transitions.
const EPOCH_LOCAL: &str = "19700101T000000";

/// Looks up an IANA timezone identifier.
///
/// # Errors
///
/// Returns [`EventError::UnknownTimezone`] when the identifier is not in the
/// timezone database.
pub fn resolve_zone(zone_id: &str) -> Result<TimeZone, EventError> {
    TimeZone::get(zone_id).map_err(|_| EventError::UnknownTimezone(zone_id.to_string()))
}

/// Builds a VTIMEZONE for `zone_id` covering one year before to two years
/// after `anchor`.
///
/// # Errors
///
/// Returns [`EventError::UnknownTimezone`] when the identifier is not in the
/// timezone database.
///
/// ```
/// let anchor = "2025-06-01T00:00:00Z".parse().unwrap();
/// let vtz = nccal_ical::vtimezone("Europe/Berlin", anchor).unwrap();
/// assert_eq!(vtz.property("TZID").unwrap().value, "Europe/Berlin");
/// assert!(vtz.child("DAYLIGHT").is_some());
/// assert!(vtz.child("STANDARD").is_some());
/// ```
pub fn vtimezone(zone_id: &str, anchor: Timestamp) -> Result<Component, EventError> {
    let tz = resolve_zone(zone_id)?;
    Ok(vtimezone_for(zone_id, &tz, anchor))
}

pub(crate) fn vtimezone_for(zone_id: &str, tz: &TimeZone, anchor: Timestamp) -> Component {
    let start = anchor.checked_sub(WINDOW_BEFORE).unwrap_or(Timestamp::MIN);
    let end = anchor.checked_add(WINDOW_AFTER).unwrap_or(Timestamp::MAX);

    let mut vtz = Component::new(KW_VTIMEZONE);
    vtz.push_property(Property::new(KW_TZID, zone_id));

    let in_effect = tz.preceding(start).next();
    let upcoming = tz.following(start).take_while(|t| t.timestamp() <= end);
    let mut observances = in_effect
        .into_iter()
        .chain(upcoming)
        .map(|t| Observance {
            onset: t.timestamp(),
            offset_from: offset_before(tz, t.timestamp()),
            offset_to: t.offset(),
            name: t.abbreviation().to_string(),
            daylight: t.dst().is_dst(),
        })
        .peekable();

    if observances.peek().is_none() {
        let info = tz.to_offset_info(anchor);
        let mut standard = Component::new(KW_STANDARD);
        standard
            .push_property(Property::new(KW_DTSTART, EPOCH_LOCAL))
            .push_property(Property::new(KW_TZOFFSETFROM, format_utc_offset(info.offset())))
            .push_property(Property::new(KW_TZOFFSETTO, format_utc_offset(info.offset())))
            .push_property(Property::new(KW_TZNAME, info.abbreviation()));
        vtz.push_child(standard);
        return vtz;
    }

    for observance in observances {
        vtz.push_child(observance.into_component());
    }
    vtz
}

fn offset_before(tz: &TimeZone, onset: Timestamp) -> Offset {
    onset
        .checked_sub(SignedDuration::from_secs(1))
        .map_or_else(|_| tz.to_offset(onset), |ts| tz.to_offset(ts))
}

/// One STANDARD or DAYLIGHT sub-component.
struct Observance {
    onset: Timestamp,
    offset_from: Offset,
    offset_to: Offset,
    name: String,
    daylight: bool,
}

impl Observance {
    fn into_component(self) -> Component {
        let kind = if self.daylight { KW_DAYLIGHT } else { KW_STANDARD };
        // DTSTART is the local time of the onset, before the change applies
        let local = format_local_date_time(self.onset, &TimeZone::fixed(self.offset_from));

        let mut component = Component::new(kind);
        component
            .push_property(Property::new(KW_DTSTART, local))
            .push_property(Property::new(KW_TZOFFSETFROM, format_utc_offset(self.offset_from)))
            .push_property(Property::new(KW_TZOFFSETTO, format_utc_offset(self.offset_to)));
        if !self.name.is_empty() {
            component.push_property(Property::new(KW_TZNAME, self.name));
        }
        component
    }
}
