// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DATE, DATE-TIME and UTC-OFFSET values (RFC 5545 §3.3.4, §3.3.5, §3.3.14).

use jiff::civil::{Date, DateTime};
use jiff::tz::{Offset, TimeZone};
use jiff::Timestamp;

const FORMAT_DATE: &str = "%Y%m%d";
const DATE_LEN: usize = 8;
const FORMAT_LOCAL_DATE_TIME: &str = "%Y%m%dT%H%M%S";
const FORMAT_UTC_DATE_TIME: &str = "%Y%m%dT%H%M%SZ";

/// A DATE or DATE-TIME value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date-time value '{0}'")]
pub struct ValueError(pub String);

/// Formats an instant as a UTC DATE-TIME, e.g. `20250101T120000Z`.
#[must_use]
pub fn format_utc_date_time(timestamp: Timestamp) -> String {
    timestamp.strftime(FORMAT_UTC_DATE_TIME).to_string()
}

/// Formats an instant as a local DATE-TIME in `tz`, e.g. `20250101T130000`.
#[must_use]
pub fn format_local_date_time(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime(FORMAT_LOCAL_DATE_TIME)
        .to_string()
}

/// Formats a UTC offset as `+HHMM`, or `+HHMMSS` when seconds are present.
#[must_use]
pub fn format_utc_offset(offset: Offset) -> String {
    let total = offset.seconds();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}{seconds:02}")
    }
}

/// Parses a DATE or DATE-TIME value into an instant.
///
/// A trailing `Z` means UTC. Floating date-times and DATE values (taken as
/// midnight) are interpreted in `tz`.
///
/// # Errors
///
/// Returns an error if the value is not a valid DATE or DATE-TIME.
pub fn parse_date_time(value: &str, tz: &TimeZone) -> Result<Timestamp, ValueError> {
    let value = value.trim();
    let invalid = || ValueError(value.to_string());

    let zoned = if let Some(utc) = value.strip_suffix(['Z', 'z']) {
        DateTime::strptime(FORMAT_LOCAL_DATE_TIME, utc)
            .and_then(|dt| dt.to_zoned(TimeZone::UTC))
            .map_err(|_| invalid())?
    } else if value.len() == DATE_LEN {
        Date::strptime(FORMAT_DATE, value)
            .and_then(|date| date.to_zoned(tz.clone()))
            .map_err(|_| invalid())?
    } else {
        DateTime::strptime(FORMAT_LOCAL_DATE_TIME, value)
            .and_then(|dt| dt.to_zoned(tz.clone()))
            .map_err(|_| invalid())?
    };

    Ok(zoned.timestamp())
}
