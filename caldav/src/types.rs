// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use nccal_ical::CalendarEvent;

use crate::error::CalDavError;

/// Calendar resource href (path).
///
/// A `Href` represents the path to a resource on a `CalDAV` server,
/// such as `/remote.php/dav/calendars/jane/personal/event1.ics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Href(String);

impl Href {
    /// Creates a new `Href` from a string.
    #[must_use]
    pub const fn new(href: String) -> Self {
        Self(href)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Href {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Href {
    fn from(href: &str) -> Self {
        Self(href.to_string())
    }
}

/// Entity tag of a resource, or `getctag` of a collection.
///
/// Opaque to the client: it is captured from responses but never sent back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ETag(String);

impl ETag {
    /// Creates a new `ETag` from a string.
    #[must_use]
    pub const fn new(etag: String) -> Self {
        Self(etag)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ETag {
    fn from(etag: &str) -> Self {
        Self(etag.to_string())
    }
}

/// A calendar collection found by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCollection {
    /// The href of the collection.
    pub href: Href,
    /// The `displayname` property.
    pub display_name: Option<String>,
    /// The `getctag` property.
    pub ctag: Option<ETag>,
}

/// One item of a calendar listing, with its own outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarResource {
    /// The href of the resource.
    pub href: Href,
    /// HTTP status code reported for this item, if any could be read.
    pub status: Option<u16>,
    /// The entity tag of the resource.
    pub etag: Option<ETag>,
    /// The raw iCalendar body.
    pub calendar_data: Option<String>,
}

impl CalendarResource {
    /// Whether the server reported `200 OK` for this item.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Some(200)
    }

    /// Decodes the calendar body.
    ///
    /// # Errors
    ///
    /// Returns an error if the item carries no calendar data or the data
    /// cannot be decoded.
    pub fn event(&self) -> Result<CalendarEvent, CalDavError> {
        let data = self.calendar_data.as_deref().ok_or_else(|| {
            CalDavError::InvalidResponse(format!("no calendar-data for {}", self.href))
        })?;
        Ok(CalendarEvent::from_ics(data)?)
    }
}
