// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request bodies for `CalDAV` operations.

use std::io::Cursor;

use nccal_ical::keyword::{KW_UID, KW_VCALENDAR, KW_VEVENT};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::CalDavError;
use crate::xml::ns;

/// `allprop` PROPFIND request builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropFindRequest;

impl PropFindRequest {
    /// Creates an `allprop` PROPFIND.
    #[must_use]
    pub const fn all_props() -> Self {
        Self
    }

    /// Builds the XML body for the PROPFIND request.
    ///
    /// # Errors
    ///
    /// Returns an error if XML building fails.
    pub fn build(&self) -> Result<String, CalDavError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        // <D:propfind xmlns:D="DAV:">
        let mut propfind = BytesStart::new("D:propfind");
        propfind.push_attribute(("xmlns:D", ns::DAV));
        writer.write_event(Event::Start(propfind))?;
        writer.write_event(Event::Empty(BytesStart::new("D:allprop")))?;

        // </D:propfind>
        writer.write_event(Event::End(BytesEnd::new("D:propfind")))?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(|e| CalDavError::Xml(format!("UTF-8 error: {e}")))
    }
}

/// Calendar query (REPORT) request builder for VEVENTs.
#[derive(Debug, Default, Clone)]
pub struct CalendarQueryRequest {
    uid: Option<String>,
}

impl CalendarQueryRequest {
    /// Queries every VEVENT.
    #[must_use]
    pub fn events() -> Self {
        Self::default()
    }

    /// Queries the VEVENTs whose UID contains `uid` (`i;octet` text-match).
    ///
    /// The match is a substring match, so callers compare the decoded UID.
    #[must_use]
    pub fn event_by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }

    /// Builds the XML body for the calendar query request.
    ///
    /// # Errors
    ///
    /// Returns an error if XML building fails.
    pub fn build(&self) -> Result<String, CalDavError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        // <C:calendar-query xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
        let mut calendar_query = BytesStart::new("C:calendar-query");
        calendar_query.push_attribute(("xmlns:D", ns::DAV));
        calendar_query.push_attribute(("xmlns:C", ns::CALDAV));
        writer.write_event(Event::Start(calendar_query))?;

        // <D:prop>
        writer.write_event(Event::Start(BytesStart::new("D:prop")))?;
        writer.write_event(Event::Empty(BytesStart::new("D:getetag")))?;
        writer.write_event(Event::Empty(BytesStart::new("C:calendar-data")))?;
        writer.write_event(Event::End(BytesEnd::new("D:prop")))?;

        // <C:filter>
        writer.write_event(Event::Start(BytesStart::new("C:filter")))?;

        let mut calendar_filter = BytesStart::new("C:comp-filter");
        calendar_filter.push_attribute(("name", KW_VCALENDAR));
        writer.write_event(Event::Start(calendar_filter))?;

        let mut event_filter = BytesStart::new("C:comp-filter");
        event_filter.push_attribute(("name", KW_VEVENT));
        match &self.uid {
            Some(uid) => {
                writer.write_event(Event::Start(event_filter))?;

                let mut prop_filter = BytesStart::new("C:prop-filter");
                prop_filter.push_attribute(("name", KW_UID));
                writer.write_event(Event::Start(prop_filter))?;

                let mut text_match = BytesStart::new("C:text-match");
                text_match.push_attribute(("collation", "i;octet"));
                writer.write_event(Event::Start(text_match))?;
                writer.write_event(Event::Text(BytesText::new(uid)))?;
                writer.write_event(Event::End(BytesEnd::new("C:text-match")))?;

                writer.write_event(Event::End(BytesEnd::new("C:prop-filter")))?;
                writer.write_event(Event::End(BytesEnd::new("C:comp-filter")))?;
            }
            None => writer.write_event(Event::Empty(event_filter))?,
        }

        writer.write_event(Event::End(BytesEnd::new("C:comp-filter")))?;

        // </C:filter>
        writer.write_event(Event::End(BytesEnd::new("C:filter")))?;

        // </C:calendar-query>
        writer.write_event(Event::End(BytesEnd::new("C:calendar-query")))?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(|e| CalDavError::Xml(format!("UTF-8 error: {e}")))
    }
}
