// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request building tests.

use nccal_caldav::{CalendarQueryRequest, PropFindRequest};

#[test]
fn request_propfind_allprop() {
    let xml = PropFindRequest::all_props()
        .build()
        .expect("Failed to build PROPFIND XML");

    assert!(xml.contains("<D:propfind xmlns:D=\"DAV:\">"));
    assert!(xml.contains("<D:allprop/>"));
    assert!(!xml.contains("<D:prop>"));
    assert!(xml.contains("</D:propfind>"));
}

#[test]
fn request_calendar_query_for_events() {
    let xml = CalendarQueryRequest::events()
        .build()
        .expect("Failed to build calendar-query XML");

    assert!(xml.contains("<C:calendar-query"));
    assert!(xml.contains("xmlns:D=\"DAV:\""));
    assert!(xml.contains("xmlns:C=\"urn:ietf:params:xml:ns:caldav\""));
    assert!(xml.contains("<D:getetag/>"));
    assert!(xml.contains("<C:calendar-data/>"));
    assert!(xml.contains("<C:filter>"));

    let outer = xml
        .find("<C:comp-filter name=\"VCALENDAR\">")
        .expect("VCALENDAR filter");
    let inner = xml
        .find("<C:comp-filter name=\"VEVENT\"/>")
        .expect("VEVENT filter");
    assert!(outer < inner);
    assert!(xml.contains("</C:calendar-query>"));
}

#[test]
fn request_calendar_query_by_uid() {
    let xml = CalendarQueryRequest::event_by_uid("a<b>&c")
        .build()
        .expect("Failed to build calendar-query XML");

    let event = xml
        .find("<C:comp-filter name=\"VEVENT\">")
        .expect("VEVENT filter");
    let prop = xml
        .find("<C:prop-filter name=\"UID\">")
        .expect("UID filter");
    assert!(event < prop);
    assert!(xml.contains("<C:text-match collation=\"i;octet\">a&lt;b&gt;&amp;c</C:text-match>"));
    assert!(!xml.contains("<C:comp-filter name=\"VEVENT\"/>"));
    assert!(xml.contains("<C:calendar-data/>"));
}
