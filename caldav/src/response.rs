// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Response parsers for WebDAV/CalDAV operations.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::CalDavError;
use crate::types::{CalendarCollection, CalendarResource, ETag, Href};
use crate::xml::push_general_ref;

/// `WebDAV` multistatus response.
#[derive(Debug, Clone, Default)]
pub struct MultiStatusResponse {
    /// The response items.
    pub responses: Vec<ResponseItem>,
}

/// Individual response in multistatus.
#[derive(Debug, Clone, Default)]
pub struct ResponseItem {
    /// The resource href.
    pub href: Href,
    /// Property blocks with their own status.
    pub prop_stats: Vec<PropStat>,
    /// Response-level status line, e.g. `HTTP/1.1 404 Not Found`.
    pub status: Option<String>,
}

/// Property stat with status and value.
#[derive(Debug, Clone, Default)]
pub struct PropStat {
    /// The properties of this block.
    pub props: Properties,
    /// Status line of this block.
    pub status: String,
}

/// The WebDAV/CalDAV properties this client reads.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    /// `DAV:displayname`.
    pub display_name: Option<String>,
    /// `CS:getctag`.
    pub ctag: Option<ETag>,
    /// `DAV:getetag`.
    pub etag: Option<ETag>,
    /// `C:calendar-data`.
    pub calendar_data: Option<String>,
}

/// Extracts the code from a status line such as `HTTP/1.1 200 OK`.
#[must_use]
pub fn parse_status_line(line: &str) -> Option<u16> {
    line.split_whitespace().nth(1)?.parse().ok()
}

impl ResponseItem {
    /// The item's status: the response-level one when present, otherwise
    /// 200 if any property block succeeded, otherwise the first block's.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        if let Some(status) = &self.status {
            return parse_status_line(status);
        }
        if self.ok_props().is_some() {
            return Some(200);
        }
        self.prop_stats.first().and_then(|p| parse_status_line(&p.status))
    }

    /// Properties of the first `200` block, unless the response as a whole failed.
    #[must_use]
    pub fn ok_props(&self) -> Option<&Properties> {
        let failed = self
            .status
            .as_deref()
            .and_then(parse_status_line)
            .is_some_and(|code| code != 200);
        if failed {
            return None;
        }

        self.prop_stats
            .iter()
            .find(|p| parse_status_line(&p.status) == Some(200))
            .map(|p| &p.props)
    }
}

impl MultiStatusResponse {
    /// Parses multistatus response from XML.
    ///
    /// Elements are matched by local name, so any namespace prefix works.
    ///
    /// # Errors
    ///
    /// Returns an error if XML parsing fails.
    pub fn from_xml(xml: &str) -> Result<Self, CalDavError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().check_end_names = true;

        let mut responses = Vec::new();
        let mut current_response: Option<ResponseItem> = None;
        let mut current_prop_stat: Option<PropStat> = None;
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    match name.as_slice() {
                        b"response" => current_response = Some(ResponseItem::default()),
                        b"propstat" => current_prop_stat = Some(PropStat::default()),
                        _ => {}
                    }
                    path.push(name);
                    text.clear();
                }
                Event::Text(e) => text.push_str(&reader.decoder().decode(e.as_ref())?),
                Event::CData(e) => text.push_str(&reader.decoder().decode(e.as_ref())?),
                Event::GeneralRef(e) => push_general_ref(reader.decoder(), &e, &mut text)?,
                Event::End(_) => {
                    let name = path.pop().unwrap_or_default();
                    let parent = path.last().map(Vec::as_slice);
                    let value = text.trim();

                    match (name.as_slice(), parent) {
                        (b"response", _) => responses.extend(current_response.take()),
                        (b"propstat", _) => {
                            if let (Some(resp), Some(prop_stat)) =
                                (current_response.as_mut(), current_prop_stat.take())
                            {
                                resp.prop_stats.push(prop_stat);
                            }
                        }
                        (b"href", Some(b"response")) => {
                            if let Some(resp) = current_response.as_mut() {
                                resp.href = Href::from(value);
                            }
                        }
                        (b"status", Some(b"response")) => {
                            if let Some(resp) = current_response.as_mut() {
                                resp.status = Some(value.to_string());
                            }
                        }
                        (b"status", Some(b"propstat")) => {
                            if let Some(prop_stat) = current_prop_stat.as_mut() {
                                prop_stat.status = value.to_string();
                            }
                        }
                        (prop, Some(b"prop")) => {
                            if let Some(prop_stat) = current_prop_stat.as_mut() {
                                prop_stat.props.set(prop, value);
                            }
                        }
                        _ => {}
                    }
                    text.clear();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { responses })
    }

    /// Collections whose response succeeded, in response order.
    #[must_use]
    pub fn into_collections(self) -> Vec<CalendarCollection> {
        self.responses
            .iter()
            .filter_map(|response| {
                let props = response.ok_props()?;
                Some(CalendarCollection {
                    href: response.href.clone(),
                    display_name: props.display_name.clone(),
                    ctag: props.ctag.clone(),
                })
            })
            .collect()
    }

    /// Every item with its own status, in response order.
    #[must_use]
    pub fn into_resources(self) -> Vec<CalendarResource> {
        self.responses
            .into_iter()
            .map(|response| {
                let props = response.ok_props().cloned().unwrap_or_default();
                CalendarResource {
                    status: response.status_code(),
                    href: response.href,
                    etag: props.etag,
                    calendar_data: props.calendar_data,
                }
            })
            .collect()
    }
}

impl Properties {
    fn set(&mut self, name: &[u8], value: &str) {
        match name {
            b"displayname" => self.display_name = Some(value.to_string()),
            b"getctag" => self.ctag = Some(ETag::from(value)),
            b"getetag" => self.etag = Some(ETag::from(value)),
            b"calendar-data" => self.calendar_data = Some(value.to_string()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_lines() {
        assert_eq!(parse_status_line("HTTP/1.1 200 OK"), Some(200));
        assert_eq!(parse_status_line("HTTP/1.1 404 Not Found"), Some(404));
        assert_eq!(parse_status_line("garbage"), None);
        assert_eq!(parse_status_line(""), None);
    }

    #[test]
    fn response_status_overrides_prop_stats() {
        let item = ResponseItem {
            status: Some("HTTP/1.1 403 Forbidden".to_string()),
            prop_stats: vec![PropStat {
                status: "HTTP/1.1 200 OK".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(item.status_code(), Some(403));
        assert!(item.ok_props().is_none());
    }
}
