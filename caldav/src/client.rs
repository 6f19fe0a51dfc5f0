// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `CalDAV` client for one calendar collection.

use std::sync::Arc;

use nccal_ical::{CalendarEvent, EventError, generate_uid};
use reqwest::{Method, Url};

use crate::config::{CalDavConfig, normalize_path};
use crate::error::CalDavError;
use crate::http::{HttpClient, dav_method};
use crate::request::{CalendarQueryRequest, PropFindRequest};
use crate::response::MultiStatusResponse;
use crate::types::{CalendarCollection, CalendarResource, Href};

const CONTENT_TYPE_XML: &str = "application/xml; charset=utf-8";
const CONTENT_TYPE_CALENDAR: &str = "text/calendar; charset=utf-8";

/// `CalDAV` client bound to a single calendar collection.
///
/// Every method waits for the full response of each request it sends; the
/// client keeps no state between calls. Update and delete look the resource
/// up by UID before writing to it, the other operations send one request.
///
/// # Example
///
/// ```no_run
/// use nccal_caldav::{CalDavClient, CalDavConfig};
/// use nccal_ical::CalendarEvent;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CalDavConfig::new(
///     "cloud.example.com",
///     "jane",
///     "app-password",
///     "/remote.php/dav/calendars/jane/personal",
/// );
/// let client = CalDavClient::new(config)?;
///
/// let uid = client
///     .create_event(&CalendarEvent::builder().summary("Dentist").build())
///     .await?;
/// let fetched = client.get_event_by_uid(&uid).await?;
/// assert!(fetched.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CalDavClient {
    http: Arc<HttpClient>,
    origin: Url,
    collection: String,
}

impl CalDavClient {
    /// Creates a new `CalDAV` client.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not a valid URL origin or HTTP client
    /// initialization fails.
    pub fn new(config: CalDavConfig) -> Result<Self, CalDavError> {
        let origin = Url::parse(&config.origin())
            .map_err(|e| CalDavError::Config(format!("invalid host '{}': {e}", config.host)))?;
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            origin,
            collection: config.collection_path(),
        })
    }

    /// Lists the collections directly below `root_path` (depth 1, `allprop`).
    ///
    /// Responses without a `200` status are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid XML.
    pub async fn discover_collections(
        &self,
        root_path: &str,
    ) -> Result<Vec<CalendarCollection>, CalDavError> {
        let url = self.url(&normalize_path(root_path))?;
        let body = PropFindRequest::all_props().build()?;

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(dav_method("PROPFIND")?, url)
                    .header("Depth", "1")
                    .header("Content-Type", CONTENT_TYPE_XML)
                    .body(body),
            )
            .await?;

        let xml = resp.text().await?;
        Ok(MultiStatusResponse::from_xml(&xml)?.into_collections())
    }

    /// Queries every VEVENT of the collection, returning each item with its
    /// own status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid XML.
    pub async fn list_resources(&self) -> Result<Vec<CalendarResource>, CalDavError> {
        self.query(&CalendarQueryRequest::events()).await
    }

    /// Lists every event of the collection, in response order.
    ///
    /// Items the server did not report as `200 OK`, and items that cannot be
    /// decoded, are left out; use [`CalDavClient::list_resources`] to see them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid XML.
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>, CalDavError> {
        let resources = self.list_resources().await?;

        let mut events = Vec::with_capacity(resources.len());
        for resource in resources {
            if !resource.is_ok() {
                tracing::warn!(href = %resource.href, status = ?resource.status, "skipping item");
                continue;
            }
            match resource.event() {
                Ok(event) => events.push(event),
                Err(err) => tracing::warn!(href = %resource.href, %err, "skipping undecodable item"),
            }
        }
        Ok(events)
    }

    /// Stores a new event and returns its UID, generating one if the event
    /// has none.
    ///
    /// The request only succeeds if no resource exists under that UID yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be encoded or the request fails.
    pub async fn create_event(&self, event: &CalendarEvent) -> Result<String, CalDavError> {
        let uid = event.uid().map_or_else(generate_uid, ToString::to_string);
        let event = event.clone().with_uid(Some(uid.clone()));
        let url = self.resource_url(&uid)?;
        let body = event.to_ics()?;

        self.http
            .execute(
                self.http
                    .build_request(Method::PUT, url)
                    .header("Content-Type", CONTENT_TYPE_CALENDAR)
                    .header("If-None-Match", "*")
                    .body(body),
            )
            .await?;

        tracing::debug!(%uid, "event created");
        Ok(uid)
    }

    /// Replaces the stored event with the same UID.
    ///
    /// The resource is looked up by UID first; when the collection has none,
    /// the event is written to `<uid>.ics`.
    ///
    /// # Errors
    ///
    /// Returns an error if the event has no UID, cannot be encoded, or a
    /// request fails.
    pub async fn update_event(&self, event: &CalendarEvent) -> Result<(), CalDavError> {
        let uid = event.uid().ok_or_else(|| {
            EventError::MalformedEvent("an event needs a UID to be updated".to_string())
        })?;
        let body = event.to_ics()?;
        let url = self.locate(uid).await?;

        self.http
            .execute(
                self.http
                    .build_request(Method::PUT, url)
                    .header("Content-Type", CONTENT_TYPE_CALENDAR)
                    .body(body),
            )
            .await?;
        Ok(())
    }

    /// Deletes the event with the given UID.
    ///
    /// The resource is looked up by UID first, falling back to `<uid>.ics`.
    ///
    /// # Errors
    ///
    /// Returns [`CalDavError::NotFound`] if there is no such event, or
    /// another error if a request fails.
    pub async fn delete_event(&self, uid: &str) -> Result<(), CalDavError> {
        let url = self.locate(uid).await?;
        self.http
            .execute(self.http.build_request(Method::DELETE, url))
            .await?;
        Ok(())
    }

    /// Fetches the event with the given UID, or `None` if the collection has
    /// no such event.
    ///
    /// Sends one calendar-query filtered on the UID, so events stored under
    /// any resource name are found.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any other reason or the
    /// response cannot be parsed.
    pub async fn get_event_by_uid(&self, uid: &str) -> Result<Option<CalendarEvent>, CalDavError> {
        match self.find_by_uid(uid).await {
            Ok(Some((_, event))) => Ok(Some(event)),
            Ok(None) => {
                tracing::debug!(%uid, "event not found");
                Ok(None)
            }
            Err(CalDavError::NotFound(href)) => {
                tracing::debug!(%uid, %href, "collection not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Runs a calendar-query REPORT against the collection.
    async fn query(
        &self,
        request: &CalendarQueryRequest,
    ) -> Result<Vec<CalendarResource>, CalDavError> {
        let url = self.url(&self.collection)?;
        let body = request.build()?;

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(dav_method("REPORT")?, url)
                    .header("Depth", "1")
                    .header("Content-Type", CONTENT_TYPE_XML)
                    .body(body),
            )
            .await?;

        let xml = resp.text().await?;
        Ok(MultiStatusResponse::from_xml(&xml)?.into_resources())
    }

    /// The resource holding the VEVENT whose UID is exactly `uid`.
    async fn find_by_uid(&self, uid: &str) -> Result<Option<(Href, CalendarEvent)>, CalDavError> {
        let resources = self.query(&CalendarQueryRequest::event_by_uid(uid)).await?;
        let found = resources
            .into_iter()
            .filter(CalendarResource::is_ok)
            .find_map(|resource| match resource.event() {
                Ok(event) if event.uid() == Some(uid) => Some((resource.href, event)),
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(href = %resource.href, %err, "skipping undecodable item");
                    None
                }
            });
        Ok(found)
    }

    /// URL of the resource holding `uid`, or of `<uid>.ics` when none does.
    async fn locate(&self, uid: &str) -> Result<Url, CalDavError> {
        match self.find_by_uid(uid).await? {
            Some((href, _)) => self.url(&href),
            None => self.resource_url(uid),
        }
    }

    /// Absolute URL of a server path.
    fn url(&self, path: &str) -> Result<Url, CalDavError> {
        self.origin
            .join(path)
            .map_err(|e| CalDavError::Config(format!("invalid path '{path}': {e}")))
    }

    /// URL of the resource holding `uid`: `<collection>/<uid>.ics`, with the
    /// file name percent-encoded.
    fn resource_url(&self, uid: &str) -> Result<Url, CalDavError> {
        let mut url = self.url(&self.collection)?;
        url.path_segments_mut()
            .map_err(|()| CalDavError::Config("collection URL cannot have a path".to_string()))?
            .pop_if_empty()
            .push(&format!("{uid}.ics"));
        Ok(url)
    }
}
