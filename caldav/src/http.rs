// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with preemptive authentication and status mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};

use crate::config::{AuthMethod, CalDavConfig};
use crate::error::CalDavError;
use crate::types::Href;

/// HTTP client for `CalDAV` operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    auth: AuthMethod,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &CalDavConfig) -> Result<Self, CalDavError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| CalDavError::Config(e.to_string()))?;
        Ok(Self {
            client,
            auth: config.auth.clone(),
        })
    }

    /// Builds a request that already carries the credentials, so no 401
    /// challenge round trip is needed.
    pub fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        let req = self.client.request(method, url);
        match &self.auth {
            AuthMethod::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthMethod::None => req,
        }
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns [`CalDavError::NotFound`] for 404, and [`CalDavError::Protocol`]
    /// for any other non-success status or a transport failure.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, CalDavError> {
        let req = req.build()?;
        let method = req.method().clone();
        let href = Href::new(req.url().path().to_string());
        tracing::debug!(%method, %href, "sending request");

        let resp = self.client.execute(req).await.inspect_err(|err| {
            tracing::debug!(%method, %href, %err, "request failed");
        })?;
        tracing::debug!(%method, %href, status = resp.status().as_u16(), "received response");

        match resp.status() {
            status if status.is_success() => Ok(resp),
            StatusCode::NOT_FOUND => Err(CalDavError::NotFound(href)),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(CalDavError::Protocol(format!("{status}: {text}")))
            }
        }
    }
}

/// A WebDAV extension method such as PROPFIND or REPORT.
///
/// # Errors
///
/// Returns an error if `name` is not a valid HTTP method token.
pub fn dav_method(name: &str) -> Result<Method, CalDavError> {
    Method::from_bytes(name.as_bytes())
        .map_err(|e| CalDavError::Protocol(format!("Invalid method {name}: {e}")))
}
