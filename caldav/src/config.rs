// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// `CalDAV` authentication method.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Basic authentication (username/password), sent with every request.
    #[serde(rename = "basic")]
    Basic {
        /// Username for authentication.
        username: String,
        /// Password for authentication.
        password: String,
    },
}

/// Connection settings for one calendar collection.
///
/// ```
/// use nccal_caldav::CalDavConfig;
///
/// let config = CalDavConfig::new("cloud.example.com", "jane", "secret", "remote.php/dav/calendars/jane/personal");
/// assert_eq!(config.origin(), "https://cloud.example.com");
/// assert_eq!(config.collection_path(), "/remote.php/dav/calendars/jane/personal");
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CalDavConfig {
    /// Server host name, e.g. `cloud.example.com`. May carry an explicit
    /// `http://` or `https://` scheme.
    pub host: String,
    /// Path of the calendar collection on the server.
    pub calendar_path: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("nccal-caldav/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CalDavConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            calendar_path: String::new(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl CalDavConfig {
    /// Creates a configuration with Basic authentication.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        calendar_path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            calendar_path: calendar_path.into(),
            auth: AuthMethod::Basic {
                username: username.into(),
                password: password.into(),
            },
            ..Default::default()
        }
    }

    /// Scheme, host and port requests are sent to.
    #[must_use]
    pub fn origin(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("https://") || host.starts_with("http://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// The calendar path with a leading `/`.
    #[must_use]
    pub fn collection_path(&self) -> String {
        normalize_path(&self.calendar_path)
    }
}

pub(crate) fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
