// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::syntax::ParseError;

/// Errors raised while decoding or encoding a [`CalendarEvent`](crate::CalendarEvent).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The iCalendar text is not syntactically valid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A required component is missing from the calendar object.
    #[error("missing {0} component")]
    MissingComponent(&'static str),

    /// A property value could not be interpreted.
    #[error("invalid value '{value}' for property {property}")]
    InvalidValue {
        /// Property name.
        property: &'static str,
        /// Raw property value.
        value: String,
    },

    /// The encoded event violates the component rules of RFC 5545.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// The timezone identifier is not present in the timezone database.
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    /// A map value has the wrong shape for its key.
    #[error("expected {expected} under key '{key}', found {found}")]
    InteropType {
        /// Offending key.
        key: String,
        /// Expected value kind.
        expected: &'static str,
        /// Actual value kind.
        found: &'static str,
    },
}
