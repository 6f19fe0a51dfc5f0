// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar event model for the Nextcloud connector, with its two codecs:
//! iCalendar text (RFC 5545, VEVENT + VTIMEZONE) and a flat, namespaced map
//! for exchanging events with a dynamically-typed runtime.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

mod error;
mod event;
pub mod formatter;
pub mod interop;
pub mod keyword;
pub mod semantic;
pub mod syntax;
pub mod value;

pub use crate::error::EventError;
pub use crate::event::{CalendarEvent, CalendarEventBuilder, EventStatus};
pub use crate::interop::{EventMap, InteropValue};
pub use crate::semantic::{
    PRODUCT_ID, UID_MARKER, decode_calendar, encode_calendar, generate_uid, vtimezone,
};
pub use crate::syntax::{Component, Parameter, ParseError, ParseErrorKind, Property, parse};
