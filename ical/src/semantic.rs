// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping between the component tree of [`crate::syntax`] and
//! [`CalendarEvent`](crate::CalendarEvent).
//!
//! Decoding is lenient: a missing property is an absent field, never an
//! error. Encoding validates the produced VEVENT before handing it out.

mod vevent;
mod vtimezone;

pub use crate::semantic::vevent::{
    PRODUCT_ID, UID_MARKER, decode_calendar, encode_calendar, generate_uid,
};
pub use crate::semantic::vtimezone::{resolve_zone, vtimezone};
