// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value types: TEXT escaping, DATE/DATE-TIME, and UTC-OFFSET.

mod datetime;
mod text;

pub use crate::value::datetime::{
    ValueError, format_local_date_time, format_utc_date_time, format_utc_offset, parse_date_time,
};
pub use crate::value::text::{escape_text, unescape_text};
