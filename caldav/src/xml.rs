// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! XML utilities for WebDAV/CalDAV processing.

use quick_xml::encoding::Decoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::BytesRef;

use crate::error::CalDavError;

/// XML namespaces used in `CalDAV`.
pub mod ns {
    /// `WebDAV` namespace.
    pub const DAV: &str = "DAV:";

    /// `CalDAV` namespace.
    pub const CALDAV: &str = "urn:ietf:params:xml:ns:caldav";
}

/// Appends the text an entity or character reference stands for.
///
/// # Errors
///
/// Returns an error for malformed character references and for entities
/// other than the five predefined ones.
pub fn push_general_ref(
    decoder: Decoder,
    reference: &BytesRef<'_>,
    text: &mut String,
) -> Result<(), CalDavError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = decoder.decode(reference.as_ref())?;
    let resolved = resolve_predefined_entity(&name)
        .ok_or_else(|| CalDavError::Xml(format!("unknown entity '&{name};'")))?;
    text.push_str(resolved);
    Ok(())
}
