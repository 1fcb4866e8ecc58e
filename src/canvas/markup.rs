//! Attribute and style serialization helpers

use std::fmt::Display;

use crate::style::StyleMap;

/// Format a single-quoted XML attribute with a leading space
///
/// The value is inserted as-is. A value containing `'` breaks the
/// surrounding markup; use [`escaped_attr`] when that matters.
pub fn attr(name: &str, value: impl Display) -> String {
    format!(" {}='{}'", name, value)
}

/// Like [`attr`], but XML-escapes the value
pub fn escaped_attr(name: &str, value: impl Display) -> String {
    format!(" {}='{}'", name, escape_xml(&value.to_string()))
}

/// Serialize a style map as `key:value` declarations joined by `;`
///
/// Absent and empty maps both serialize to the empty string.
pub fn css_stringify(style: Option<&StyleMap>) -> String {
    let Some(style) = style else {
        return String::new();
    };

    style
        .iter()
        .map(|(k, v)| format!("{}:{}", k, v))
        .collect::<Vec<_>>()
        .join(";")
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
