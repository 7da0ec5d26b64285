//! Location extraction from tooltip titles.

use crate::patterns::LOCATION_AFTER_BREAK;

/// Extract the free-text location from a title string.
///
/// The location sits between a `<br/>` tag and whatever follows it: an
/// opening parenthesis (coordinates), a digit (date or elevation), a `©`
/// credit, or the end of the string. Returns an empty string when no
/// location is present.
#[must_use]
pub fn extract_location(title: &str) -> String {
    LOCATION_AFTER_BREAK
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
