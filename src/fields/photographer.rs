//! Photographer credit extraction from tooltip titles.

use crate::patterns::PHOTOGRAPHER_CREDIT;

/// Extract the photographer credit following a `©` sign.
///
/// The credit runs to the next `&` (the start of a trailing HTML entity in
/// attribute-embedded titles) or to the end of the string. Returns an empty
/// string when no credit is present.
#[must_use]
pub fn extract_photographer(title: &str) -> String {
    PHOTOGRAPHER_CREDIT
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_at_end_of_title() {
        assert_eq!(
            extract_photographer("<i>S</i> - C<br/>Taos 2025/07/07 © Sajan K.C."),
            "Sajan K.C."
        );
    }

    #[test]
    fn credit_stops_at_entity_boundary() {
        assert_eq!(extract_photographer("© Jane Doe&nbsp;(archive)"), "Jane Doe");
    }

    #[test]
    fn missing_credit_is_empty() {
        assert_eq!(extract_photographer("<i>S</i> - C<br/>Taos"), "");
        assert_eq!(extract_photographer(""), "");
    }
}
