//! Species and common-name extraction from tooltip titles.
//!
//! Applies the title-pattern cascade most-specific-first and stops at the
//! first match. The matched common name often runs on into location or
//! elevation text (the looser patterns cannot know where the name ends), so
//! it is cleaned of trailing admin/place keywords, digit runs, parentheticals
//! and county runs before use.

use crate::patterns::{
    COMMON_NAME_ADMIN_SUFFIX, COMMON_NAME_COUNTY_SUFFIX, COMMON_NAME_DIGIT_SUFFIX,
    COMMON_NAME_PAREN_SUFFIX, TITLE_PATTERNS,
};

/// Extract a `(species, common_name)` pair from a raw title string.
///
/// The first cascade pattern that matches wins; no later pattern is tried.
/// Returns `None` when no pattern matches at all. Either returned field may
/// still be too short to be usable; the record builder applies the sentinel
/// rule.
#[must_use]
pub fn extract_species_pair(title: &str) -> Option<(String, String)> {
    if title.is_empty() {
        return None;
    }

    for pattern in TITLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(title) {
            let species = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let common = caps.get(2).map_or("", |m| m.as_str()).trim();
            return Some((species, clean_common_name(common)));
        }
    }

    None
}

/// Strip run-on suffixes from a matched common name, in order: trailing
/// place-type/admin keywords, trailing digit runs, trailing parentheticals,
/// trailing `"Taos Co."`-style county runs.
#[must_use]
pub fn clean_common_name(common: &str) -> String {
    let cleaned = COMMON_NAME_ADMIN_SUFFIX.replace(common, "");
    let cleaned = COMMON_NAME_DIGIT_SUFFIX.replace(&cleaned, "");
    let cleaned = COMMON_NAME_PAREN_SUFFIX.replace(&cleaned, "");
    let cleaned = COMMON_NAME_COUNTY_SUFFIX.replace(&cleaned, "");
    cleaned.trim().to_string()
}
