//! Field extractors.
//!
//! Independent pure functions that each pull one semantic field out of a raw
//! tooltip title string. Every extractor tries an ordered list of fallback
//! patterns and stops at the first success; none of them ever fail, they
//! return `None`/empty instead.

pub mod coords;
pub mod date;
pub mod location;
pub mod photographer;
pub mod species;

pub use coords::parse_coordinates;
pub use date::{is_recent, parse_date};
pub use location::extract_location;
pub use photographer::extract_photographer;
pub use species::extract_species_pair;

use chrono::NaiveDate;

/// Everything extractable from a single title string.
#[derive(Debug, Clone, Default)]
pub struct TitleFields {
    /// Species/common-name pair, when any cascade pattern matched.
    pub names: Option<(String, String)>,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub coordinates: Option<(f64, f64)>,
    pub photographer: String,
}

/// Run every field extractor against one title string.
#[must_use]
pub fn extract_title_fields(title: &str) -> TitleFields {
    TitleFields {
        names: species::extract_species_pair(title),
        date: date::parse_date(title),
        location: location::extract_location(title),
        coordinates: coords::parse_coordinates(title),
        photographer: photographer::extract_photographer(title),
    }
}
