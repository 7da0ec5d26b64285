//! Sorting and filtering of the deduplicated record set.
//!
//! Sort rule: dated records first, most recent first; undated records after
//! them, ordered by species name. Filtering narrows by species/common name,
//! location and date range; location and date criteria only trust records
//! that came from a rich tooltip.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::record::Observation;

/// Search criteria for narrowing the record set. All fields optional; an
/// empty set of criteria is a no-op filter.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Case-insensitive substring, matched against species OR common name.
    pub species: Option<String>,
    /// Whole-word location match, with US-state name/abbreviation expansion.
    pub location: Option<String>,
    /// Inclusive lower date bound. Dateless records pass unconditionally.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound. Dateless records pass unconditionally.
    pub date_to: Option<NaiveDate>,
}

impl SearchParams {
    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.location.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// US states appearing in the galleries, mapped between full name and
/// postal abbreviation so a query in either form matches both.
const STATE_VARIANTS: &[(&str, &str)] = &[
    ("arizona", "az"),
    ("florida", "fl"),
    ("texas", "tx"),
    ("new mexico", "nm"),
];

/// Sort records in place: valid-date records by timestamp descending, dated
/// before undated, undated by species name ascending (case-insensitive).
pub fn sort_observations(observations: &mut [Observation]) {
    observations.sort_by(compare);
}

fn compare(a: &Observation, b: &Observation) -> Ordering {
    match (a.has_valid_date, b.has_valid_date) {
        (true, true) => b.timestamp.cmp(&a.timestamp),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.species.to_lowercase().cmp(&b.species.to_lowercase()),
    }
}

/// Filter records by the given criteria and sort the result.
///
/// With no criteria set this returns the full record set (sorted). When a
/// location or date criterion is present, records without rich-tooltip
/// provenance are excluded outright: their location and date fields are too
/// unreliable to filter on.
#[must_use]
pub fn filter_observations(observations: &[Observation], params: &SearchParams) -> Vec<Observation> {
    let mut filtered: Vec<Observation> = if params.is_empty() {
        observations.to_vec()
    } else {
        observations
            .iter()
            .filter(|obs| matches(obs, params))
            .cloned()
            .collect()
    };

    sort_observations(&mut filtered);
    filtered
}

fn matches(obs: &Observation, params: &SearchParams) -> bool {
    let needs_rich_record =
        params.location.is_some() || params.date_from.is_some() || params.date_to.is_some();
    if needs_rich_record && !obs.has_data_title {
        return false;
    }

    if let Some(ref species) = params.species {
        let query = species.to_lowercase();
        let hit = obs.species.to_lowercase().contains(&query)
            || obs.common_name.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    if let Some(ref location) = params.location {
        if !location_matches(&obs.location, location) {
            return false;
        }
    }

    if let Some(date) = obs.date {
        if params.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if params.date_to.is_some_and(|to| date > to) {
            return false;
        }
    }

    true
}

/// Whole-word match of a location query against the record's location text.
///
/// The query expands through the state table (so "Arizona" also tries "az"
/// and vice versa). Matching is word-boundary-delimited rather than plain
/// substring so a two-letter state code cannot match inside an unrelated
/// longer word ("AZ" must not hit "Brazil").
fn location_matches(location_text: &str, query: &str) -> bool {
    if location_text.is_empty() {
        return false;
    }

    let query = query.trim().to_lowercase();
    let text = location_text.to_lowercase();

    expand_state_variants(&query)
        .iter()
        .any(|variant| contains_whole_word(&text, variant))
}

/// All equivalent spellings of a location query: the query itself, plus the
/// paired state name/abbreviation when the query is one of them.
fn expand_state_variants(query: &str) -> Vec<String> {
    for (name, abbrev) in STATE_VARIANTS {
        if query == *name || query == *abbrev {
            return vec![(*name).to_string(), (*abbrev).to_string()];
        }
    }
    vec![query.to_string()]
}

/// Word-boundary containment check; a word character is alphanumeric.
/// Equivalent to the pattern `(^|\W)needle(\W|$)` on lowercased input.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(at) = haystack[start..].find(needle) {
        let begin = start + at;
        let end = begin + needle.len();

        let boundary_before = haystack[..begin]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if boundary_before && boundary_after {
            return true;
        }
        // Advance past the first character of the rejected match; a byte
        // step can land inside a multi-byte character.
        start = begin + haystack[begin..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{date_timestamp_ms, ExtractionMethod};

    fn record(species: &str, location: &str, date: Option<NaiveDate>, rich: bool) -> Observation {
        Observation {
            species: species.to_string(),
            common_name: format!("{species} common"),
            raw_title: String::new(),
            full_image_url: String::new(),
            thumbnail_url: format!("{species}.jpg"),
            alt_text: String::new(),
            date,
            has_valid_date: date.is_some(),
            timestamp: date_timestamp_ms(date),
            location: location.to_string(),
            coordinates: None,
            photographer: String::new(),
            source_url: String::new(),
            source_page_name: "Texas".to_string(),
            has_data_title: rich,
            extraction_method: ExtractionMethod::TitleHtml,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn sort_dated_desc_then_undated_alphabetical() {
        let mut records = vec![
            record("Bb bb", "", None, true),
            record("Dated", "", date(2020, 1, 1), true),
            record("Recent", "", date(2024, 6, 1), true),
            record("Aa aa", "", None, true),
        ];
        sort_observations(&mut records);

        let order: Vec<_> = records.iter().map(|o| o.species.as_str()).collect();
        assert_eq!(order, ["Recent", "Dated", "Aa aa", "Bb bb"]);
    }

    #[test]
    fn empty_params_return_everything_sorted() {
        let records = vec![
            record("Bb bb", "", None, true),
            record("Aa aa", "", None, false),
        ];
        let out = filter_observations(&records, &SearchParams::default());

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].species, "Aa aa");
    }

    #[test]
    fn species_query_matches_common_name_too() {
        let records = vec![
            record("Danaus plexippus", "", None, true),
            record("Pieris rapae", "", None, true),
        ];
        let params = SearchParams {
            species: Some("PLEXIPPUS".to_string()),
            ..SearchParams::default()
        };

        let out = filter_observations(&records, &params);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].species, "Danaus plexippus");
    }

    #[test]
    fn state_abbreviation_matches_whole_word_only() {
        let records = vec![
            record("A", "Phoenix, AZ", None, true),
            record("B", "Brazil", None, true),
            record("C", "Tucson, Arizona", None, true),
        ];
        let params = SearchParams {
            location: Some("AZ".to_string()),
            ..SearchParams::default()
        };

        let out = filter_observations(&records, &params);
        let species: Vec<_> = out.iter().map(|o| o.species.as_str()).collect();
        assert_eq!(species, ["A", "C"]);
    }

    #[test]
    fn full_state_name_matches_abbreviated_location() {
        let records = vec![record("A", "Sabal Palm, TX", None, true)];
        let params = SearchParams {
            location: Some("texas".to_string()),
            ..SearchParams::default()
        };

        assert_eq!(filter_observations(&records, &params).len(), 1);
    }

    #[test]
    fn location_filter_excludes_weak_records() {
        let records = vec![record("A", "Phoenix, AZ", None, false)];
        let params = SearchParams {
            location: Some("AZ".to_string()),
            ..SearchParams::default()
        };

        assert!(filter_observations(&records, &params).is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive_and_dateless_pass() {
        let records = vec![
            record("In", "", date(2024, 6, 15), true),
            record("Before", "", date(2024, 5, 31), true),
            record("Dateless", "", None, true),
        ];
        let params = SearchParams {
            date_from: date(2024, 6, 1),
            date_to: date(2024, 6, 15),
            ..SearchParams::default()
        };

        let out = filter_observations(&records, &params);
        let species: Vec<_> = out.iter().map(|o| o.species.as_str()).collect();
        // Sorted: dated first, then the dateless record.
        assert_eq!(species, ["In", "Dateless"]);
    }

    #[test]
    fn whole_word_match_handles_punctuation_boundaries() {
        assert!(contains_whole_word("phoenix, az", "az"));
        assert!(contains_whole_word("az, phoenix", "az"));
        assert!(!contains_whole_word("brazil", "az"));
        assert!(!contains_whole_word("topaz ridge", "az"));
    }

    #[test]
    fn whole_word_match_handles_multibyte_text() {
        // A rejected match starting at a multi-byte character must not
        // derail the scan.
        assert!(!contains_whole_word("café rico", "é"));
        assert!(contains_whole_word("café rico", "café"));
        assert!(contains_whole_word("el café, panama", "café"));
    }

    #[test]
    fn accented_location_query_does_not_panic() {
        let records = vec![record("A", "Café Rico, Panama", None, true)];

        let inside_word = SearchParams {
            location: Some("é".to_string()),
            ..SearchParams::default()
        };
        assert!(filter_observations(&records, &inside_word).is_empty());

        let whole_word = SearchParams {
            location: Some("Café".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(filter_observations(&records, &whole_word).len(), 1);
    }
}
