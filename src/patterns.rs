//! Compiled regex patterns for observation extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! The species cascade is ordered most-specific-first and the order is load
//! bearing: the first matching pattern wins and no later pattern is tried.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Species / Common-Name Cascade
// =============================================================================

/// Ordered cascade of title patterns, most specific first.
///
/// Each pattern captures `(species, common_name)`. Patterns 4-6 bound the
/// common name by upcoming context (place keyword, digit, parenthesis); the
/// `regex` crate has no lookahead, so the boundary is matched by a
/// non-capturing terminator alternation instead. Only the two capture groups
/// are consumed, which makes the captures identical to the lookahead form.
pub static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 1. Canonical rich tooltip: <p4><i>Species</i> - Common</p4>
        r"(?i)<p4><i>(.*?)</i>\s*[-–]\s*(.*?)</p4>",
        // 2. Italic species, common name up to <br or end
        r"(?i)<i>(.*?)</i>\s*[-–]\s*([^<]*?)(?:<br|$)",
        // 3. Italic species, common name up to any tag or end
        r"(?i)<i>(.*?)</i>\s*[-–]\s*([^<]*?)(?:\s*<|$)",
        // 4. Common name bounded by a following place-type keyword run
        r"(?i)<i>(.*?)</i>\s*[-–]\s*([A-Za-z\s\-']+?)(?:\s*[A-Z][a-z]+\s+(?:Co\.|County|Wildlife|Park|Reserve|Area|Forest|Beach)|<br|$)",
        // 5. Common name bounded by a following digit (elevation/date run-on)
        r"(?i)<i>(.*?)</i>\s*[-–]\s*([A-Za-z\s\-']+?)\s*\d",
        // 6. Common name bounded by a following parenthesis (coordinate run-on)
        r"(?i)<i>(.*?)</i>\s*[-–]\s*([A-Za-z\s\-']+?)\s*\(",
        // 7. Bare last resort, no terminator
        r"<i>(.*?)</i>\s*[-–]\s*([A-Za-z\s\-']+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("title pattern"))
    .collect()
});

/// Trailing place-type/admin keyword run on a common name.
pub static COMMON_NAME_ADMIN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+(Wildlife|Management|Area|Park|Reserve|County|Co\.|State|National|Forest|Beach).*$",
    )
    .expect("COMMON_NAME_ADMIN_SUFFIX regex")
});

/// Trailing digit run on a common name (elevation, date run-on).
pub static COMMON_NAME_DIGIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+.*$").expect("COMMON_NAME_DIGIT_SUFFIX regex"));

/// Trailing parenthetical on a common name (coordinates run-on).
pub static COMMON_NAME_PAREN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\(.*$").expect("COMMON_NAME_PAREN_SUFFIX regex"));

/// Trailing `"Taos Co."`-style county run on a common name.
pub static COMMON_NAME_COUNTY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[A-Z][a-z]+\s+Co\..*$").expect("COMMON_NAME_COUNTY_SUFFIX regex"));

// =============================================================================
// Alt-Text and Table-Cell Fallbacks
// =============================================================================

/// Alt-text fallback patterns: `TEXT1 - TEXT2`, then a stricter
/// `ProperCase propercase - TEXT2` binomial form.
pub static ALT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(.*?)\s*[-–]\s*(.*?)$",
        r"^([A-Z][a-z]+\s+[a-z]+)\s*[-–]\s*(.*?)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("alt pattern"))
    .collect()
});

/// `A - B` pattern for the label cell of a two-row gallery table.
pub static TABLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z\s]+?)\s*[-–]\s*([A-Za-z\s\-']+)").expect("TABLE_LABEL regex")
});

// =============================================================================
// Date Patterns
// =============================================================================

/// Date patterns tried in order. Selection is structural: a leading
/// four-digit group means year-first, otherwise the groups are read
/// month-first (the galleries are US-labelled; see `fields::date`).
pub static DATE_YMD_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})/(\d{2})/(\d{2})").expect("DATE_YMD_SLASH regex"));

pub static DATE_MDY_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").expect("DATE_MDY_SLASH regex"));

pub static DATE_YMD_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("DATE_YMD_DASH regex"));

pub static DATE_MDY_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})-(\d{2})-(\d{4})").expect("DATE_MDY_DASH regex"));

// =============================================================================
// Location and Photographer
// =============================================================================

/// Location text: between a `<br/>` and an opening parenthesis, a digit,
/// a copyright sign, or end-of-string.
pub static LOCATION_AFTER_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>([^<]+?)\s*(?:\(|\d|©|$)").expect("LOCATION_AFTER_BREAK regex")
});

/// Photographer credit: `©` up to the next entity boundary or end.
pub static PHOTOGRAPHER_CREDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"©\s*([^&]+)").expect("PHOTOGRAPHER_CREDIT regex"));

// =============================================================================
// Coordinate Patterns
// =============================================================================

/// Degrees-minutes-seconds pair, latitude first. Tolerant of optional
/// parentheses (simply not consumed), a comma and/or spaces between the two
/// halves, fractional seconds, and trailing free text (elevation etc.).
pub static COORDS_DMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{1,3})°\s*(\d{1,2})'\s*(\d{1,2}(?:\.\d+)?)''\s*([NS])\s*,?\s*(\d{1,3})°\s*(\d{1,2})'\s*(\d{1,2}(?:\.\d+)?)''\s*([EW])",
    )
    .expect("COORDS_DMS regex")
});

/// Decimal-degree pair with direction letters, e.g. `36.57° N, 105.44° W`.
pub static COORDS_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(-?\d{1,3}(?:\.\d+)?)\s*°?\s*([NS])\s*,?\s*(-?\d{1,3}(?:\.\d+)?)\s*°?\s*([EW])",
    )
    .expect("COORDS_DECIMAL regex")
});

/// Bare two-number fallback. Candidates are only accepted when both numbers
/// fall inside valid latitude/longitude ranges.
pub static COORDS_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d{1,3}\.\d+)[,\s]\s*(-?\d{1,3}\.\d+)").expect("COORDS_BARE regex")
});
