//! Geographic coordinate extraction from tooltip titles.
//!
//! Titles arrive either with literal `°` characters or with the degree sign
//! HTML-encoded (`&#176;`/`&deg;`), depending on which attribute the title
//! was read from, so entities are decoded before any pattern runs.

use crate::patterns::{COORDS_BARE, COORDS_DECIMAL, COORDS_DMS};

const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Decode the HTML entities that show up in attribute-embedded titles.
///
/// `&amp;` is decoded last so that a double-escaped entity like
/// `&amp;deg;` resolves to the literal text `&deg;`, not to `°`.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#176;", "°")
        .replace("&deg;", "°")
        .replace("&amp;", "&")
}

/// Extract a `(lat, lon)` pair in WGS84 decimal degrees from a title string.
///
/// Tries, in order: degree-minute-second pairs (parentheses optional, comma
/// or space between the halves, integer or fractional seconds, trailing
/// elevation text tolerated), decimal-degree pairs with direction letters,
/// and finally a bare two-number pair accepted only when both numbers fall
/// inside valid latitude/longitude ranges.
#[must_use]
pub fn parse_coordinates(title: &str) -> Option<(f64, f64)> {
    if title.is_empty() {
        return None;
    }

    let text = decode_entities(title);

    if let Some(coords) = parse_dms(&text) {
        return Some(coords);
    }
    if let Some(coords) = parse_decimal(&text) {
        return Some(coords);
    }
    parse_bare(&text)
}

fn parse_dms(text: &str) -> Option<(f64, f64)> {
    let caps = COORDS_DMS.captures(text)?;

    let lat = dms_to_decimal(
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
        caps.get(4)?.as_str(),
    )?;
    let lon = dms_to_decimal(
        caps.get(5)?.as_str(),
        caps.get(6)?.as_str(),
        caps.get(7)?.as_str(),
        caps.get(8)?.as_str(),
    )?;

    in_range(lat, lon)
}

fn parse_decimal(text: &str) -> Option<(f64, f64)> {
    let caps = COORDS_DECIMAL.captures(text)?;

    let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lon: f64 = caps.get(3)?.as_str().parse().ok()?;
    let lat = apply_direction(lat, caps.get(2)?.as_str());
    let lon = apply_direction(lon, caps.get(4)?.as_str());

    in_range(lat, lon)
}

/// Bare pairs are ambiguous (elevations, dates, counts), so every candidate
/// match is scanned and the first one inside valid ranges wins.
fn parse_bare(text: &str) -> Option<(f64, f64)> {
    for caps in COORDS_BARE.captures_iter(text) {
        let Some(lat) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
            continue;
        };
        let Some(lon) = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) else {
            continue;
        };
        if let Some(coords) = in_range(lat, lon) {
            return Some(coords);
        }
    }
    None
}

/// `decimal = degrees + minutes/60 + seconds/3600`, negative for S and W.
fn dms_to_decimal(degrees: &str, minutes: &str, seconds: &str, direction: &str) -> Option<f64> {
    let degrees: f64 = degrees.parse().ok()?;
    let minutes: f64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    Some(apply_direction(decimal, direction))
}

fn apply_direction(value: f64, direction: &str) -> f64 {
    match direction {
        "S" | "W" => -value,
        _ => value,
    }
}

fn in_range(lat: f64, lon: f64) -> Option<(f64, f64)> {
    (LAT_RANGE.contains(&lat) && LON_RANGE.contains(&lon)).then_some((lat, lon))
}
