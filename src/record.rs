//! The observation record produced by the extraction pipeline.
//!
//! One `Observation` corresponds to one photograph detected on a gallery
//! page. All fields are filled during construction; unextractable text
//! fields resolve to sentinel values rather than being absent so that
//! downstream renderers always receive a well-formed record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel for a scientific name that could not be extracted.
pub const UNKNOWN_SPECIES: &str = "Unknown Species";

/// Sentinel for a common name that could not be extracted.
pub const UNKNOWN_COMMON_NAME: &str = "Unknown";

/// How the species/common-name pair was obtained, in decreasing order of
/// confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    /// Parsed from the rich HTML tooltip (`<i>` species markup present).
    TitleHtml,
    /// Parsed from the image's alt text.
    AltText,
    /// Recovered from an enclosing table's label row.
    TableCell,
    /// Nothing yielded a usable name; sentinels are in effect.
    FallbackFailed,
}

/// One structured butterfly-sighting record derived from one photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Scientific (Latin) name, or [`UNKNOWN_SPECIES`].
    pub species: String,

    /// Common name, or [`UNKNOWN_COMMON_NAME`].
    pub common_name: String,

    /// Original unparsed title fragment, with `"` escaped to `&quot;` so it
    /// can be re-embedded in an attribute value.
    pub raw_title: String,

    /// Absolute URL of the full-size image.
    pub full_image_url: String,

    /// Absolute URL of the thumbnail image.
    pub thumbnail_url: String,

    /// Alt text of the thumbnail element.
    pub alt_text: String,

    /// Observation date, when one was extracted from the title.
    pub date: Option<NaiveDate>,

    /// True iff `date` is present.
    pub has_valid_date: bool,

    /// Epoch milliseconds of `date`, or `0` when no date was extracted.
    ///
    /// The stable zero fallback keeps re-scrapes of dateless photos ordering
    /// identically across runs; dateless records sort by species anyway.
    pub timestamp: i64,

    /// Free-text location, possibly empty.
    pub location: String,

    /// WGS84 decimal degrees `(lat, lon)`, range-checked.
    pub coordinates: Option<(f64, f64)>,

    /// Photographer credit, possibly empty.
    pub photographer: String,

    /// URL of the page this record was parsed from.
    pub source_url: String,

    /// Human-readable label for the source page.
    pub source_page_name: String,

    /// Whether the record came from a rich `data-title` tooltip. Records
    /// without it are deduplicated by thumbnail URL alone and excluded from
    /// location/date filtering.
    pub has_data_title: bool,

    /// Provenance of the species/common-name pair.
    pub extraction_method: ExtractionMethod,
}

impl Observation {
    /// Whether both names were actually extracted (neither is a sentinel).
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.species != UNKNOWN_SPECIES && self.common_name != UNKNOWN_COMMON_NAME
    }
}

/// Convert a date to the epoch-millisecond timestamp stored on a record.
#[must_use]
pub(crate) fn date_timestamp_ms(date: Option<NaiveDate>) -> i64 {
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp_millis())
}
