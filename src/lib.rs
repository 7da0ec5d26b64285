//! # lepigallery
//!
//! Butterfly observation extraction from static gallery pages.
//!
//! This library turns the loosely-formatted HTML of butterfly gallery pages
//! into structured observation records: species and common name, date,
//! location, geographic coordinates, photographer and image URLs, pulled
//! out of per-image tooltip strings by a cascade of fallback patterns. The
//! resulting records are deduplicated across pages and re-scrapes, sorted
//! most-recent-first, and filterable for display.
//!
//! The crate performs no network I/O and renders no UI; it consumes raw
//! HTML text (however it was fetched) plus a source URL, and produces
//! renderer-ready records.
//!
//! ## Quick Start
//!
//! ```rust
//! use lepigallery::collect_observations;
//!
//! let html = r#"<a data-lightbox="g"
//!     data-title="<p4><i>Danaus plexippus</i> - Monarch</p4><br/>Phoenix, AZ 2024/06/01"
//!     href="https://img.example/full.jpg"><img src="https://img.example/t.jpg"
//!     alt="Danaus plexippus - Monarch"/></a>"#;
//! let page_url = "https://www.butterflyexplorers.com/p/butterflies-of-arizona.html";
//!
//! let collection = collect_observations([(html, page_url)]);
//! assert_eq!(collection.observations[0].species, "Danaus plexippus");
//! assert_eq!(collection.observations[0].source_page_name, "Arizona");
//! ```

mod builder;
mod dedupe;
mod error;
mod options;
mod patterns;
mod query;
mod record;

/// Field extractors: species/common name, date, location, coordinates,
/// photographer.
pub mod fields;

/// Page parsing: selector union, element identity, source-page labels.
pub mod page;

/// Image URL resolution.
pub mod url_utils;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

// Public API - re-exports
pub use dedupe::dedupe_observations;
pub use error::{Error, Result};
pub use options::Options;
pub use page::{parse_page, source_pages, ParsedPage};
pub use query::{filter_observations, sort_observations, SearchParams};
pub use record::{ExtractionMethod, Observation, UNKNOWN_COMMON_NAME, UNKNOWN_SPECIES};

use std::collections::HashMap;

/// The deduplicated, sorted record set built from a batch of pages.
#[derive(Debug, Clone, Default)]
pub struct GalleryCollection {
    /// Canonical records, sorted most-recent-first.
    pub observations: Vec<Observation>,

    /// Non-fatal issues encountered while building the collection: pages
    /// that failed to parse, and pages with extraction problems. One page's
    /// failure never aborts the batch.
    pub warnings: Vec<String>,
}

impl GalleryCollection {
    /// Count of records per extraction method, for diagnostics.
    #[must_use]
    pub fn method_stats(&self) -> HashMap<ExtractionMethod, usize> {
        let mut stats = HashMap::new();
        for obs in &self.observations {
            *stats.entry(obs.extraction_method).or_insert(0) += 1;
        }
        stats
    }
}

/// Parse a gallery page supplied as raw bytes, with charset detection.
///
/// Detects the declared encoding from the page's own meta tags, converts to
/// UTF-8, then parses as [`parse_page`] does.
///
/// # Example
///
/// ```rust
/// use lepigallery::parse_page_bytes;
///
/// let html = br#"<a data-lightbox="g" data-title="<i>Pieris rapae</i> - Cabbage White"
///     href="https://img.example/full.jpg"><img src="https://img.example/t.jpg"/></a>"#;
/// let page = parse_page_bytes(html, "https://www.butterflyexplorers.com/p/butterflies-of-texas.html")?;
/// assert_eq!(page.page_name, "Texas");
/// assert_eq!(page.observations.len(), 1);
/// # Ok::<(), lepigallery::Error>(())
/// ```
pub fn parse_page_bytes(html: &[u8], source_url: &str) -> Result<ParsedPage> {
    let html_str = encoding::transcode_to_utf8(html);
    parse_page(&html_str, source_url)
}

/// Build the full collection from a batch of fetched pages: parse each
/// page, concatenate, deduplicate, sort.
///
/// This is the whole pipeline as an explicit fold; no state persists
/// between calls, and a re-scrape rebuilds the collection from scratch.
/// Pages that fail to parse are reported in
/// [`GalleryCollection::warnings`] and do not affect other pages.
pub fn collect_observations<'a, I>(pages: I) -> GalleryCollection
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut all = Vec::new();
    let mut warnings = Vec::new();

    for (html, source_url) in pages {
        match page::parse_page(html, source_url) {
            Ok(parsed) => {
                let unidentified = parsed.unidentified_count();
                if unidentified > 0 {
                    warnings.push(format!(
                        "{unidentified} records with extraction issues from {}",
                        parsed.page_name
                    ));
                }
                all.extend(parsed.observations);
            }
            Err(err) => warnings.push(format!("failed to parse {source_url}: {err}")),
        }
    }

    let mut observations = dedupe::dedupe_observations(all);
    query::sort_observations(&mut observations);

    GalleryCollection {
        observations,
        warnings,
    }
}
