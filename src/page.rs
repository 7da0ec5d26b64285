//! Page parsing: from raw HTML text to a list of observations.
//!
//! Gallery pages are inconsistent about how image links are marked up, so
//! the parser takes the union of several progressively looser selectors and
//! processes each DOM element exactly once, however many selectors matched
//! it.

use std::collections::HashSet;

use dom_query::{Document, NodeId, Selection};

use crate::builder::build_observation;
use crate::error::{Error, Result};
use crate::record::Observation;

/// Selectors tried in order, strictest first: rich-tooltip gallery links,
/// lightbox links in table cells, any lightbox link, bare image-extension
/// links.
const IMAGE_LINK_SELECTORS: &[&str] = &[
    ".img-container a[data-lightbox]",
    "td a[data-lightbox]",
    "a[data-lightbox]",
    r#"a[href*=".jpg"], a[href*=".jpeg"], a[href*=".png"]"#,
];

/// Known page slugs and their human-readable labels.
const PAGE_NAMES: &[(&str, &str)] = &[
    ("new-butterflies.html", "New Butterflies"),
    ("butterflies-of-texas.html", "Texas"),
    ("butterflies-of-puerto-rico.html", "Puerto Rico"),
    ("butterflies-of-new-mexico.html", "New Mexico"),
    ("butterflies-of-arizona.html", "Arizona"),
    ("butterflies-of-panama.html", "Panama"),
    ("butterflies-of-florida.html", "Florida"),
    ("dual-checklist.html", "Dual Checklist"),
];

/// The fixed set of gallery pages the original site scrapes, exposed for
/// the external fetch layer.
#[must_use]
pub fn source_pages() -> Vec<String> {
    PAGE_NAMES
        .iter()
        .map(|(slug, _)| format!("https://www.butterflyexplorers.com/p/{slug}"))
        .collect()
}

/// Records parsed from one gallery page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Observations in document order.
    pub observations: Vec<Observation>,
    /// Human-readable label for the source page.
    pub page_name: String,
    /// The source URL the page was parsed against.
    pub source_url: String,
}

impl ParsedPage {
    /// Number of records whose species or common name is still a sentinel.
    #[must_use]
    pub fn unidentified_count(&self) -> usize {
        self.observations.iter().filter(|o| !o.is_identified()).count()
    }
}

/// Parse one gallery page into observation records.
///
/// Malformed fragments never fail the parse; elements that do not match any
/// selector, or that lack either image URL, simply contribute no record.
/// Only input with no usable markup at all is an error.
pub fn parse_page(html: &str, source_url: &str) -> Result<ParsedPage> {
    if html.trim().is_empty() {
        return Err(Error::Parse(format!("empty page content from {source_url}")));
    }

    let doc = Document::from(html);
    let page_name = page_name_for(source_url);

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut observations = Vec::new();

    for selector in IMAGE_LINK_SELECTORS {
        for node in doc.select(selector).nodes() {
            if !seen.insert(node.id) {
                continue;
            }
            let link = Selection::from(*node);
            if let Some(obs) = build_observation(&link, source_url, &page_name) {
                observations.push(obs);
            }
        }
    }

    Ok(ParsedPage {
        observations,
        page_name,
        source_url: source_url.to_string(),
    })
}

/// Human label for a source URL, by substring match against the known page
/// slugs; "Unknown" when no slug matches.
#[must_use]
pub fn page_name_for(url: &str) -> String {
    PAGE_NAMES
        .iter()
        .find(|(slug, _)| url.contains(slug))
        .map_or_else(|| "Unknown".to_string(), |(_, name)| (*name).to_string())
}
