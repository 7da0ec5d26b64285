//! Per-element observation assembly.
//!
//! Given one qualifying image link, resolve the best available title,
//! run every field extractor against it, and fall back through weaker
//! name sources (alt text, enclosing table label row, image filename)
//! until something usable turns up or the sentinels apply.

use dom_query::{Selection, NodeRef};

use crate::fields;
use crate::patterns::{ALT_PATTERNS, TABLE_LABEL};
use crate::record::{
    date_timestamp_ms, ExtractionMethod, Observation, UNKNOWN_COMMON_NAME, UNKNOWN_SPECIES,
};
use crate::url_utils::{filename_stem, resolve_image_url};

/// Ancestor-walk depth bound; gallery markup never nests deeper.
const MAX_ANCESTOR_DEPTH: usize = 32;

/// Build an `Observation` from one image link, or `None` when the element
/// does not carry both image URLs (such elements are silently skipped).
pub(crate) fn build_observation(
    link: &Selection,
    source_url: &str,
    source_page_name: &str,
) -> Option<Observation> {
    let img = link.select("img");
    if img.is_empty() {
        return None;
    }

    let full_image_url = attr_string(link, "href")?;
    let thumbnail_url = attr_string(&img, "src")?;

    let has_data_title = link.has_attr("data-title");
    let alt = attr_string(&img, "alt").unwrap_or_default();

    // Title priority: rich tooltip, plain title attribute, alt text.
    let title = attr_string(link, "data-title")
        .or_else(|| attr_string(link, "title"))
        .unwrap_or_else(|| alt.clone());

    let extracted = fields::extract_title_fields(&title);
    let (mut species, mut common_name) = extracted.names.unwrap_or_default();

    if (species.is_empty() || common_name.is_empty()) && !alt.is_empty() {
        apply_alt_fallback(&alt, &mut species, &mut common_name);
    }

    if species.is_empty() || common_name.is_empty() {
        apply_table_fallback(link, &mut species, &mut common_name);
    }

    if species.is_empty() && common_name.is_empty() {
        if let Some(guess) = species_from_filename(&full_image_url) {
            species = guess;
        }
    }

    if species.len() < 2 {
        species = UNKNOWN_SPECIES.to_string();
    }
    if common_name.len() < 2 {
        common_name = UNKNOWN_COMMON_NAME.to_string();
    }

    let extraction_method = classify_extraction(&title, &alt, &species);
    let alt_text = if alt.is_empty() {
        format!("{species} - {common_name}")
    } else {
        alt.clone()
    };

    Some(Observation {
        species,
        common_name,
        raw_title: title.replace('"', "&quot;"),
        full_image_url: resolve_image_url(&full_image_url, source_url),
        thumbnail_url: resolve_image_url(&thumbnail_url, source_url),
        alt_text,
        date: extracted.date,
        has_valid_date: extracted.date.is_some(),
        timestamp: date_timestamp_ms(extracted.date),
        location: extracted.location,
        coordinates: extracted.coordinates,
        photographer: extracted.photographer,
        source_url: source_url.to_string(),
        source_page_name: source_page_name.to_string(),
        has_data_title,
        extraction_method,
    })
}

/// Provenance of the final species/common-name pair, in decreasing order of
/// confidence.
fn classify_extraction(title: &str, alt: &str, species: &str) -> ExtractionMethod {
    let identified = species != UNKNOWN_SPECIES;
    if identified && title.contains("<i>") {
        ExtractionMethod::TitleHtml
    } else if identified && alt.contains('-') {
        ExtractionMethod::AltText
    } else if identified {
        ExtractionMethod::TableCell
    } else {
        ExtractionMethod::FallbackFailed
    }
}

/// Fill missing names from the image's alt text (`TEXT1 - TEXT2`, then the
/// stricter binomial form).
fn apply_alt_fallback(alt: &str, species: &mut String, common_name: &mut String) {
    for pattern in ALT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(alt) {
            if species.is_empty() {
                if let Some(m) = caps.get(1) {
                    *species = m.as_str().trim().to_string();
                }
            }
            if common_name.is_empty() {
                if let Some(m) = caps.get(2) {
                    *common_name = m.as_str().trim().to_string();
                }
            }
            break;
        }
    }
}

/// Fill missing names from the second row of an enclosing two-row gallery
/// table, using the cell that shares the link's column index.
fn apply_table_fallback(link: &Selection, species: &mut String, common_name: &mut String) {
    let Some(cell) = closest(link, "td") else {
        return;
    };
    let Some(table) = closest(&cell, "table") else {
        return;
    };

    let rows = table.select("tr");
    let row_nodes = rows.nodes();
    if row_nodes.len() < 2 {
        return;
    }

    let first_row = Selection::from(row_nodes[0]);
    let second_row = Selection::from(row_nodes[1]);

    let Some(cell_id) = cell.nodes().first().map(|n| n.id) else {
        return;
    };
    let Some(cell_index) = first_row
        .children()
        .nodes()
        .iter()
        .position(|n| n.id == cell_id)
    else {
        return;
    };

    let label_nodes = second_row.children();
    let Some(label_node) = label_nodes.nodes().get(cell_index) else {
        return;
    };
    let label_cell = Selection::from(*label_node);
    let label_text = label_cell.text().trim().to_string();

    if let Some(caps) = TABLE_LABEL.captures(&label_text) {
        if species.is_empty() {
            if let Some(m) = caps.get(1) {
                *species = m.as_str().trim().to_string();
            }
        }
        if common_name.is_empty() {
            if let Some(m) = caps.get(2) {
                *common_name = m.as_str().trim().to_string();
            }
        }
        return;
    }

    // No textual A - B label; fall back to markup conventions.
    if species.is_empty() {
        let italic = label_cell.select("i");
        if !italic.is_empty() {
            *species = italic.text().trim().to_string();
        }
    }
    if common_name.is_empty() {
        let bold = label_cell.select("strong, b");
        if !bold.is_empty() {
            *common_name = bold.text().trim().to_string();
        }
    }
}

/// Last-resort species guess from the full-size image filename: extension
/// and digits stripped, separators turned into spaces. Only guesses longer
/// than 3 characters are trusted.
fn species_from_filename(full_image_url: &str) -> Option<String> {
    let stem = filename_stem(full_image_url);
    if stem.is_empty() {
        return None;
    }

    let cleaned: String = stem
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim().to_string();

    (cleaned.len() > 3).then_some(cleaned)
}

fn attr_string(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
}

/// Nearest ancestor matching `tag`, bounded to keep malformed deeply-nested
/// markup from walking forever.
fn closest<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = sel.parent();
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if current.is_empty() {
            return None;
        }
        let name = current.nodes().first().and_then(NodeRef::node_name);
        if name.as_deref() == Some(tag) {
            return Some(current);
        }
        current = current.parent();
    }
    None
}
