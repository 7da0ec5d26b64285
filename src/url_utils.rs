//! URL utilities for image link resolution.
//!
//! Gallery pages mix absolute, protocol-relative, root-relative and relative
//! image URLs; everything is normalized to absolute form against the source
//! page so the records are renderer-ready.

use url::Url;

/// Resolve an image URL to absolute form against the source page URL.
///
/// Resolution ladder:
/// 1. already absolute (`http`/`https`) — passed through unchanged;
/// 2. protocol-relative (`//cdn...`) — gains `https:`;
/// 3. root-relative (`/images/...`) — resolved against the source origin;
/// 4. anything else — joined relative to the source URL.
///
/// When the source URL itself cannot be parsed, the input is returned
/// unchanged; a wrong-but-present URL is more useful to the renderers than
/// an empty one.
#[must_use]
pub fn resolve_image_url(url: &str, source_url: &str) -> String {
    let url = url.trim();

    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if let Some(rest) = url.strip_prefix("//") {
        return format!("https://{rest}");
    }

    let Ok(base) = Url::parse(source_url) else {
        return url.to_string();
    };

    if url.starts_with('/') {
        return format!("{}{url}", base.origin().ascii_serialization());
    }

    match base.join(url) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url.to_string(),
    }
}

/// Extract the filename stem from an image URL: last path segment with
/// extension, query and fragment stripped. Used for the filename-derived
/// species guess.
#[must_use]
pub fn filename_stem(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let filename = without_query.rsplit('/').next().unwrap_or("");
    filename.split('.').next().unwrap_or("").to_string()
}
