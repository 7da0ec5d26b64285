//! Date extraction from tooltip titles.
//!
//! Pattern selection is structural: a leading four-digit group is read as a
//! year, anything else as a month. Two-digit-first dates are therefore
//! interpreted month-first (MM/DD/YYYY); the source galleries are US pages,
//! and a day-first reading has no evidence in the data.

use chrono::{NaiveDate, Utc};

use crate::options::Options;
use crate::patterns::{DATE_MDY_DASH, DATE_MDY_SLASH, DATE_YMD_DASH, DATE_YMD_SLASH};

/// Extract a calendar date from a title string.
///
/// Tries `YYYY/MM/DD`, `MM/DD/YYYY`, `YYYY-MM-DD`, `MM-DD-YYYY` in order;
/// the first structural match decides the interpretation. A match that is
/// not a real calendar date (e.g. month 13) yields `None` rather than
/// rolling over.
#[must_use]
pub fn parse_date(title: &str) -> Option<NaiveDate> {
    if title.is_empty() {
        return None;
    }

    // (pattern, year-first?) in priority order
    let patterns = [
        (&*DATE_YMD_SLASH, true),
        (&*DATE_MDY_SLASH, false),
        (&*DATE_YMD_DASH, true),
        (&*DATE_MDY_DASH, false),
    ];

    for (pattern, year_first) in patterns {
        if let Some(caps) = pattern.captures(title) {
            let (year, month, day) = if year_first {
                (caps.get(1), caps.get(2), caps.get(3))
            } else {
                (caps.get(3), caps.get(1), caps.get(2))
            };

            let year: i32 = year.and_then(|m| m.as_str().parse().ok())?;
            let month: u32 = month.and_then(|m| m.as_str().parse().ok())?;
            let day: u32 = day.and_then(|m| m.as_str().parse().ok())?;

            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }

    None
}

/// Informational recency check against the configured window.
///
/// A record without a date counts as recent, matching the permissive
/// behavior the gallery renderer expects.
#[must_use]
pub fn is_recent(date: Option<NaiveDate>, opts: &Options) -> bool {
    let Some(date) = date else {
        return true;
    };

    let today = Utc::now().date_naive();
    let diff_days = (today - date).num_days().abs();
    diff_days <= opts.days_threshold
}
