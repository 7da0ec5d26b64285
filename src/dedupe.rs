//! Deduplication of observations harvested across pages and re-scrapes.
//!
//! The same photograph can be picked up more than once, sometimes with
//! differing completeness (one copy has a parsed date, another does not).
//! Records that carry a rich tooltip have enough structured text to be
//! deduplicated exactly; weaker records risk being accidental species-level
//! near-duplicates, so their identity falls back to the thumbnail URL alone
//! and the merge step greedily patches in the more complete fields.

use std::collections::HashMap;

use crate::record::{Observation, UNKNOWN_COMMON_NAME, UNKNOWN_SPECIES};

/// Identity of one underlying photograph. The two schemes never compare
/// against each other, even when they point at the same thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdentityKey {
    /// Rich-tooltip records: species + common name + thumbnail URL.
    Strict(String, String, String),
    /// Weak records: thumbnail URL alone.
    Relaxed(String),
}

impl IdentityKey {
    fn for_record(obs: &Observation) -> Self {
        if obs.has_data_title {
            Self::Strict(
                obs.species.clone(),
                obs.common_name.clone(),
                obs.thumbnail_url.clone(),
            )
        } else {
            Self::Relaxed(obs.thumbnail_url.clone())
        }
    }
}

/// Collapse records sharing an identity key into one, preserving input
/// order of first occurrence.
///
/// On a collision the kept record is replaced only when the incoming one is
/// strictly better: it has a valid date and the kept one does not, or (for
/// relaxed-key records only) it has a real species or common name where the
/// kept one has a sentinel.
#[must_use]
pub fn dedupe_observations(observations: Vec<Observation>) -> Vec<Observation> {
    let mut kept: Vec<Observation> = Vec::with_capacity(observations.len());
    let mut index_by_key: HashMap<IdentityKey, usize> = HashMap::new();

    for obs in observations {
        let key = IdentityKey::for_record(&obs);
        match index_by_key.get(&key) {
            None => {
                index_by_key.insert(key, kept.len());
                kept.push(obs);
            }
            Some(&at) => {
                if prefers_incoming(&kept[at], &obs) {
                    kept[at] = obs;
                }
            }
        }
    }

    kept
}

fn prefers_incoming(existing: &Observation, incoming: &Observation) -> bool {
    if incoming.has_valid_date && !existing.has_valid_date {
        return true;
    }

    // Field-level repair only applies to weak records; strict keys already
    // agree on both names.
    if !incoming.has_data_title {
        if incoming.species != UNKNOWN_SPECIES && existing.species == UNKNOWN_SPECIES {
            return true;
        }
        if incoming.common_name != UNKNOWN_COMMON_NAME
            && existing.common_name == UNKNOWN_COMMON_NAME
        {
            return true;
        }
    }

    false
}
