use chrono::NaiveDate;
use lepigallery::{
    dedupe_observations, ExtractionMethod, Observation, UNKNOWN_COMMON_NAME, UNKNOWN_SPECIES,
};

fn record(species: &str, common: &str, thumb: &str, rich: bool) -> Observation {
    Observation {
        species: species.to_string(),
        common_name: common.to_string(),
        raw_title: String::new(),
        full_image_url: format!("{thumb}-full.jpg"),
        thumbnail_url: format!("{thumb}.jpg"),
        alt_text: String::new(),
        date: None,
        has_valid_date: false,
        timestamp: 0,
        location: String::new(),
        coordinates: None,
        photographer: String::new(),
        source_url: String::new(),
        source_page_name: "Texas".to_string(),
        has_data_title: rich,
        extraction_method: ExtractionMethod::TitleHtml,
    }
}

fn dated(mut obs: Observation, y: i32, m: u32, d: u32) -> Observation {
    let date = NaiveDate::from_ymd_opt(y, m, d);
    assert!(date.is_some());
    obs.date = date;
    obs.has_valid_date = true;
    obs.timestamp = 1;
    obs
}

#[test]
fn identical_rich_records_collapse() {
    let records = vec![
        record("Danaus plexippus", "Monarch", "m1", true),
        record("Danaus plexippus", "Monarch", "m1", true),
    ];

    assert_eq!(dedupe_observations(records).len(), 1);
}

#[test]
fn same_thumbnail_different_species_stays_separate_for_rich_records() {
    // Mislabeled re-uploads keep both identifications visible.
    let records = vec![
        record("Danaus plexippus", "Monarch", "m1", true),
        record("Danaus gilippus", "Queen", "m1", true),
    ];

    assert_eq!(dedupe_observations(records).len(), 2);
}

#[test]
fn weak_records_collapse_by_thumbnail_alone() {
    let mut a = record(UNKNOWN_SPECIES, UNKNOWN_COMMON_NAME, "m1", false);
    a.alt_text = "first".to_string();
    let b = record(UNKNOWN_SPECIES, UNKNOWN_COMMON_NAME, "m1", false);

    let out = dedupe_observations(vec![a, b]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].alt_text, "first");
}

#[test]
fn rich_and_weak_records_never_merge_across_schemes() {
    let records = vec![
        record("Danaus plexippus", "Monarch", "m1", true),
        record(UNKNOWN_SPECIES, UNKNOWN_COMMON_NAME, "m1", false),
    ];

    assert_eq!(dedupe_observations(records).len(), 2);
}

#[test]
fn dated_duplicate_replaces_undated_original() {
    let undated = record("Danaus plexippus", "Monarch", "m1", true);
    let with_date = dated(record("Danaus plexippus", "Monarch", "m1", true), 2024, 6, 1);

    let out = dedupe_observations(vec![undated, with_date]);
    assert_eq!(out.len(), 1);
    assert!(out[0].has_valid_date);
}

#[test]
fn undated_duplicate_does_not_displace_dated_original() {
    let with_date = dated(record("Danaus plexippus", "Monarch", "m1", true), 2024, 6, 1);
    let undated = record("Danaus plexippus", "Monarch", "m1", true);

    let out = dedupe_observations(vec![with_date, undated]);
    assert_eq!(out.len(), 1);
    assert!(out[0].has_valid_date);
}

#[test]
fn identified_weak_duplicate_beats_sentinel_original() {
    let sentinel = record(UNKNOWN_SPECIES, UNKNOWN_COMMON_NAME, "m1", false);
    let named = record("Danaus plexippus", "Monarch", "m1", false);

    let out = dedupe_observations(vec![sentinel, named]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].species, "Danaus plexippus");
}

#[test]
fn first_seen_order_is_preserved() {
    let records = vec![
        record("Bb bb", "B", "b1", true),
        record("Aa aa", "A", "a1", true),
        record("Bb bb", "B", "b1", true),
        record("Cc cc", "C", "c1", true),
    ];

    let out = dedupe_observations(records);
    let species: Vec<_> = out.iter().map(|o| o.species.as_str()).collect();
    assert_eq!(species, ["Bb bb", "Aa aa", "Cc cc"]);
}
