use lepigallery::{collect_observations, parse_page, parse_page_bytes, ExtractionMethod};

const NEW_MEXICO: &str = "https://www.butterflyexplorers.com/p/butterflies-of-new-mexico.html";
const TEXAS: &str = "https://www.butterflyexplorers.com/p/butterflies-of-texas.html";

/// A page mixing every markup style the galleries use: a rich tooltip link,
/// a table-based gallery, and a bare extension link.
const MIXED_PAGE: &str = r#"
<html><body>
  <div class="img-container">
    <a data-lightbox="gallery" href="/images/pieris-marginalis-01.jpg"
       data-title="<p4><i>Pieris marginalis</i> - Margined White</p4><br/>Taos Ski Valley, Taos Co., New Mexico (36&#176;34'41''N 105&#176;26'26''W, 10227 ft.) 2025/07/07 &copy; Sajan K.C.">
      <img src="/thumbs/pieris-marginalis-01.jpg" alt="Pieris marginalis - Margined White"/>
    </a>
  </div>
  <table>
    <tr>
      <td><a data-lightbox="gallery" href="https://img.example/heliconius.jpg"><img src="https://img.example/heliconius-t.jpg"/></a></td>
    </tr>
    <tr>
      <td><i>Heliconius charithonia</i> - <strong>Zebra Longwing</strong></td>
    </tr>
  </table>
  <p><a href="https://img.example/mystery-shot-3.png"><img src="https://img.example/mystery-shot-3-t.png"/></a></p>
</body></html>
"#;

#[test]
fn mixed_markup_page_yields_all_three_records() {
    let page = match parse_page(MIXED_PAGE, NEW_MEXICO) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.page_name, "New Mexico");
    assert_eq!(page.observations.len(), 3);

    let rich = &page.observations[0];
    assert_eq!(rich.species, "Pieris marginalis");
    assert_eq!(rich.common_name, "Margined White");
    assert_eq!(rich.location, "Taos Ski Valley, Taos Co., New Mexico");
    assert_eq!(rich.photographer, "Sajan K.C.");
    assert!(rich.has_valid_date);
    assert!(rich.coordinates.is_some());
    assert_eq!(rich.extraction_method, ExtractionMethod::TitleHtml);
    assert_eq!(
        rich.full_image_url,
        "https://www.butterflyexplorers.com/images/pieris-marginalis-01.jpg"
    );

    let table = &page.observations[1];
    assert_eq!(table.species, "Heliconius charithonia");
    assert_eq!(table.common_name, "Zebra Longwing");

    let bare = &page.observations[2];
    assert!(!bare.has_data_title);
    assert_eq!(bare.species, "mystery shot");
}

#[test]
fn records_carry_their_source_page() {
    let page = match parse_page(MIXED_PAGE, NEW_MEXICO) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    for obs in &page.observations {
        assert_eq!(obs.source_url, NEW_MEXICO);
        assert_eq!(obs.source_page_name, "New Mexico");
    }
}

#[test]
fn byte_input_with_declared_charset_parses() {
    let mut html = Vec::new();
    html.extend_from_slice(b"<html><head><meta charset=\"ISO-8859-1\"></head><body>");
    html.extend_from_slice(
        b"<a data-lightbox=\"g\" data-title=\"<i>Pieris rapae</i> - Cabbage White<br/>Caf\xe9 Garden\" href=\"https://x.com/full.jpg\"><img src=\"https://x.com/t.jpg\"/></a>",
    );
    html.extend_from_slice(b"</body></html>");

    let page = match parse_page_bytes(&html, TEXAS) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.observations.len(), 1);
    assert_eq!(page.observations[0].location, "Café Garden");
}

#[test]
fn truncated_markup_still_produces_earlier_records() {
    let html = r#"
        <a data-lightbox="g" data-title="<i>Danaus plexippus</i> - Monarch" href="https://x.com/m.jpg"><img src="https://x.com/m-t.jpg"/></a>
        <a data-lightbox="g" href="https://x.com/broken.jpg"><img
    "#;

    let page = match parse_page(html, TEXAS) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert!(!page.observations.is_empty());
    assert_eq!(page.observations[0].species, "Danaus plexippus");
}

#[test]
fn batch_survives_one_bad_page() {
    let collection = collect_observations([(MIXED_PAGE, NEW_MEXICO), ("", TEXAS)]);

    assert_eq!(collection.observations.len(), 3);
    assert!(collection
        .warnings
        .iter()
        .any(|w| w.contains("failed to parse")));
}

#[test]
fn batch_dedupes_across_pages() {
    let repeat = r#"<a data-lightbox="g" data-title="<p4><i>Pieris marginalis</i> - Margined White</p4>" href="https://www.butterflyexplorers.com/images/pieris-marginalis-01.jpg"><img src="https://www.butterflyexplorers.com/thumbs/pieris-marginalis-01.jpg"/></a>"#;

    let collection = collect_observations([(MIXED_PAGE, NEW_MEXICO), (repeat, TEXAS)]);

    // The repeated photo merges with its dated first appearance.
    let marginalis: Vec<_> = collection
        .observations
        .iter()
        .filter(|o| o.species == "Pieris marginalis")
        .collect();
    assert_eq!(marginalis.len(), 1);
    assert!(marginalis[0].has_valid_date);
    assert_eq!(marginalis[0].source_page_name, "New Mexico");
}

#[test]
fn collection_is_sorted_dated_first() {
    let collection = collect_observations([(MIXED_PAGE, NEW_MEXICO)]);

    assert_eq!(collection.observations.len(), 3);
    assert!(collection.observations[0].has_valid_date);
    assert!(!collection.observations[1].has_valid_date);
}
