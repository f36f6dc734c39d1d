//! Cap, ordering, and JSON-LD invariants of document assembly

use serde_json::json;
use sitesnap::extract::document::{assemble_document, assemble_text};
use sitesnap::extract::schema::{Heading, ImageRef, Link, MetaTag, OpenGraphTag, RawDocument, RawText};
use sitesnap::extract::{ExtractOptions, JsonLd, parse_json_ld};

fn raw_document(link_count: usize, image_count: usize) -> RawDocument {
    RawDocument {
        url: "https://example.com/page".to_string(),
        title: "Example".to_string(),
        meta: vec![MetaTag {
            name: "description".to_string(),
            content: "a page".to_string(),
        }],
        open_graph: vec![OpenGraphTag {
            property: "og:title".to_string(),
            content: "Example".to_string(),
        }],
        json_ld: Vec::new(),
        headings: vec![Heading {
            tag: "h1".to_string(),
            text: "Example".to_string(),
        }],
        links: (0..link_count)
            .map(|i| Link {
                href: format!("https://example.com/{i}"),
                text: format!("link {i}"),
            })
            .collect(),
        images: (0..image_count)
            .map(|i| ImageRef {
                src: format!("https://example.com/img/{i}.png"),
                alt: String::new(),
            })
            .collect(),
        scripts: Vec::new(),
        stylesheets: Vec::new(),
    }
}

#[test]
fn links_are_capped_to_first_n_in_document_order() {
    let opts = ExtractOptions {
        max_links: 2,
        ..ExtractOptions::default()
    };
    let doc = assemble_document(raw_document(5, 0), &opts, None);

    assert_eq!(doc.links.len(), 2);
    assert_eq!(doc.links[0].href, "https://example.com/0");
    assert_eq!(doc.links[1].href, "https://example.com/1");
}

#[test]
fn images_are_capped_independently() {
    let opts = ExtractOptions {
        max_links: 10,
        max_images: 3,
        ..ExtractOptions::default()
    };
    let doc = assemble_document(raw_document(1, 7), &opts, None);

    assert_eq!(doc.links.len(), 1);
    assert_eq!(doc.images.len(), 3);
    assert_eq!(doc.images[2].src, "https://example.com/img/2.png");
}

#[test]
fn sequences_below_cap_are_untouched() {
    let doc = assemble_document(raw_document(4, 4), &ExtractOptions::default(), None);
    assert_eq!(doc.links.len(), 4);
    assert_eq!(doc.images.len(), 4);
}

#[test]
fn valid_json_ld_is_parsed() {
    match parse_json_ld(r#"{"a":1}"#) {
        JsonLd::Parsed(value) => assert_eq!(value, json!({"a": 1})),
        JsonLd::Raw(raw) => panic!("expected parsed JSON, got raw {raw:?}"),
    }
}

#[test]
fn invalid_json_ld_falls_back_to_trimmed_raw_text() {
    match parse_json_ld("  {a:}  ") {
        JsonLd::Raw(raw) => assert_eq!(raw, "{a:}"),
        JsonLd::Parsed(value) => panic!("expected raw fallback, got {value:?}"),
    }
}

#[test]
fn json_ld_entries_keep_document_order() {
    let mut raw = raw_document(0, 0);
    raw.json_ld = vec![r#"{"first":true}"#.to_string(), "{broken".to_string()];
    let doc = assemble_document(raw, &ExtractOptions::default(), None);

    assert_eq!(doc.json_ld.len(), 2);
    assert!(matches!(doc.json_ld[0], JsonLd::Parsed(_)));
    assert!(matches!(doc.json_ld[1], JsonLd::Raw(_)));
}

#[test]
fn text_blocks_drop_empties_and_keep_order() {
    let raw = RawText {
        full_text: "  hello\n\n  world  ".to_string(),
        blocks: vec![
            "first".to_string(),
            "   ".to_string(),
            String::new(),
            " second ".to_string(),
        ],
        fragments: Vec::new(),
    };
    let text = assemble_text(raw);

    assert_eq!(text.full_text, "hello world");
    assert_eq!(text.blocks, vec!["first".to_string(), "second".to_string()]);
    assert!(text.sections.is_empty());
}
