//! Response-shape serialization: camelCase keys, untagged JSON-LD,
//! optional text omission

use serde_json::{Value, json};
use sitesnap::extract::schema::{
    ExtractedDocument, Heading, ImageRef, JsonLd, Link, MetaTag, OpenGraphTag, PageText, Section,
};

fn sample_document(text: Option<PageText>) -> ExtractedDocument {
    ExtractedDocument {
        url: "https://example.com/".to_string(),
        title: "Example".to_string(),
        meta: vec![MetaTag {
            name: "description".to_string(),
            content: "d".to_string(),
        }],
        open_graph: vec![OpenGraphTag {
            property: "og:type".to_string(),
            content: "website".to_string(),
        }],
        json_ld: vec![
            JsonLd::Parsed(json!({"a": 1})),
            JsonLd::Raw("{a:}".to_string()),
        ],
        headings: vec![Heading {
            tag: "h1".to_string(),
            text: "Example".to_string(),
        }],
        links: vec![Link {
            href: "https://example.com/next".to_string(),
            text: "next".to_string(),
        }],
        images: vec![ImageRef {
            src: "https://example.com/a.png".to_string(),
            alt: "a".to_string(),
        }],
        scripts: vec!["https://example.com/app.js".to_string()],
        stylesheets: vec!["https://example.com/app.css".to_string()],
        text,
    }
}

#[test]
fn document_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(sample_document(None)).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("openGraph"));
    assert!(obj.contains_key("jsonLd"));
    assert!(obj.contains_key("stylesheets"));
    assert!(!obj.contains_key("open_graph"));
}

#[test]
fn text_is_omitted_when_absent() {
    let value = serde_json::to_value(sample_document(None)).unwrap();
    assert!(value.get("text").is_none());
}

#[test]
fn text_serializes_with_sections() {
    let text = PageText {
        full_text: "Example body".to_string(),
        blocks: vec!["Example body".to_string()],
        sections: vec![Section {
            heading: Some("Example".to_string()),
            text: vec!["Example body".to_string()],
        }],
    };
    let value = serde_json::to_value(sample_document(Some(text))).unwrap();

    assert_eq!(value["text"]["fullText"], "Example body");
    assert_eq!(value["text"]["sections"][0]["heading"], "Example");
}

#[test]
fn json_ld_serializes_untagged() {
    let value = serde_json::to_value(sample_document(None)).unwrap();

    // Parsed entries surface as JSON objects, raw fallbacks as plain strings
    assert_eq!(value["jsonLd"][0], json!({"a": 1}));
    assert_eq!(value["jsonLd"][1], Value::String("{a:}".to_string()));
}

#[test]
fn headingless_section_serializes_null_heading() {
    let section = Section {
        heading: None,
        text: vec!["lead".to_string()],
    };
    let value = serde_json::to_value(&section).unwrap();
    assert!(value["heading"].is_null());
}
