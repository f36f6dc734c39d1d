//! Section-builder behavior over in-order fragment lists

use sitesnap::extract::build_sections;
use sitesnap::extract::sections::{Fragment, FragmentKind};

fn heading(text: &str) -> Fragment {
    Fragment {
        kind: FragmentKind::Heading,
        text: text.to_string(),
    }
}

fn block(text: &str) -> Fragment {
    Fragment {
        kind: FragmentKind::Block,
        text: text.to_string(),
    }
}

#[test]
fn heading_paragraph_pairs_become_sections() {
    // <h1>A</h1><p>x</p><h2>B</h2><p>y</p>
    let sections = build_sections(&[heading("A"), block("x"), heading("B"), block("y")]);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].heading.as_deref(), Some("A"));
    assert_eq!(sections[0].text, vec!["x".to_string()]);
    assert_eq!(sections[1].heading.as_deref(), Some("B"));
    assert_eq!(sections[1].text, vec!["y".to_string()]);
}

#[test]
fn leading_content_forms_headingless_section() {
    let sections = build_sections(&[block("preamble"), block("more"), heading("First"), block("x")]);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].heading, None);
    assert_eq!(sections[0].text, vec!["preamble".to_string(), "more".to_string()]);
    assert_eq!(sections[1].heading.as_deref(), Some("First"));
}

#[test]
fn document_starting_with_heading_has_no_empty_lead() {
    let sections = build_sections(&[heading("Only"), block("body")]);
    assert_eq!(sections.len(), 1);
}

#[test]
fn final_section_is_flushed() {
    let sections = build_sections(&[heading("A"), block("x"), heading("Trailing")]);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].heading.as_deref(), Some("Trailing"));
    assert!(sections[1].text.is_empty());
}

#[test]
fn consecutive_headings_each_get_a_section() {
    let sections = build_sections(&[heading("A"), heading("B"), heading("C"), block("z")]);

    assert_eq!(sections.len(), 3);
    assert!(sections[0].text.is_empty());
    assert!(sections[1].text.is_empty());
    assert_eq!(sections[2].text, vec!["z".to_string()]);
}

#[test]
fn blank_blocks_never_accumulate() {
    let sections = build_sections(&[block("  "), block("\n\t"), heading("A")]);

    // Whitespace-only leading content is not a section
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading.as_deref(), Some("A"));
}

#[test]
fn section_order_follows_document_order() {
    let sections = build_sections(&[
        heading("One"),
        block("a"),
        heading("Two"),
        block("b"),
        heading("Three"),
        block("c"),
    ]);

    let headings: Vec<_> = sections.iter().filter_map(|s| s.heading.as_deref()).collect();
    assert_eq!(headings, vec!["One", "Two", "Three"]);
}
